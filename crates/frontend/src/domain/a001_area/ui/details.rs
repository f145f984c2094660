use contracts::domain::a001_area::AreaDto;
use contracts::domain::a002_campus::Campus;
use contracts::domain::common::Resource;
use contracts::shared::lookup::Lookups;
use leptos::prelude::*;

use crate::shared::components::form_fields::{RelationSelect, TextField};
use crate::shared::resource::view::lookup_options;

pub fn area_form(draft: RwSignal<AreaDto>, lookups: Signal<Lookups>, disabled: Signal<bool>) -> AnyView {
    view! {
        <TextField
            label="Nombre"
            required=true
            value=Signal::derive(move || draft.with(|d| d.name.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.name = v))
            disabled=disabled
        />
        <RelationSelect
            label="Sede"
            options=lookup_options(lookups, Campus::KEY)
            value=Signal::derive(move || draft.with(|d| d.campus.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.campus = v))
            disabled=disabled
        />
    }
    .into_any()
}
