use contracts::domain::a014_training_center::TrainingCenterDto;
use contracts::domain::a015_municipality::Municipality;
use contracts::domain::common::Resource;
use contracts::shared::lookup::Lookups;
use leptos::prelude::*;

use crate::shared::components::form_fields::{RelationSelect, TextField};
use crate::shared::resource::view::lookup_options;

pub fn training_center_form(
    draft: RwSignal<TrainingCenterDto>,
    lookups: Signal<Lookups>,
    disabled: Signal<bool>,
) -> AnyView {
    view! {
        <TextField
            label="Nombre"
            required=true
            value=Signal::derive(move || draft.with(|d| d.name.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.name = v))
            disabled=disabled
        />
        <RelationSelect
            label="Municipio"
            required=true
            options=lookup_options(lookups, Municipality::KEY)
            value=Signal::derive(move || draft.with(|d| d.municipality.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.municipality = v))
            disabled=disabled
        />
    }
    .into_any()
}
