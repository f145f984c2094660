use contracts::domain::a002_campus::CampusDto;
use contracts::domain::a014_training_center::TrainingCenter;
use contracts::domain::common::Resource;
use contracts::shared::lookup::Lookups;
use contracts::shared::validation::blank_to_none;
use leptos::prelude::*;

use crate::shared::components::form_fields::{RelationSelect, TextField};
use crate::shared::resource::view::lookup_options;

pub fn campus_form(draft: RwSignal<CampusDto>, lookups: Signal<Lookups>, disabled: Signal<bool>) -> AnyView {
    view! {
        <TextField
            label="Nombre"
            required=true
            value=Signal::derive(move || draft.with(|d| d.name.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.name = v))
            disabled=disabled
        />
        <TextField
            label="Dirección"
            value=Signal::derive(move || draft.with(|d| d.address.clone().unwrap_or_default()))
            on_change=Callback::new(move |v: String| draft.update(|d| d.address = blank_to_none(v)))
            disabled=disabled
        />
        <RelationSelect
            label="Centro de formación"
            required=true
            options=lookup_options(lookups, TrainingCenter::KEY)
            value=Signal::derive(move || draft.with(|d| d.training_center.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.training_center = v))
            disabled=disabled
        />
    }
    .into_any()
}
