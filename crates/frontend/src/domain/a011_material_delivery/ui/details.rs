use contracts::domain::a009_request::Request;
use contracts::domain::a011_material_delivery::MaterialDeliveryDto;
use contracts::domain::a012_training_cohort::TrainingCohort;
use contracts::domain::a017_user::User;
use contracts::domain::common::Resource;
use contracts::shared::lookup::Lookups;
use contracts::shared::validation::blank_to_none;
use leptos::prelude::*;

use crate::shared::components::form_fields::{DateField, RelationSelect, TextAreaField};
use crate::shared::resource::view::lookup_options;

pub fn material_delivery_form(
    draft: RwSignal<MaterialDeliveryDto>,
    lookups: Signal<Lookups>,
    disabled: Signal<bool>,
) -> AnyView {
    view! {
        <DateField
            label="Fecha de entrega"
            required=true
            value=Signal::derive(move || draft.with(|d| d.date))
            on_change=Callback::new(move |v| draft.update(|d| d.date = v))
            disabled=disabled
        />
        <RelationSelect
            label="Ficha"
            required=true
            options=lookup_options(lookups, TrainingCohort::KEY)
            value=Signal::derive(move || draft.with(|d| d.cohort.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.cohort = v))
            disabled=disabled
        />
        <RelationSelect
            label="Solicitud"
            required=true
            options=lookup_options(lookups, Request::KEY)
            value=Signal::derive(move || draft.with(|d| d.request.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.request = v))
            disabled=disabled
        />
        <RelationSelect
            label="Responsable"
            required=true
            options=lookup_options(lookups, User::KEY)
            value=Signal::derive(move || draft.with(|d| d.responsible.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.responsible = v))
            disabled=disabled
        />
        <TextAreaField
            label="Observaciones"
            value=Signal::derive(move || draft.with(|d| d.notes.clone().unwrap_or_default()))
            on_change=Callback::new(move |v: String| draft.update(|d| d.notes = blank_to_none(v)))
            disabled=disabled
        />
    }
    .into_any()
}
