use contracts::domain::a012_training_cohort::TrainingCohortDto;
use contracts::domain::a013_qualification::Qualification;
use contracts::domain::common::Resource;
use contracts::shared::lookup::Lookups;
use leptos::prelude::*;

use crate::shared::components::form_fields::{DateField, RelationSelect, TextField};
use crate::shared::resource::view::lookup_options;

pub fn training_cohort_form(
    draft: RwSignal<TrainingCohortDto>,
    lookups: Signal<Lookups>,
    disabled: Signal<bool>,
) -> AnyView {
    view! {
        <TextField
            label="Código de ficha"
            required=true
            value=Signal::derive(move || draft.with(|d| d.code.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.code = v))
            disabled=disabled
        />
        <RelationSelect
            label="Titulado"
            required=true
            options=lookup_options(lookups, Qualification::KEY)
            value=Signal::derive(move || draft.with(|d| d.qualification.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.qualification = v))
            disabled=disabled
        />
        <div class="form__row">
            <DateField
                label="Fecha de inicio"
                value=Signal::derive(move || draft.with(|d| d.start_date))
                on_change=Callback::new(move |v| draft.update(|d| d.start_date = v))
                disabled=disabled
            />
            <DateField
                label="Fecha de fin"
                value=Signal::derive(move || draft.with(|d| d.end_date))
                on_change=Callback::new(move |v| draft.update(|d| d.end_date = v))
                disabled=disabled
            />
        </div>
    }
    .into_any()
}
