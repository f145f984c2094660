use contracts::domain::a015_municipality::MunicipalityDto;
use contracts::shared::validation::blank_to_none;
use leptos::prelude::*;

use crate::shared::components::form_fields::TextField;

pub fn municipality_form(draft: RwSignal<MunicipalityDto>, disabled: Signal<bool>) -> AnyView {
    view! {
        <TextField
            label="Nombre"
            required=true
            value=Signal::derive(move || draft.with(|d| d.name.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.name = v))
            disabled=disabled
        />
        <TextField
            label="Departamento"
            value=Signal::derive(move || draft.with(|d| d.department.clone().unwrap_or_default()))
            on_change=Callback::new(move |v: String| draft.update(|d| d.department = blank_to_none(v)))
            disabled=disabled
        />
    }
    .into_any()
}
