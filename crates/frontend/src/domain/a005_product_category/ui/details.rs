use contracts::domain::a005_product_category::ProductCategoryDto;
use contracts::shared::validation::blank_to_none;
use leptos::prelude::*;

use crate::shared::components::form_fields::{TextAreaField, TextField};

pub fn product_category_form(draft: RwSignal<ProductCategoryDto>, disabled: Signal<bool>) -> AnyView {
    view! {
        <TextField
            label="Nombre"
            required=true
            value=Signal::derive(move || draft.with(|d| d.name.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.name = v))
            disabled=disabled
        />
        <TextAreaField
            label="Descripción"
            value=Signal::derive(move || draft.with(|d| d.description.clone().unwrap_or_default()))
            on_change=Callback::new(move |v: String| draft.update(|d| d.description = blank_to_none(v)))
            disabled=disabled
        />
    }
    .into_any()
}
