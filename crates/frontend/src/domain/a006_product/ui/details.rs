use contracts::domain::a005_product_category::ProductCategory;
use contracts::domain::a006_product::ProductDto;
use contracts::domain::common::Resource;
use contracts::shared::lookup::Lookups;
use contracts::shared::validation::blank_to_none;
use leptos::prelude::*;

use crate::shared::components::form_fields::{RelationSelect, TextAreaField, TextField};
use crate::shared::resource::view::lookup_options;

pub fn product_form(draft: RwSignal<ProductDto>, lookups: Signal<Lookups>, disabled: Signal<bool>) -> AnyView {
    view! {
        <TextField
            label="Nombre"
            required=true
            value=Signal::derive(move || draft.with(|d| d.name.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.name = v))
            disabled=disabled
        />
        <div class="form__row">
            <TextField
                label="Código"
                value=Signal::derive(move || draft.with(|d| d.code.clone().unwrap_or_default()))
                on_change=Callback::new(move |v: String| draft.update(|d| d.code = blank_to_none(v)))
                disabled=disabled
            />
            <TextField
                label="Unidad de medida"
                value=Signal::derive(move || draft.with(|d| d.unit.clone().unwrap_or_default()))
                on_change=Callback::new(move |v: String| draft.update(|d| d.unit = blank_to_none(v)))
                disabled=disabled
            />
        </div>
        <RelationSelect
            label="Categoría"
            required=true
            options=lookup_options(lookups, ProductCategory::KEY)
            value=Signal::derive(move || draft.with(|d| d.category.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.category = v))
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
