use contracts::domain::a004_site::Site;
use contracts::domain::a006_product::Product;
use contracts::domain::a007_inventory::InventoryDto;
use contracts::domain::common::Resource;
use contracts::shared::lookup::Lookups;
use leptos::prelude::*;

use crate::shared::components::form_fields::{NumberField, RelationSelect};
use crate::shared::resource::view::lookup_options;

pub fn inventory_form(draft: RwSignal<InventoryDto>, lookups: Signal<Lookups>, disabled: Signal<bool>) -> AnyView {
    view! {
        <RelationSelect
            label="Producto"
            required=true
            options=lookup_options(lookups, Product::KEY)
            value=Signal::derive(move || draft.with(|d| d.product.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.product = v))
            disabled=disabled
        />
        <RelationSelect
            label="Sitio"
            required=true
            options=lookup_options(lookups, Site::KEY)
            value=Signal::derive(move || draft.with(|d| d.site.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.site = v))
            disabled=disabled
        />
        <NumberField
            label="Stock"
            required=true
            value=Signal::derive(move || draft.with(|d| d.stock))
            on_change=Callback::new(move |v| draft.update(|d| d.stock = v))
            disabled=disabled
        />
    }
    .into_any()
}
