use contracts::domain::a006_product::Product;
use contracts::domain::a009_request::Request;
use contracts::domain::a010_request_detail::RequestDetailDto;
use contracts::domain::common::Resource;
use contracts::shared::lookup::Lookups;
use leptos::prelude::*;

use crate::shared::components::form_fields::{NumberField, RelationSelect};
use crate::shared::resource::view::lookup_options;

pub fn request_detail_form(
    draft: RwSignal<RequestDetailDto>,
    lookups: Signal<Lookups>,
    disabled: Signal<bool>,
) -> AnyView {
    view! {
        <RelationSelect
            label="Solicitud"
            required=true
            options=lookup_options(lookups, Request::KEY)
            value=Signal::derive(move || draft.with(|d| d.request.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.request = v))
            disabled=disabled
        />
        <RelationSelect
            label="Producto"
            required=true
            options=lookup_options(lookups, Product::KEY)
            value=Signal::derive(move || draft.with(|d| d.product.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.product = v))
            disabled=disabled
        />
        <NumberField
            label="Cantidad"
            required=true
            value=Signal::derive(move || draft.with(|d| d.quantity))
            on_change=Callback::new(move |v| draft.update(|d| d.quantity = v))
            disabled=disabled
        />
    }
    .into_any()
}
