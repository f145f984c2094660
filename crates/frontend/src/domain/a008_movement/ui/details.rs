use contracts::domain::a007_inventory::Inventory;
use contracts::domain::a008_movement::{MovementDto, MovementType};
use contracts::domain::a011_material_delivery::MaterialDelivery;
use contracts::domain::common::Resource;
use contracts::shared::lookup::Lookups;
use leptos::prelude::*;

use crate::shared::components::form_fields::{ChoiceField, DateField, NumberField, RelationSelect};
use crate::shared::resource::view::lookup_options;

pub fn movement_form(draft: RwSignal<MovementDto>, lookups: Signal<Lookups>, disabled: Signal<bool>) -> AnyView {
    let kinds = MovementType::ALL.iter().map(|k| (k.as_wire(), k.label())).collect::<Vec<_>>();

    view! {
        <div class="form__row">
            <ChoiceField
                label="Tipo"
                required=true
                options=kinds
                value=Signal::derive(move || draft.with(|d| d.kind.as_wire().to_string()))
                on_change=Callback::new(move |v: String| {
                    if let Some(kind) = MovementType::from_wire(&v) {
                        draft.update(|d| d.kind = kind);
                    }
                })
                disabled=disabled
            />
            <NumberField
                label="Cantidad"
                required=true
                value=Signal::derive(move || draft.with(|d| d.quantity))
                on_change=Callback::new(move |v| draft.update(|d| d.quantity = v))
                disabled=disabled
            />
        </div>
        <DateField
            label="Fecha"
            value=Signal::derive(move || draft.with(|d| d.date))
            on_change=Callback::new(move |v| draft.update(|d| d.date = v))
            disabled=disabled
        />
        <RelationSelect
            label="Inventario"
            required=true
            options=lookup_options(lookups, Inventory::KEY)
            value=Signal::derive(move || draft.with(|d| d.inventory.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.inventory = v))
            disabled=disabled
        />
        <RelationSelect
            label="Entrega de material"
            options=lookup_options(lookups, MaterialDelivery::KEY)
            value=Signal::derive(move || draft.with(|d| d.delivery.clone()))
            on_change=Callback::new(move |v| draft.update(|d| d.delivery = v))
            disabled=disabled
        />
    }
    .into_any()
}
