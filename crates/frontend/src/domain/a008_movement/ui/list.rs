use contracts::domain::a007_inventory::Inventory;
use contracts::domain::a008_movement::Movement;
use contracts::domain::a011_material_delivery::MaterialDelivery;
use contracts::domain::common::Resource;
use contracts::shared::columns::ColumnDef;
use contracts::shared::lookup::{LookupSource, Lookups};
use contracts::shared::validation::DraftMode;
use leptos::prelude::*;

use crate::shared::resource::view::{date_cell, relation_cell};
use crate::shared::resource::ResourceView;

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID"),
    ColumnDef::new("date", "Fecha"),
    ColumnDef::new("kind", "Tipo"),
    ColumnDef::new("quantity", "Cantidad"),
    ColumnDef::new("inventory", "Inventario"),
    ColumnDef::new("delivery", "Entrega"),
];

impl ResourceView for Movement {
    const TITLE: &'static str = "Movimientos";
    const NOUN: &'static str = "movimiento";

    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn cell(&self, column: &str, lookups: &Lookups) -> String {
        match column {
            "id" => self.id.to_string(),
            "date" => date_cell(&self.date),
            "kind" => self.kind.label().to_string(),
            "quantity" => self.quantity.to_string(),
            "inventory" => relation_cell(&self.inventory, lookups, Inventory::KEY),
            "delivery" => relation_cell(&self.delivery, lookups, MaterialDelivery::KEY),
            _ => String::new(),
        }
    }

    fn card_title(&self) -> String {
        format!("{} de {} ({})", self.kind.label(), self.quantity, date_cell(&self.date))
    }

    fn lookup_sources() -> Vec<LookupSource> {
        vec![Inventory::lookup(), MaterialDelivery::lookup()]
    }

    fn form(
        draft: RwSignal<Self::Payload>,
        lookups: Signal<Lookups>,
        _mode: DraftMode,
        disabled: Signal<bool>,
    ) -> AnyView {
        super::details::movement_form(draft, lookups, disabled)
    }
}
