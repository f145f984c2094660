use contracts::domain::a004_site::Site;
use contracts::domain::a006_product::Product;
use contracts::domain::a007_inventory::Inventory;
use contracts::domain::common::Resource;
use contracts::shared::columns::ColumnDef;
use contracts::shared::lookup::{LookupSource, Lookups};
use contracts::shared::validation::DraftMode;
use leptos::prelude::*;

use crate::shared::resource::view::relation_cell;
use crate::shared::resource::ResourceView;

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID"),
    ColumnDef::new("product", "Producto"),
    ColumnDef::new("site", "Sitio"),
    ColumnDef::new("stock", "Stock"),
];

impl ResourceView for Inventory {
    const TITLE: &'static str = "Inventario";
    const NOUN: &'static str = "registro de inventario";

    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn cell(&self, column: &str, lookups: &Lookups) -> String {
        match column {
            "id" => self.id.to_string(),
            "product" => relation_cell(&self.product, lookups, Product::KEY),
            "site" => relation_cell(&self.site, lookups, Site::KEY),
            "stock" => self.stock.to_string(),
            _ => String::new(),
        }
    }

    fn card_title(&self) -> String {
        let none = Lookups::default();
        format!(
            "{} @ {}",
            relation_cell(&self.product, &none, Product::KEY),
            relation_cell(&self.site, &none, Site::KEY)
        )
    }

    fn lookup_sources() -> Vec<LookupSource> {
        vec![Product::lookup(), Site::lookup()]
    }

    fn form(
        draft: RwSignal<Self::Payload>,
        lookups: Signal<Lookups>,
        _mode: DraftMode,
        disabled: Signal<bool>,
    ) -> AnyView {
        super::details::inventory_form(draft, lookups, disabled)
    }
}
