use contracts::domain::a006_product::Product;
use contracts::domain::a009_request::Request;
use contracts::domain::a010_request_detail::RequestDetail;
use contracts::domain::common::Resource;
use contracts::shared::columns::ColumnDef;
use contracts::shared::lookup::{LookupSource, Lookups};
use contracts::shared::validation::DraftMode;
use leptos::prelude::*;

use crate::shared::resource::view::relation_cell;
use crate::shared::resource::ResourceView;

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID"),
    ColumnDef::new("request", "Solicitud"),
    ColumnDef::new("product", "Producto"),
    ColumnDef::new("quantity", "Cantidad"),
];

impl ResourceView for RequestDetail {
    const TITLE: &'static str = "Detalles de solicitud";
    const NOUN: &'static str = "detalle";

    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn cell(&self, column: &str, lookups: &Lookups) -> String {
        match column {
            "id" => self.id.to_string(),
            "request" => relation_cell(&self.request, lookups, Request::KEY),
            "product" => relation_cell(&self.product, lookups, Product::KEY),
            "quantity" => self.quantity.to_string(),
            _ => String::new(),
        }
    }

    fn card_title(&self) -> String {
        let product = relation_cell(&self.product, &Lookups::default(), Product::KEY);
        format!("{} x{}", product, self.quantity)
    }

    fn lookup_sources() -> Vec<LookupSource> {
        vec![Request::lookup(), Product::lookup()]
    }

    fn form(
        draft: RwSignal<Self::Payload>,
        lookups: Signal<Lookups>,
        _mode: DraftMode,
        disabled: Signal<bool>,
    ) -> AnyView {
        super::details::request_detail_form(draft, lookups, disabled)
    }
}
