use contracts::domain::a005_product_category::ProductCategory;
use contracts::shared::columns::ColumnDef;
use contracts::shared::lookup::Lookups;
use contracts::shared::validation::DraftMode;
use leptos::prelude::*;

use crate::shared::resource::view::text_cell;
use crate::shared::resource::ResourceView;

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID"),
    ColumnDef::new("name", "Nombre"),
    ColumnDef::new("description", "Descripción"),
];

impl ResourceView for ProductCategory {
    const TITLE: &'static str = "Categorías de producto";
    const NOUN: &'static str = "categoría";

    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn cell(&self, column: &str, _lookups: &Lookups) -> String {
        match column {
            "id" => self.id.to_string(),
            "name" => self.name.clone(),
            "description" => text_cell(self.description.as_deref()),
            _ => String::new(),
        }
    }

    fn card_title(&self) -> String {
        self.name.clone()
    }

    fn form(
        draft: RwSignal<Self::Payload>,
        _lookups: Signal<Lookups>,
        _mode: DraftMode,
        disabled: Signal<bool>,
    ) -> AnyView {
        super::details::product_category_form(draft, disabled)
    }
}
