use contracts::domain::a005_product_category::ProductCategory;
use contracts::domain::a006_product::Product;
use contracts::domain::common::Resource;
use contracts::shared::columns::ColumnDef;
use contracts::shared::lookup::{LookupSource, Lookups};
use contracts::shared::validation::DraftMode;
use leptos::prelude::*;

use crate::shared::resource::view::{relation_cell, text_cell};
use crate::shared::resource::ResourceView;

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID"),
    ColumnDef::new("code", "Código"),
    ColumnDef::new("name", "Nombre"),
    ColumnDef::new("unit", "Unidad"),
    ColumnDef::new("category", "Categoría"),
    ColumnDef::new("description", "Descripción").hidden().unsortable(),
];

impl ResourceView for Product {
    const TITLE: &'static str = "Productos";
    const NOUN: &'static str = "producto";

    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn cell(&self, column: &str, lookups: &Lookups) -> String {
        match column {
            "id" => self.id.to_string(),
            "code" => text_cell(self.code.as_deref()),
            "name" => self.name.clone(),
            "unit" => text_cell(self.unit.as_deref()),
            "category" => relation_cell(&self.category, lookups, ProductCategory::KEY),
            "description" => text_cell(self.description.as_deref()),
            _ => String::new(),
        }
    }

    fn card_title(&self) -> String {
        match self.code.as_deref() {
            Some(code) if !code.trim().is_empty() => format!("{} · {}", code, self.name),
            _ => self.name.clone(),
        }
    }

    fn lookup_sources() -> Vec<LookupSource> {
        vec![ProductCategory::lookup()]
    }

    fn form(
        draft: RwSignal<Self::Payload>,
        lookups: Signal<Lookups>,
        _mode: DraftMode,
        disabled: Signal<bool>,
    ) -> AnyView {
        super::details::product_form(draft, lookups, disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::relation::Related;

    fn product(code: Option<&str>) -> Product {
        Product {
            id: 4,
            name: "Guantes".into(),
            description: None,
            code: code.map(Into::into),
            unit: Some("par".into()),
            category: Some(Related::id_only(2)),
        }
    }

    #[test]
    fn card_title_prefixes_code_when_present() {
        assert_eq!(product(Some("G-01")).card_title(), "G-01 · Guantes");
        assert_eq!(product(Some(" ")).card_title(), "Guantes");
        assert_eq!(product(None).card_title(), "Guantes");
    }

    #[test]
    fn description_column_starts_hidden() {
        let description = COLUMNS.iter().find(|c| c.key == "description").unwrap();
        assert!(!description.visible_by_default);
        assert!(!description.sortable);
    }
}
