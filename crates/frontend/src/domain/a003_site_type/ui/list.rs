use contracts::domain::a003_site_type::SiteType;
use contracts::shared::columns::ColumnDef;
use contracts::shared::lookup::Lookups;
use contracts::shared::validation::DraftMode;
use leptos::prelude::*;

use crate::shared::resource::ResourceView;

const COLUMNS: &[ColumnDef] = &[ColumnDef::new("id", "ID"), ColumnDef::new("name", "Nombre")];

impl ResourceView for SiteType {
    const TITLE: &'static str = "Tipos de sitio";
    const NOUN: &'static str = "tipo de sitio";

    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn cell(&self, column: &str, _lookups: &Lookups) -> String {
        match column {
            "id" => self.id.to_string(),
            "name" => self.name.clone(),
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
        super::details::site_type_form(draft, disabled)
    }
}
