use contracts::domain::a016_role::Role;
use contracts::shared::columns::ColumnDef;
use contracts::shared::lookup::Lookups;
use contracts::shared::validation::DraftMode;
use leptos::prelude::*;

use crate::shared::resource::ResourceView;

const COLUMNS: &[ColumnDef] = &[ColumnDef::new("id", "ID"), ColumnDef::new("name", "Nombre")];

impl ResourceView for Role {
    const TITLE: &'static str = "Roles";
    const NOUN: &'static str = "rol";

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
        super::details::role_form(draft, disabled)
    }
}
