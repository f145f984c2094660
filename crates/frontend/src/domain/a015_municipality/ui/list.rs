use contracts::domain::a015_municipality::Municipality;
use contracts::shared::columns::ColumnDef;
use contracts::shared::lookup::Lookups;
use contracts::shared::validation::DraftMode;
use leptos::prelude::*;

use crate::shared::resource::view::text_cell;
use crate::shared::resource::ResourceView;

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID"),
    ColumnDef::new("name", "Nombre"),
    ColumnDef::new("department", "Departamento"),
];

impl ResourceView for Municipality {
    const TITLE: &'static str = "Municipios";
    const NOUN: &'static str = "municipio";

    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn cell(&self, column: &str, _lookups: &Lookups) -> String {
        match column {
            "id" => self.id.to_string(),
            "name" => self.name.clone(),
            "department" => text_cell(self.department.as_deref()),
            _ => String::new(),
        }
    }

    fn card_title(&self) -> String {
        match self.department.as_deref() {
            Some(dep) if !dep.trim().is_empty() => format!("{}, {}", self.name, dep),
            _ => self.name.clone(),
        }
    }

    fn form(
        draft: RwSignal<Self::Payload>,
        _lookups: Signal<Lookups>,
        _mode: DraftMode,
        disabled: Signal<bool>,
    ) -> AnyView {
        super::details::municipality_form(draft, disabled)
    }
}
