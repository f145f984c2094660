use contracts::domain::a016_role::Role;
use contracts::domain::a017_user::User;
use contracts::domain::common::Resource;
use contracts::shared::columns::ColumnDef;
use contracts::shared::lookup::{LookupSource, Lookups};
use contracts::shared::validation::DraftMode;
use leptos::prelude::*;

use crate::shared::resource::view::{relation_cell, text_cell};
use crate::shared::resource::ResourceView;

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID"),
    ColumnDef::new("name", "Nombre"),
    ColumnDef::new("email", "Correo"),
    ColumnDef::new("document", "Documento"),
    ColumnDef::new("role", "Rol"),
];

impl ResourceView for User {
    const TITLE: &'static str = "Usuarios";
    const NOUN: &'static str = "usuario";

    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn cell(&self, column: &str, lookups: &Lookups) -> String {
        match column {
            "id" => self.id.to_string(),
            "name" => self.full_name(),
            "email" => self.email.clone(),
            "document" => text_cell(self.document.as_deref()),
            "role" => relation_cell(&self.role, lookups, Role::KEY),
            _ => String::new(),
        }
    }

    fn card_title(&self) -> String {
        self.full_name()
    }

    fn lookup_sources() -> Vec<LookupSource> {
        vec![Role::lookup()]
    }

    fn form(
        draft: RwSignal<Self::Payload>,
        lookups: Signal<Lookups>,
        mode: DraftMode,
        disabled: Signal<bool>,
    ) -> AnyView {
        super::details::user_form(draft, lookups, mode, disabled)
    }
}
