use contracts::domain::a009_request::Request;
use contracts::domain::a017_user::User;
use contracts::domain::common::Resource;
use contracts::shared::columns::ColumnDef;
use contracts::shared::lookup::{LookupSource, Lookups};
use contracts::shared::validation::DraftMode;
use leptos::prelude::*;

use crate::shared::resource::view::{date_cell, relation_cell};
use crate::shared::resource::ResourceView;

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "N.º"),
    ColumnDef::new("date", "Fecha"),
    ColumnDef::new("status", "Estado"),
    ColumnDef::new("requester", "Solicitante"),
];

impl ResourceView for Request {
    const TITLE: &'static str = "Solicitudes";
    const NOUN: &'static str = "solicitud";

    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn cell(&self, column: &str, lookups: &Lookups) -> String {
        match column {
            "id" => self.id.to_string(),
            "date" => date_cell(&self.date),
            "status" => self.status.label().to_string(),
            "requester" => relation_cell(&self.requester, lookups, User::KEY),
            _ => String::new(),
        }
    }

    fn card_title(&self) -> String {
        format!("Solicitud #{} · {}", self.id, self.status.label())
    }

    fn lookup_sources() -> Vec<LookupSource> {
        vec![User::lookup()]
    }

    fn form(
        draft: RwSignal<Self::Payload>,
        lookups: Signal<Lookups>,
        _mode: DraftMode,
        disabled: Signal<bool>,
    ) -> AnyView {
        super::details::request_form(draft, lookups, disabled)
    }
}
