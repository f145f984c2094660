use contracts::domain::a009_request::Request;
use contracts::domain::a011_material_delivery::MaterialDelivery;
use contracts::domain::a012_training_cohort::TrainingCohort;
use contracts::domain::a017_user::User;
use contracts::domain::common::Resource;
use contracts::shared::columns::ColumnDef;
use contracts::shared::lookup::{LookupSource, Lookups};
use contracts::shared::validation::DraftMode;
use leptos::prelude::*;

use crate::shared::resource::view::{date_cell, relation_cell, text_cell};
use crate::shared::resource::ResourceView;

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "N.º"),
    ColumnDef::new("date", "Fecha"),
    ColumnDef::new("cohort", "Ficha"),
    ColumnDef::new("request", "Solicitud"),
    ColumnDef::new("responsible", "Responsable"),
    ColumnDef::new("notes", "Observaciones").hidden(),
];

impl ResourceView for MaterialDelivery {
    const TITLE: &'static str = "Entregas de material";
    const NOUN: &'static str = "entrega";

    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn cell(&self, column: &str, lookups: &Lookups) -> String {
        match column {
            "id" => self.id.to_string(),
            "date" => date_cell(&self.date),
            "cohort" => relation_cell(&self.cohort, lookups, TrainingCohort::KEY),
            "request" => relation_cell(&self.request, lookups, Request::KEY),
            "responsible" => relation_cell(&self.responsible, lookups, User::KEY),
            "notes" => text_cell(self.notes.as_deref()),
            _ => String::new(),
        }
    }

    fn card_title(&self) -> String {
        format!("Entrega #{} · {}", self.id, date_cell(&self.date))
    }

    fn lookup_sources() -> Vec<LookupSource> {
        vec![TrainingCohort::lookup(), Request::lookup(), User::lookup()]
    }

    fn form(
        draft: RwSignal<Self::Payload>,
        lookups: Signal<Lookups>,
        _mode: DraftMode,
        disabled: Signal<bool>,
    ) -> AnyView {
        super::details::material_delivery_form(draft, lookups, disabled)
    }
}
