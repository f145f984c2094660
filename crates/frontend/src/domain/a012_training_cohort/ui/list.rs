use contracts::domain::a012_training_cohort::TrainingCohort;
use contracts::domain::a013_qualification::Qualification;
use contracts::domain::common::Resource;
use contracts::shared::columns::ColumnDef;
use contracts::shared::lookup::{LookupSource, Lookups};
use contracts::shared::validation::DraftMode;
use leptos::prelude::*;

use crate::shared::resource::view::{date_cell, relation_cell, text_cell};
use crate::shared::resource::ResourceView;

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID"),
    ColumnDef::new("code", "Código"),
    ColumnDef::new("qualification", "Titulado"),
    ColumnDef::new("start_date", "Inicio"),
    ColumnDef::new("end_date", "Fin"),
];

impl ResourceView for TrainingCohort {
    const TITLE: &'static str = "Fichas";
    const NOUN: &'static str = "ficha";

    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn cell(&self, column: &str, lookups: &Lookups) -> String {
        match column {
            "id" => self.id.to_string(),
            "code" => text_cell(self.code.as_deref()),
            "qualification" => relation_cell(&self.qualification, lookups, Qualification::KEY),
            "start_date" => date_cell(&self.start_date),
            "end_date" => date_cell(&self.end_date),
            _ => String::new(),
        }
    }

    fn card_title(&self) -> String {
        format!("Ficha {}", text_cell(self.code.as_deref()))
    }

    fn lookup_sources() -> Vec<LookupSource> {
        vec![Qualification::lookup()]
    }

    fn form(
        draft: RwSignal<Self::Payload>,
        lookups: Signal<Lookups>,
        _mode: DraftMode,
        disabled: Signal<bool>,
    ) -> AnyView {
        super::details::training_cohort_form(draft, lookups, disabled)
    }
}
