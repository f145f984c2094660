use contracts::domain::a002_campus::Campus;
use contracts::domain::a014_training_center::TrainingCenter;
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
    ColumnDef::new("address", "Dirección"),
    ColumnDef::new("training_center", "Centro de formación"),
];

impl ResourceView for Campus {
    const TITLE: &'static str = "Sedes";
    const NOUN: &'static str = "sede";

    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn cell(&self, column: &str, lookups: &Lookups) -> String {
        match column {
            "id" => self.id.to_string(),
            "name" => self.name.clone(),
            "address" => text_cell(self.address.as_deref()),
            "training_center" => relation_cell(&self.training_center, lookups, TrainingCenter::KEY),
            _ => String::new(),
        }
    }

    fn card_title(&self) -> String {
        self.name.clone()
    }

    fn lookup_sources() -> Vec<LookupSource> {
        vec![TrainingCenter::lookup()]
    }

    fn form(
        draft: RwSignal<Self::Payload>,
        lookups: Signal<Lookups>,
        _mode: DraftMode,
        disabled: Signal<bool>,
    ) -> AnyView {
        super::details::campus_form(draft, lookups, disabled)
    }
}
