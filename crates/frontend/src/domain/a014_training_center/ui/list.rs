use contracts::domain::a014_training_center::TrainingCenter;
use contracts::domain::a015_municipality::Municipality;
use contracts::domain::common::Resource;
use contracts::shared::columns::ColumnDef;
use contracts::shared::lookup::{LookupSource, Lookups};
use contracts::shared::validation::DraftMode;
use leptos::prelude::*;

use crate::shared::resource::view::relation_cell;
use crate::shared::resource::ResourceView;

const COLUMNS: &[ColumnDef] = &[
    ColumnDef::new("id", "ID"),
    ColumnDef::new("name", "Nombre"),
    ColumnDef::new("municipality", "Municipio"),
];

impl ResourceView for TrainingCenter {
    const TITLE: &'static str = "Centros de formación";
    const NOUN: &'static str = "centro";

    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn cell(&self, column: &str, lookups: &Lookups) -> String {
        match column {
            "id" => self.id.to_string(),
            "name" => self.name.clone(),
            "municipality" => relation_cell(&self.municipality, lookups, Municipality::KEY),
            _ => String::new(),
        }
    }

    fn card_title(&self) -> String {
        self.name.clone()
    }

    fn lookup_sources() -> Vec<LookupSource> {
        vec![Municipality::lookup()]
    }

    fn form(
        draft: RwSignal<Self::Payload>,
        lookups: Signal<Lookups>,
        _mode: DraftMode,
        disabled: Signal<bool>,
    ) -> AnyView {
        super::details::training_center_form(draft, lookups, disabled)
    }
}
