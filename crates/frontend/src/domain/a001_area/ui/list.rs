use contracts::domain::a001_area::Area;
use contracts::domain::a002_campus::Campus;
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
    ColumnDef::new("campus", "Sede"),
];

impl ResourceView for Area {
    const TITLE: &'static str = "Áreas";
    const NOUN: &'static str = "área";

    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn cell(&self, column: &str, lookups: &Lookups) -> String {
        match column {
            "id" => self.id.to_string(),
            "name" => self.name.clone(),
            "campus" => relation_cell(&self.campus, lookups, Campus::KEY),
            _ => String::new(),
        }
    }

    fn card_title(&self) -> String {
        self.name.clone()
    }

    fn lookup_sources() -> Vec<LookupSource> {
        vec![Campus::lookup()]
    }

    fn form(
        draft: RwSignal<Self::Payload>,
        lookups: Signal<Lookups>,
        _mode: DraftMode,
        disabled: Signal<bool>,
    ) -> AnyView {
        super::details::area_form(draft, lookups, disabled)
    }
}
