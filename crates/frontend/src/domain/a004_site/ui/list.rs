use contracts::domain::a001_area::Area;
use contracts::domain::a003_site_type::SiteType;
use contracts::domain::a004_site::Site;
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
    ColumnDef::new("location", "Ubicación"),
    ColumnDef::new("site_type", "Tipo"),
    ColumnDef::new("area", "Área"),
];

impl ResourceView for Site {
    const TITLE: &'static str = "Sitios";
    const NOUN: &'static str = "sitio";

    fn columns() -> &'static [ColumnDef] {
        COLUMNS
    }

    fn cell(&self, column: &str, lookups: &Lookups) -> String {
        match column {
            "id" => self.id.to_string(),
            "name" => self.name.clone(),
            "location" => text_cell(self.location.as_deref()),
            "site_type" => relation_cell(&self.site_type, lookups, SiteType::KEY),
            "area" => relation_cell(&self.area, lookups, Area::KEY),
            _ => String::new(),
        }
    }

    fn card_title(&self) -> String {
        self.name.clone()
    }

    fn lookup_sources() -> Vec<LookupSource> {
        vec![SiteType::lookup(), Area::lookup()]
    }

    fn form(
        draft: RwSignal<Self::Payload>,
        lookups: Signal<Lookups>,
        _mode: DraftMode,
        disabled: Signal<bool>,
    ) -> AnyView {
        super::details::site_form(draft, lookups, disabled)
    }
}
