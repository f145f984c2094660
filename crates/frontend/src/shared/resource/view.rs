use chrono::NaiveDate;
use contracts::domain::common::Resource;
use contracts::shared::columns::ColumnDef;
use contracts::shared::lookup::{LookupOption, LookupSource, Lookups};
use contracts::shared::relation::Related;
use contracts::shared::validation::DraftMode;
use leptos::prelude::*;

use crate::shared::date_utils::format_opt_date;

/// Presentation of a [`Resource`] in the generic list page.
pub trait ResourceView: Resource {
    /// Page title, plural.
    const TITLE: &'static str;
    /// Singular noun for dialogs, lower case.
    const NOUN: &'static str;

    fn columns() -> &'static [ColumnDef];

    /// Display text of one column of this row.
    fn cell(&self, column: &str, lookups: &Lookups) -> String;

    /// Headline of the mobile card.
    fn card_title(&self) -> String;

    /// Auxiliary lists the edit form needs for its selects.
    fn lookup_sources() -> Vec<LookupSource> {
        Vec::new()
    }

    fn form(
        draft: RwSignal<Self::Payload>,
        lookups: Signal<Lookups>,
        mode: DraftMode,
        disabled: Signal<bool>,
    ) -> AnyView;
}

pub const EMPTY_CELL: &str = "—";

/// Options of one lookup as a signal for a `RelationSelect`.
pub fn lookup_options(lookups: Signal<Lookups>, key: &'static str) -> Signal<Vec<LookupOption>> {
    Signal::derive(move || lookups.with(|l| l.options(key)))
}

/// Label shipped in the row, else the lookup label, else `#id`.
pub fn relation_cell(related: &Option<Related>, lookups: &Lookups, lookup_key: &str) -> String {
    match related {
        None => EMPTY_CELL.to_string(),
        Some(r) => r
            .label
            .clone()
            .filter(|l| !l.trim().is_empty())
            .or_else(|| lookups.label_for(lookup_key, r.id))
            .unwrap_or_else(|| format!("#{}", r.id)),
    }
}

pub fn text_cell(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => EMPTY_CELL.to_string(),
    }
}

pub fn date_cell(value: &Option<NaiveDate>) -> String {
    format_opt_date(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_cell_falls_back_to_lookup_then_id() {
        let mut lookups = Lookups::default();
        lookups.insert(
            "a002_campus",
            vec![LookupOption {
                id: 2,
                label: "Sede Norte".into(),
            }],
        );
        assert_eq!(
            relation_cell(&Some(Related::labelled(2, "Norte")), &lookups, "a002_campus"),
            "Norte"
        );
        assert_eq!(
            relation_cell(&Some(Related::id_only(2)), &lookups, "a002_campus"),
            "Sede Norte"
        );
        assert_eq!(relation_cell(&Some(Related::id_only(9)), &lookups, "a002_campus"), "#9");
        assert_eq!(relation_cell(&None, &lookups, "a002_campus"), EMPTY_CELL);
    }

    #[test]
    fn blank_text_renders_placeholder() {
        assert_eq!(text_cell(Some("  ")), EMPTY_CELL);
        assert_eq!(text_cell(Some("Calle 5")), "Calle 5");
        assert_eq!(text_cell(None), EMPTY_CELL);
    }
}
