//! Column definitions and the visible-column set of a list page.
//!
//! Visibility is presentation only: the list pipeline never looks at it.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub visible_by_default: bool,
}

impl ColumnDef {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: true,
            visible_by_default: true,
        }
    }

    pub const fn hidden(mut self) -> Self {
        self.visible_by_default = false;
        self
    }

    pub const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleColumns(BTreeSet<String>);

impl VisibleColumns {
    pub fn from_defs(defs: &[ColumnDef]) -> Self {
        Self(
            defs.iter()
                .filter(|c| c.visible_by_default)
                .map(|c| c.key.to_string())
                .collect(),
        )
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    /// The last visible column cannot be hidden.
    pub fn toggle(&mut self, key: &str) {
        if self.0.contains(key) {
            if self.0.len() > 1 {
                self.0.remove(key);
            }
        } else {
            self.0.insert(key.to_string());
        }
    }

    /// Visible columns in definition order.
    pub fn select<'a>(&self, defs: &'a [ColumnDef]) -> Vec<&'a ColumnDef> {
        defs.iter().filter(|c| self.is_visible(c.key)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFS: [ColumnDef; 3] = [
        ColumnDef::new("id", "ID").hidden(),
        ColumnDef::new("name", "Nombre"),
        ColumnDef::new("campus", "Sede"),
    ];

    #[test]
    fn defaults_follow_definitions() {
        let cols = VisibleColumns::from_defs(&DEFS);
        assert!(!cols.is_visible("id"));
        assert!(cols.is_visible("name"));
        let keys: Vec<&str> = cols.select(&DEFS).iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["name", "campus"]);
    }

    #[test]
    fn toggle_keeps_definition_order_and_last_column() {
        let mut cols = VisibleColumns::from_defs(&DEFS);
        cols.toggle("id");
        let keys: Vec<&str> = cols.select(&DEFS).iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["id", "name", "campus"]);

        cols.toggle("id");
        cols.toggle("name");
        cols.toggle("campus");
        assert!(cols.is_visible("campus"));
        assert_eq!(cols.select(&DEFS).len(), 1);
    }
}
