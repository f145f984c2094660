//! Option lists for relation selects, built from raw list responses.

use serde_json::Value;
use std::collections::BTreeMap;

/// Where to fetch the options of one relation select and which fields
/// (dotted paths into the row) make up the option label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupSource {
    pub key: &'static str,
    pub endpoint: &'static str,
    pub label_fields: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOption {
    pub id: i64,
    pub label: String,
}

/// Rows without a numeric `id` are skipped.
pub fn options_from_rows(rows: &[Value], label_fields: &[&str]) -> Vec<LookupOption> {
    rows.iter()
        .filter_map(|row| {
            let id = row.get("id").and_then(Value::as_i64)?;
            let parts: Vec<String> = label_fields
                .iter()
                .filter_map(|path| field_text(row, path))
                .filter(|s| !s.trim().is_empty())
                .collect();
            let label = if parts.is_empty() {
                format!("#{id}")
            } else {
                parts.join(" · ")
            };
            Some(LookupOption { id, label })
        })
        .collect()
}

fn field_text(row: &Value, path: &str) -> Option<String> {
    let pointer = format!("/{}", path.replace('.', "/"));
    match row.pointer(&pointer)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lookups(BTreeMap<&'static str, Vec<LookupOption>>);

impl Lookups {
    pub fn insert(&mut self, key: &'static str, options: Vec<LookupOption>) {
        self.0.insert(key, options);
    }

    pub fn options(&self, key: &str) -> Vec<LookupOption> {
        self.0.get(key).cloned().unwrap_or_default()
    }

    pub fn label_for(&self, key: &str, id: i64) -> Option<String> {
        self.0
            .get(key)?
            .iter()
            .find(|o| o.id == id)
            .map(|o| o.label.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn labels_join_nested_fields() {
        let rows = vec![
            json!({"id": 1, "stock": 4, "producto": {"nombre_producto": "Guantes"}, "sitio": {"nombre_sitio": "Bodega 1"}}),
            json!({"id": 2, "producto": null}),
            json!({"nombre": "sin id"}),
        ];
        let options = options_from_rows(&rows, &["producto.nombre_producto", "sitio.nombre_sitio"]);
        assert_eq!(
            options,
            vec![
                LookupOption { id: 1, label: "Guantes · Bodega 1".into() },
                LookupOption { id: 2, label: "#2".into() },
            ]
        );
    }

    #[test]
    fn lookups_resolve_labels_by_key() {
        let mut lookups = Lookups::default();
        lookups.insert("roles", vec![LookupOption { id: 3, label: "Admin".into() }]);
        assert_eq!(lookups.label_for("roles", 3).as_deref(), Some("Admin"));
        assert_eq!(lookups.label_for("roles", 4), None);
        assert!(lookups.options("areas").is_empty());
    }
}
