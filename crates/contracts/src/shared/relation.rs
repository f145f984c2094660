use serde::{Deserialize, Serialize};

/// Foreign key as the backend expects it: `{"id": n}` in payloads,
/// `{"id": n, "nombre": "…"}` (or the entity's own name key) in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Related {
    pub id: i64,
    #[serde(
        rename = "nombre",
        alias = "nombre_area",
        alias = "nombre_sede",
        alias = "nombre_tipo_sitio",
        alias = "nombre_sitio",
        alias = "nombre_categoria",
        alias = "nombre_producto",
        alias = "nombre_titulado",
        alias = "nombre_centro",
        alias = "nombre_municipio",
        alias = "nombre_rol",
        alias = "codigo_ficha",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
}

impl Related {
    pub fn id_only(id: i64) -> Self {
        Self { id, label: None }
    }

    pub fn labelled(id: i64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: Some(label.into()),
        }
    }

    pub fn display(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

/// Display text of an optional relation; empty when unset.
pub fn related_label(related: &Option<Related>) -> String {
    related.as_ref().map(Related::display).unwrap_or_default()
}

/// Payload form of a relation: only the id travels.
pub fn related_ref(related: &Option<Related>) -> Option<Related> {
    related.as_ref().map(|r| Related::id_only(r.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_form_is_id_only() {
        let value = serde_json::to_value(Related::id_only(7)).unwrap();
        assert_eq!(value, json!({"id": 7}));
    }

    #[test]
    fn entity_specific_name_keys_become_the_label() {
        let r: Related = serde_json::from_value(json!({"id": 2, "nombre_sede": "Norte", "extra": 1})).unwrap();
        assert_eq!(r, Related::labelled(2, "Norte"));
        assert_eq!(related_label(&None), "");
        assert_eq!(Related::id_only(3).display(), "#3");
    }
}
