use serde::{Deserialize, Serialize};

use crate::domain::a002_campus::Campus;
use crate::domain::common::Resource;
use crate::shared::list_query::{Searchable, SortKey, Sortable};
use crate::shared::relation::{related_label, related_ref, Related};
use crate::shared::validation::{require_text, DraftMode, Validate, ValidationError};

/// Área de trabajo; opcionalmente pertenece a una sede.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: i64,
    #[serde(rename = "nombre_area")]
    pub name: String,
    #[serde(rename = "sede", default, skip_serializing_if = "Option::is_none")]
    pub campus: Option<Related>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaDto {
    #[serde(rename = "nombre_area")]
    pub name: String,
    #[serde(rename = "sede")]
    pub campus: Option<Related>,
}

impl Validate for AreaDto {
    fn validate(&self, _mode: DraftMode) -> Result<(), ValidationError> {
        require_text("nombre_area", &self.name, "El nombre del área es obligatorio")
    }
}

impl Searchable for Area {
    fn search_text(&self) -> String {
        format!("{} {}", self.name, related_label(&self.campus))
    }
}

impl Sortable for Area {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "id" => SortKey::Int(self.id),
            "name" => SortKey::text(&self.name),
            "campus" => SortKey::opt_text(self.campus.as_ref().and_then(|c| c.label.as_deref())),
            _ => SortKey::Missing,
        }
    }
}

impl Resource for Area {
    type Payload = AreaDto;

    const KEY: &'static str = "a001_area";
    const ENDPOINT: &'static str = "/api/areas";
    const ROUTE: &'static str = "/areas";
    const LABEL_FIELDS: &'static [&'static str] = &["nombre_area"];

    fn id(&self) -> i64 {
        self.id
    }

    fn relations_mut(&mut self) -> Vec<(&'static str, &mut Option<Related>)> {
        vec![(Campus::KEY, &mut self.campus)]
    }

    fn to_payload(&self) -> AreaDto {
        AreaDto {
            name: self.name.clone(),
            campus: related_ref(&self.campus),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_keys_round_trip() {
        let wire = json!({"id": 1, "nombre_area": "Almacén", "sede": {"id": 2, "nombre": "Norte"}});
        let area: Area = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(area.name, "Almacén");
        assert_eq!(serde_json::to_value(&area).unwrap(), wire);
    }

    #[test]
    fn payload_nests_campus_as_id_object() {
        let area: Area =
            serde_json::from_value(json!({"id": 1, "nombre_area": "Almacén", "sede": {"id": 2, "nombre_sede": "Norte"}}))
                .unwrap();
        let payload = serde_json::to_value(area.to_payload()).unwrap();
        assert_eq!(payload, json!({"nombre_area": "Almacén", "sede": {"id": 2}}));
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = AreaDto::default().validate(DraftMode::Create).unwrap_err();
        assert_eq!(err.field, "nombre_area");
    }
}
