use serde::{Deserialize, Serialize};

use crate::domain::a015_municipality::Municipality;
use crate::domain::common::Resource;
use crate::shared::list_query::{Searchable, SortKey, Sortable};
use crate::shared::relation::{related_label, related_ref, Related};
use crate::shared::validation::{require_relation, require_text, DraftMode, Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingCenter {
    pub id: i64,
    #[serde(rename = "nombre_centro")]
    pub name: String,
    #[serde(rename = "municipio", default, skip_serializing_if = "Option::is_none")]
    pub municipality: Option<Related>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingCenterDto {
    #[serde(rename = "nombre_centro")]
    pub name: String,
    #[serde(rename = "municipio")]
    pub municipality: Option<Related>,
}

impl Validate for TrainingCenterDto {
    fn validate(&self, _mode: DraftMode) -> Result<(), ValidationError> {
        require_text("nombre_centro", &self.name, "El nombre del centro es obligatorio")?;
        require_relation("municipio", &self.municipality, "Debe seleccionar un municipio")
    }
}

impl Searchable for TrainingCenter {
    fn search_text(&self) -> String {
        format!("{} {}", self.name, related_label(&self.municipality))
    }
}

impl Sortable for TrainingCenter {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "id" => SortKey::Int(self.id),
            "name" => SortKey::text(&self.name),
            "municipality" => SortKey::opt_text(self.municipality.as_ref().and_then(|r| r.label.as_deref())),
            _ => SortKey::Missing,
        }
    }
}

impl Resource for TrainingCenter {
    type Payload = TrainingCenterDto;

    const KEY: &'static str = "a014_training_center";
    const ENDPOINT: &'static str = "/api/centros-formacion";
    const ROUTE: &'static str = "/centros";
    const LABEL_FIELDS: &'static [&'static str] = &["nombre_centro"];

    fn id(&self) -> i64 {
        self.id
    }

    fn relations_mut(&mut self) -> Vec<(&'static str, &mut Option<Related>)> {
        vec![(Municipality::KEY, &mut self.municipality)]
    }

    fn to_payload(&self) -> TrainingCenterDto {
        TrainingCenterDto {
            name: self.name.clone(),
            municipality: related_ref(&self.municipality),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_keys_round_trip() {
        let wire = json!({"id": 1, "nombre_centro": "Centro Agroindustrial", "municipio": {"id": 7, "nombre": "Armenia"}});
        let center: TrainingCenter = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(serde_json::to_value(&center).unwrap(), wire);
    }

    #[test]
    fn payload_sends_municipality_id_only() {
        let center: TrainingCenter =
            serde_json::from_value(json!({"id": 1, "nombre_centro": "Centro Agroindustrial", "municipio": {"id": 7, "nombre_municipio": "Armenia"}}))
                .unwrap();
        assert_eq!(
            serde_json::to_value(center.to_payload()).unwrap(),
            json!({"nombre_centro": "Centro Agroindustrial", "municipio": {"id": 7}})
        );
    }
}
