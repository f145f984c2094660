use serde::{Deserialize, Serialize};

use crate::domain::a014_training_center::TrainingCenter;
use crate::domain::common::Resource;
use crate::shared::list_query::{Searchable, SortKey, Sortable};
use crate::shared::relation::{related_label, related_ref, Related};
use crate::shared::validation::{require_relation, require_text, DraftMode, Validate, ValidationError};

/// Sede de un centro de formación
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campus {
    pub id: i64,
    #[serde(rename = "nombre_sede")]
    pub name: String,
    #[serde(rename = "direccion", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "centro_formacion", default, skip_serializing_if = "Option::is_none")]
    pub training_center: Option<Related>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampusDto {
    #[serde(rename = "nombre_sede")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: Option<String>,
    #[serde(rename = "centro_formacion")]
    pub training_center: Option<Related>,
}

impl Validate for CampusDto {
    fn validate(&self, _mode: DraftMode) -> Result<(), ValidationError> {
        require_text("nombre_sede", &self.name, "El nombre de la sede es obligatorio")?;
        require_relation(
            "centro_formacion",
            &self.training_center,
            "Debe seleccionar un centro de formación",
        )
    }
}

impl Searchable for Campus {
    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.name,
            self.address.as_deref().unwrap_or_default(),
            related_label(&self.training_center)
        )
    }
}

impl Sortable for Campus {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "id" => SortKey::Int(self.id),
            "name" => SortKey::text(&self.name),
            "address" => SortKey::opt_text(self.address.as_deref()),
            "training_center" => SortKey::opt_text(self.training_center.as_ref().and_then(|c| c.label.as_deref())),
            _ => SortKey::Missing,
        }
    }
}

impl Resource for Campus {
    type Payload = CampusDto;

    const KEY: &'static str = "a002_campus";
    const ENDPOINT: &'static str = "/api/sedes";
    const ROUTE: &'static str = "/sedes";
    const LABEL_FIELDS: &'static [&'static str] = &["nombre_sede"];

    fn id(&self) -> i64 {
        self.id
    }

    fn relations_mut(&mut self) -> Vec<(&'static str, &mut Option<Related>)> {
        vec![(TrainingCenter::KEY, &mut self.training_center)]
    }

    fn to_payload(&self) -> CampusDto {
        CampusDto {
            name: self.name.clone(),
            address: self.address.clone(),
            training_center: related_ref(&self.training_center),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_keys_round_trip() {
        let wire = json!({
            "id": 3,
            "nombre_sede": "Sede Norte",
            "direccion": "Calle 10 # 4-20",
            "centro_formacion": {"id": 1, "nombre": "Centro Agroindustrial"}
        });
        let campus: Campus = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(campus.address.as_deref(), Some("Calle 10 # 4-20"));
        assert_eq!(serde_json::to_value(&campus).unwrap(), wire);
    }
}
