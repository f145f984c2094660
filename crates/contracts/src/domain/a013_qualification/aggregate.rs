use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::list_query::{Searchable, SortKey, Sortable};
use crate::shared::validation::{require_text, DraftMode, Validate, ValidationError};

/// Titulado (programa de formación)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Qualification {
    pub id: i64,
    #[serde(rename = "nombre_titulado")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualificationDto {
    #[serde(rename = "nombre_titulado")]
    pub name: String,
}

impl Validate for QualificationDto {
    fn validate(&self, _mode: DraftMode) -> Result<(), ValidationError> {
        require_text("nombre_titulado", &self.name, "El nombre del titulado es obligatorio")
    }
}

impl Searchable for Qualification {
    fn search_text(&self) -> String {
        self.name.clone()
    }
}

impl Sortable for Qualification {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "id" => SortKey::Int(self.id),
            "name" => SortKey::text(&self.name),
            _ => SortKey::Missing,
        }
    }
}

impl Resource for Qualification {
    type Payload = QualificationDto;

    const KEY: &'static str = "a013_qualification";
    const ENDPOINT: &'static str = "/api/titulados";
    const ROUTE: &'static str = "/titulados";
    const LABEL_FIELDS: &'static [&'static str] = &["nombre_titulado"];

    fn id(&self) -> i64 {
        self.id
    }

    fn to_payload(&self) -> QualificationDto {
        QualificationDto {
            name: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_keys_round_trip() {
        let wire = json!({"id": 1, "nombre_titulado": "Técnico en Sistemas"});
        let qualification: Qualification = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(serde_json::to_value(&qualification).unwrap(), wire);
        assert_eq!(
            serde_json::to_value(qualification.to_payload()).unwrap(),
            json!({"nombre_titulado": "Técnico en Sistemas"})
        );
    }
}
