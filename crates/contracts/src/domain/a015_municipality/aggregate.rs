use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::list_query::{Searchable, SortKey, Sortable};
use crate::shared::validation::{require_text, DraftMode, Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Municipality {
    pub id: i64,
    #[serde(rename = "nombre_municipio")]
    pub name: String,
    #[serde(rename = "departamento", default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MunicipalityDto {
    #[serde(rename = "nombre_municipio")]
    pub name: String,
    #[serde(rename = "departamento")]
    pub department: Option<String>,
}

impl Validate for MunicipalityDto {
    fn validate(&self, _mode: DraftMode) -> Result<(), ValidationError> {
        require_text("nombre_municipio", &self.name, "El nombre del municipio es obligatorio")
    }
}

impl Searchable for Municipality {
    fn search_text(&self) -> String {
        format!("{} {}", self.name, self.department.as_deref().unwrap_or_default())
    }
}

impl Sortable for Municipality {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "id" => SortKey::Int(self.id),
            "name" => SortKey::text(&self.name),
            "department" => SortKey::opt_text(self.department.as_deref()),
            _ => SortKey::Missing,
        }
    }
}

impl Resource for Municipality {
    type Payload = MunicipalityDto;

    const KEY: &'static str = "a015_municipality";
    const ENDPOINT: &'static str = "/api/municipios";
    const ROUTE: &'static str = "/municipios";
    const LABEL_FIELDS: &'static [&'static str] = &["nombre_municipio"];

    fn id(&self) -> i64 {
        self.id
    }

    fn to_payload(&self) -> MunicipalityDto {
        MunicipalityDto {
            name: self.name.clone(),
            department: self.department.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_keys_round_trip() {
        let wire = json!({"id": 7, "nombre_municipio": "Armenia", "departamento": "Quindío"});
        let municipality: Municipality = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(municipality.department.as_deref(), Some("Quindío"));
        assert_eq!(serde_json::to_value(&municipality).unwrap(), wire);
    }
}
