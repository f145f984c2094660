use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::list_query::{Searchable, SortKey, Sortable};
use crate::shared::validation::{require_text, DraftMode, Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteType {
    pub id: i64,
    #[serde(rename = "nombre_tipo_sitio")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteTypeDto {
    #[serde(rename = "nombre_tipo_sitio")]
    pub name: String,
}

impl Validate for SiteTypeDto {
    fn validate(&self, _mode: DraftMode) -> Result<(), ValidationError> {
        require_text("nombre_tipo_sitio", &self.name, "El nombre del tipo de sitio es obligatorio")
    }
}

impl Searchable for SiteType {
    fn search_text(&self) -> String {
        self.name.clone()
    }
}

impl Sortable for SiteType {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "id" => SortKey::Int(self.id),
            "name" => SortKey::text(&self.name),
            _ => SortKey::Missing,
        }
    }
}

impl Resource for SiteType {
    type Payload = SiteTypeDto;

    const KEY: &'static str = "a003_site_type";
    const ENDPOINT: &'static str = "/api/tipos-sitio";
    const ROUTE: &'static str = "/tipos-sitio";
    const LABEL_FIELDS: &'static [&'static str] = &["nombre_tipo_sitio"];

    fn id(&self) -> i64 {
        self.id
    }

    fn to_payload(&self) -> SiteTypeDto {
        SiteTypeDto {
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
        let wire = json!({"id": 2, "nombre_tipo_sitio": "Estantería"});
        let site_type: SiteType = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(site_type.name, "Estantería");
        assert_eq!(serde_json::to_value(&site_type).unwrap(), wire);
    }
}
