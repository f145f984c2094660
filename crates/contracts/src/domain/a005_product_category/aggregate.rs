use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::list_query::{Searchable, SortKey, Sortable};
use crate::shared::validation::{require_text, DraftMode, Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCategory {
    pub id: i64,
    #[serde(rename = "nombre_categoria")]
    pub name: String,
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCategoryDto {
    #[serde(rename = "nombre_categoria")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
}

impl Validate for ProductCategoryDto {
    fn validate(&self, _mode: DraftMode) -> Result<(), ValidationError> {
        require_text("nombre_categoria", &self.name, "El nombre de la categoría es obligatorio")
    }
}

impl Searchable for ProductCategory {
    fn search_text(&self) -> String {
        format!("{} {}", self.name, self.description.as_deref().unwrap_or_default())
    }
}

impl Sortable for ProductCategory {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "id" => SortKey::Int(self.id),
            "name" => SortKey::text(&self.name),
            "description" => SortKey::opt_text(self.description.as_deref()),
            _ => SortKey::Missing,
        }
    }
}

impl Resource for ProductCategory {
    type Payload = ProductCategoryDto;

    const KEY: &'static str = "a005_product_category";
    const ENDPOINT: &'static str = "/api/categorias-productos";
    const ROUTE: &'static str = "/categorias";
    const LABEL_FIELDS: &'static [&'static str] = &["nombre_categoria"];

    fn id(&self) -> i64 {
        self.id
    }

    fn to_payload(&self) -> ProductCategoryDto {
        ProductCategoryDto {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_keys_round_trip() {
        let wire = json!({"id": 5, "nombre_categoria": "Herramientas", "descripcion": "Manuales y eléctricas"});
        let category: ProductCategory = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(serde_json::to_value(&category).unwrap(), wire);

        let bare = json!({"id": 6, "nombre_categoria": "Insumos"});
        let category: ProductCategory = serde_json::from_value(bare.clone()).unwrap();
        assert_eq!(category.description, None);
        assert_eq!(serde_json::to_value(&category).unwrap(), bare);
    }
}
