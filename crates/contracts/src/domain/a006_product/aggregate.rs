use serde::{Deserialize, Serialize};

use crate::domain::a005_product_category::ProductCategory;
use crate::domain::common::Resource;
use crate::shared::list_query::{Searchable, SortKey, Sortable};
use crate::shared::relation::{related_label, related_ref, Related};
use crate::shared::serde_helpers::lenient_string;
use crate::shared::validation::{require_relation, require_text, DraftMode, Validate, ValidationError};

/// Producto o material de formación
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nombre_producto")]
    pub name: String,
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Código interno SENA; algunos endpoints lo devuelven como número.
    #[serde(
        rename = "codigo_sena",
        default,
        deserialize_with = "lenient_string::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<String>,
    #[serde(rename = "unidad_medida", default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Related>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(rename = "nombre_producto")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "codigo_sena")]
    pub code: Option<String>,
    #[serde(rename = "unidad_medida")]
    pub unit: Option<String>,
    #[serde(rename = "categoria")]
    pub category: Option<Related>,
}

impl Validate for ProductDto {
    fn validate(&self, _mode: DraftMode) -> Result<(), ValidationError> {
        require_text("nombre_producto", &self.name, "El nombre del producto es obligatorio")?;
        require_relation("categoria", &self.category, "Debe seleccionar una categoría")
    }
}

impl Searchable for Product {
    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.name,
            self.code.as_deref().unwrap_or_default(),
            related_label(&self.category)
        )
    }
}

impl Sortable for Product {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "id" => SortKey::Int(self.id),
            "name" => SortKey::text(&self.name),
            "code" => SortKey::opt_text(self.code.as_deref()),
            "unit" => SortKey::opt_text(self.unit.as_deref()),
            "category" => SortKey::opt_text(self.category.as_ref().and_then(|c| c.label.as_deref())),
            _ => SortKey::Missing,
        }
    }
}

impl Resource for Product {
    type Payload = ProductDto;

    const KEY: &'static str = "a006_product";
    const ENDPOINT: &'static str = "/api/productos";
    const ROUTE: &'static str = "/productos";
    const LABEL_FIELDS: &'static [&'static str] = &["nombre_producto"];

    fn id(&self) -> i64 {
        self.id
    }

    fn relations_mut(&mut self) -> Vec<(&'static str, &mut Option<Related>)> {
        vec![(ProductCategory::KEY, &mut self.category)]
    }

    fn to_payload(&self) -> ProductDto {
        ProductDto {
            name: self.name.clone(),
            description: self.description.clone(),
            code: self.code.clone(),
            unit: self.unit.clone(),
            category: related_ref(&self.category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_code_is_read_as_text() {
        let product: Product = serde_json::from_value(json!({
            "id": 3,
            "nombre_producto": "Multímetro",
            "codigo_sena": 40512,
            "categoria": {"id": 2, "nombre_categoria": "Electrónica"}
        }))
        .unwrap();
        assert_eq!(product.code.as_deref(), Some("40512"));
        assert!(product.matches_filter("electr"));
    }
}
