use serde::{Deserialize, Serialize};

use crate::domain::a004_site::Site;
use crate::domain::a006_product::Product;
use crate::domain::common::Resource;
use crate::shared::list_query::{Searchable, SortKey, Sortable};
use crate::shared::relation::{related_label, related_ref, Related};
use crate::shared::validation::{require_relation, require_some, DraftMode, Validate, ValidationError};

/// Existencias de un producto en un sitio.
///
/// The stock figure is maintained by the backend from movements; the client
/// only sets it when an inventory row is created or corrected by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub id: i64,
    pub stock: i64,
    #[serde(rename = "producto", default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Related>,
    #[serde(rename = "sitio", default, skip_serializing_if = "Option::is_none")]
    pub site: Option<Related>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryDto {
    pub stock: Option<i64>,
    #[serde(rename = "producto")]
    pub product: Option<Related>,
    #[serde(rename = "sitio")]
    pub site: Option<Related>,
}

impl Validate for InventoryDto {
    fn validate(&self, _mode: DraftMode) -> Result<(), ValidationError> {
        require_relation("producto", &self.product, "Debe seleccionar un producto")?;
        require_relation("sitio", &self.site, "Debe seleccionar un sitio")?;
        require_some("stock", &self.stock, "El stock es obligatorio")
    }
}

impl Searchable for Inventory {
    fn search_text(&self) -> String {
        format!("{} {}", related_label(&self.product), related_label(&self.site))
    }
}

impl Sortable for Inventory {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "id" => SortKey::Int(self.id),
            "stock" => SortKey::Int(self.stock),
            "product" => SortKey::opt_text(self.product.as_ref().and_then(|r| r.label.as_deref())),
            "site" => SortKey::opt_text(self.site.as_ref().and_then(|r| r.label.as_deref())),
            _ => SortKey::Missing,
        }
    }
}

impl Resource for Inventory {
    type Payload = InventoryDto;

    const KEY: &'static str = "a007_inventory";
    const ENDPOINT: &'static str = "/api/inventarios";
    const ROUTE: &'static str = "/inventarios";
    const LABEL_FIELDS: &'static [&'static str] = &[
        "producto.nombre",
        "producto.nombre_producto",
        "sitio.nombre",
        "sitio.nombre_sitio",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn relations_mut(&mut self) -> Vec<(&'static str, &mut Option<Related>)> {
        vec![
            (Product::KEY, &mut self.product),
            (Site::KEY, &mut self.site),
        ]
    }

    fn to_payload(&self) -> InventoryDto {
        InventoryDto {
            stock: Some(self.stock),
            product: related_ref(&self.product),
            site: related_ref(&self.site),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_stock_is_a_valid_value() {
        let draft = InventoryDto {
            stock: Some(0),
            product: Some(Related::id_only(1)),
            site: Some(Related::id_only(2)),
        };
        assert!(draft.validate(DraftMode::Create).is_ok());
    }

    #[test]
    fn site_is_required() {
        let draft = InventoryDto {
            stock: Some(5),
            product: Some(Related::id_only(1)),
            site: None,
        };
        assert_eq!(draft.validate(DraftMode::Update).unwrap_err().message, "Debe seleccionar un sitio");
    }
}
