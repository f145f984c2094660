use serde::{Deserialize, Serialize};

use crate::domain::a006_product::Product;
use crate::domain::a009_request::Request;
use crate::domain::common::Resource;
use crate::shared::list_query::{Searchable, SortKey, Sortable};
use crate::shared::relation::{related_label, related_ref, Related};
use crate::shared::validation::{require_positive, require_relation, DraftMode, Validate, ValidationError};

/// Línea de una solicitud: cantidad pedida de un producto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestDetail {
    pub id: i64,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "producto", default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Related>,
    #[serde(rename = "solicitud", default, skip_serializing_if = "Option::is_none")]
    pub request: Option<Related>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestDetailDto {
    #[serde(rename = "cantidad")]
    pub quantity: Option<i64>,
    #[serde(rename = "producto")]
    pub product: Option<Related>,
    #[serde(rename = "solicitud")]
    pub request: Option<Related>,
}

impl Validate for RequestDetailDto {
    fn validate(&self, _mode: DraftMode) -> Result<(), ValidationError> {
        require_relation("solicitud", &self.request, "Debe seleccionar una solicitud")?;
        require_relation("producto", &self.product, "Debe seleccionar un producto")?;
        require_positive("cantidad", self.quantity, "La cantidad debe ser mayor que cero")
    }
}

impl Searchable for RequestDetail {
    fn search_text(&self) -> String {
        format!("{} {}", related_label(&self.product), related_label(&self.request))
    }
}

impl Sortable for RequestDetail {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "id" => SortKey::Int(self.id),
            "quantity" => SortKey::Int(self.quantity),
            "product" => SortKey::opt_text(self.product.as_ref().and_then(|r| r.label.as_deref())),
            "request" => self.request.as_ref().map(|r| SortKey::Int(r.id)).unwrap_or(SortKey::Missing),
            _ => SortKey::Missing,
        }
    }
}

impl Resource for RequestDetail {
    type Payload = RequestDetailDto;

    const KEY: &'static str = "a010_request_detail";
    const ENDPOINT: &'static str = "/api/detalle-solicitudes";
    const ROUTE: &'static str = "/detalle-solicitudes";
    const LABEL_FIELDS: &'static [&'static str] = &["producto.nombre_producto", "cantidad"];

    fn id(&self) -> i64 {
        self.id
    }

    fn relations_mut(&mut self) -> Vec<(&'static str, &mut Option<Related>)> {
        vec![
            (Product::KEY, &mut self.product),
            (Request::KEY, &mut self.request),
        ]
    }

    fn to_payload(&self) -> RequestDetailDto {
        RequestDetailDto {
            quantity: Some(self.quantity),
            product: related_ref(&self.product),
            request: related_ref(&self.request),
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
            "id": 8,
            "cantidad": 12,
            "producto": {"id": 4, "nombre": "Guantes de nitrilo"},
            "solicitud": {"id": 15}
        });
        let detail: RequestDetail = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(detail.quantity, 12);
        assert_eq!(serde_json::to_value(&detail).unwrap(), wire);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let dto = RequestDetailDto {
            quantity: Some(0),
            product: Some(Related::id_only(4)),
            request: Some(Related::id_only(15)),
        };
        assert_eq!(dto.validate(DraftMode::Create).unwrap_err().field, "cantidad");
    }
}
