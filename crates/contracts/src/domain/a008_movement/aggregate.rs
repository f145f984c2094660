use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a007_inventory::Inventory;
use crate::domain::a011_material_delivery::MaterialDelivery;
use crate::domain::common::Resource;
use crate::shared::list_query::{Searchable, SortKey, Sortable};
use crate::shared::relation::{related_label, related_ref, Related};
use crate::shared::serde_helpers::{format_date, opt_date};
use crate::shared::validation::{
    require_positive, require_relation, require_some, DraftMode, Validate, ValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MovementType {
    #[default]
    #[serde(rename = "ENTRADA")]
    Entry,
    #[serde(rename = "SALIDA")]
    Exit,
}

impl MovementType {
    pub const ALL: [MovementType; 2] = [MovementType::Entry, MovementType::Exit];

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Entry => "ENTRADA",
            Self::Exit => "SALIDA",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_wire() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Entry => "Entrada",
            Self::Exit => "Salida",
        }
    }
}

/// Registro de entrada o salida sobre una fila de inventario.
///
/// The stock change itself is applied by the backend when the movement is
/// stored; the list only shows the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: i64,
    #[serde(rename = "tipo_movimiento")]
    pub kind: MovementType,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "fecha_movimiento", with = "opt_date", default)]
    pub date: Option<NaiveDate>,
    #[serde(rename = "inventario", default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Related>,
    #[serde(rename = "entrega", default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Related>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementDto {
    #[serde(rename = "tipo_movimiento")]
    pub kind: MovementType,
    #[serde(rename = "cantidad")]
    pub quantity: Option<i64>,
    #[serde(rename = "fecha_movimiento", with = "opt_date", default)]
    pub date: Option<NaiveDate>,
    #[serde(rename = "inventario")]
    pub inventory: Option<Related>,
    #[serde(rename = "entrega")]
    pub delivery: Option<Related>,
}

impl Validate for MovementDto {
    fn validate(&self, _mode: DraftMode) -> Result<(), ValidationError> {
        require_relation("inventario", &self.inventory, "Debe seleccionar un inventario")?;
        require_positive("cantidad", self.quantity, "La cantidad debe ser mayor que cero")?;
        require_some("fecha_movimiento", &self.date, "La fecha del movimiento es obligatoria")
    }
}

impl Searchable for Movement {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.kind.as_wire(),
            related_label(&self.inventory),
            related_label(&self.delivery),
            self.date.as_ref().map(format_date).unwrap_or_default()
        )
    }
}

impl Sortable for Movement {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "id" => SortKey::Int(self.id),
            "kind" => SortKey::text(self.kind.as_wire()),
            "quantity" => SortKey::Int(self.quantity),
            "date" => SortKey::opt_date(self.date),
            "inventory" => SortKey::opt_text(self.inventory.as_ref().and_then(|r| r.label.as_deref())),
            "delivery" => self.delivery.as_ref().map(|r| SortKey::Int(r.id)).unwrap_or(SortKey::Missing),
            _ => SortKey::Missing,
        }
    }
}

impl Resource for Movement {
    type Payload = MovementDto;

    const KEY: &'static str = "a008_movement";
    const ENDPOINT: &'static str = "/api/movimientos";
    const ROUTE: &'static str = "/movimientos";
    const LABEL_FIELDS: &'static [&'static str] = &["tipo_movimiento", "cantidad", "fecha_movimiento"];

    fn id(&self) -> i64 {
        self.id
    }

    fn relations_mut(&mut self) -> Vec<(&'static str, &mut Option<Related>)> {
        vec![
            (Inventory::KEY, &mut self.inventory),
            (MaterialDelivery::KEY, &mut self.delivery),
        ]
    }

    fn to_payload(&self) -> MovementDto {
        MovementDto {
            kind: self.kind,
            quantity: Some(self.quantity),
            date: self.date,
            inventory: related_ref(&self.inventory),
            delivery: related_ref(&self.delivery),
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
            "id": 10,
            "tipo_movimiento": "SALIDA",
            "cantidad": 3,
            "fecha_movimiento": "2024-05-02",
            "inventario": {"id": 4, "nombre": "Guantes · Bodega 1"},
            "entrega": {"id": 8}
        });
        let movement: Movement = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(movement.kind, MovementType::Exit);
        assert_eq!(serde_json::to_value(&movement).unwrap(), wire);
    }

    #[test]
    fn payload_shape() {
        let draft = MovementDto {
            kind: MovementType::Entry,
            quantity: Some(12),
            date: NaiveDate::from_ymd_opt(2024, 6, 1),
            inventory: Some(Related::id_only(4)),
            delivery: None,
        };
        assert!(draft.validate(DraftMode::Create).is_ok());
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({
                "tipo_movimiento": "ENTRADA",
                "cantidad": 12,
                "fecha_movimiento": "2024-06-01",
                "inventario": {"id": 4},
                "entrega": null
            })
        );
    }

    #[test]
    fn quantity_must_be_positive() {
        let draft = MovementDto {
            quantity: Some(0),
            inventory: Some(Related::id_only(4)),
            ..Default::default()
        };
        assert_eq!(draft.validate(DraftMode::Create).unwrap_err().field, "cantidad");
    }

    #[test]
    fn wire_names_parse_back() {
        for kind in MovementType::ALL {
            assert_eq!(MovementType::from_wire(kind.as_wire()), Some(kind));
        }
        assert_eq!(MovementType::from_wire("AJUSTE"), None);
    }
}
