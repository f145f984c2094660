use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a017_user::User;
use crate::domain::common::Resource;
use crate::shared::list_query::{Searchable, SortKey, Sortable};
use crate::shared::relation::{related_label, related_ref, Related};
use crate::shared::serde_helpers::{format_date, opt_date};
use crate::shared::validation::{require_relation, require_some, DraftMode, Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RequestStatus {
    #[default]
    #[serde(rename = "PENDIENTE")]
    Pending,
    #[serde(rename = "APROBADA")]
    Approved,
    #[serde(rename = "RECHAZADA")]
    Rejected,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Pending => "PENDIENTE",
            Self::Approved => "APROBADA",
            Self::Rejected => "RECHAZADA",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_wire() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Approved => "Aprobada",
            Self::Rejected => "Rechazada",
        }
    }
}

/// Solicitud de materiales hecha por un usuario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub id: i64,
    #[serde(rename = "estado")]
    pub status: RequestStatus,
    #[serde(rename = "fecha_solicitud", with = "opt_date", default)]
    pub date: Option<NaiveDate>,
    #[serde(rename = "usuario", default, skip_serializing_if = "Option::is_none")]
    pub requester: Option<Related>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestDto {
    #[serde(rename = "estado")]
    pub status: RequestStatus,
    #[serde(rename = "fecha_solicitud", with = "opt_date", default)]
    pub date: Option<NaiveDate>,
    #[serde(rename = "usuario")]
    pub requester: Option<Related>,
}

impl Validate for RequestDto {
    fn validate(&self, _mode: DraftMode) -> Result<(), ValidationError> {
        require_relation("usuario", &self.requester, "Debe seleccionar el solicitante")?;
        require_some("fecha_solicitud", &self.date, "La fecha de la solicitud es obligatoria")
    }
}

impl Searchable for Request {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.id,
            self.status.as_wire(),
            related_label(&self.requester),
            self.date.as_ref().map(format_date).unwrap_or_default()
        )
    }
}

impl Sortable for Request {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "id" => SortKey::Int(self.id),
            "status" => SortKey::text(self.status.as_wire()),
            "date" => SortKey::opt_date(self.date),
            "requester" => SortKey::opt_text(self.requester.as_ref().and_then(|r| r.label.as_deref())),
            _ => SortKey::Missing,
        }
    }
}

impl Resource for Request {
    type Payload = RequestDto;

    const KEY: &'static str = "a009_request";
    const ENDPOINT: &'static str = "/api/solicitudes";
    const ROUTE: &'static str = "/solicitudes";
    const LABEL_FIELDS: &'static [&'static str] = &["id", "fecha_solicitud", "estado"];

    fn id(&self) -> i64 {
        self.id
    }

    fn relations_mut(&mut self) -> Vec<(&'static str, &mut Option<Related>)> {
        vec![(User::KEY, &mut self.requester)]
    }

    fn to_payload(&self) -> RequestDto {
        RequestDto {
            status: self.status,
            date: self.date,
            requester: related_ref(&self.requester),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_uses_uppercase_wire_names() {
        let req: Request = serde_json::from_value(json!({
            "id": 5,
            "estado": "RECHAZADA",
            "fecha_solicitud": "2024-02-10T00:00:00.000000Z",
            "usuario": {"id": 2, "nombre": "Laura"}
        }))
        .unwrap();
        assert_eq!(req.status, RequestStatus::Rejected);
        assert_eq!(req.date, NaiveDate::from_ymd_opt(2024, 2, 10));
        assert!(req.matches_filter("rechaz"));
        assert!(req.matches_filter("laura"));
    }

    #[test]
    fn unknown_status_is_a_decode_error() {
        let result: Result<Request, _> = serde_json::from_value(json!({"id": 1, "estado": "ANULADA"}));
        assert!(result.is_err());
    }
}
