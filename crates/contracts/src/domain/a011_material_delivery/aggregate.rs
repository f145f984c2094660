use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a009_request::Request;
use crate::domain::a012_training_cohort::TrainingCohort;
use crate::domain::a017_user::User;
use crate::domain::common::Resource;
use crate::shared::list_query::{Searchable, SortKey, Sortable};
use crate::shared::relation::{related_label, related_ref, Related};
use crate::shared::serde_helpers::{format_date, opt_date};
use crate::shared::validation::{require_relation, require_some, DraftMode, Validate, ValidationError};

/// Entrega de materiales a una ficha, en respuesta a una solicitud
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDelivery {
    pub id: i64,
    #[serde(rename = "fecha_entrega", with = "opt_date", default)]
    pub date: Option<NaiveDate>,
    #[serde(rename = "observaciones", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "ficha", default, skip_serializing_if = "Option::is_none")]
    pub cohort: Option<Related>,
    #[serde(rename = "solicitud", default, skip_serializing_if = "Option::is_none")]
    pub request: Option<Related>,
    #[serde(rename = "responsable", default, skip_serializing_if = "Option::is_none")]
    pub responsible: Option<Related>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialDeliveryDto {
    #[serde(rename = "fecha_entrega", with = "opt_date", default)]
    pub date: Option<NaiveDate>,
    #[serde(rename = "observaciones")]
    pub notes: Option<String>,
    #[serde(rename = "ficha")]
    pub cohort: Option<Related>,
    #[serde(rename = "solicitud")]
    pub request: Option<Related>,
    #[serde(rename = "responsable")]
    pub responsible: Option<Related>,
}

impl Validate for MaterialDeliveryDto {
    fn validate(&self, _mode: DraftMode) -> Result<(), ValidationError> {
        require_some("fecha_entrega", &self.date, "La fecha de entrega es obligatoria")?;
        require_relation("ficha", &self.cohort, "Debe seleccionar una ficha")?;
        require_relation("solicitud", &self.request, "Debe seleccionar una solicitud")?;
        require_relation("responsable", &self.responsible, "Debe seleccionar un responsable")
    }
}

impl Searchable for MaterialDelivery {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.date.as_ref().map(format_date).unwrap_or_default(),
            self.notes.as_deref().unwrap_or_default(),
            related_label(&self.cohort),
            related_label(&self.responsible)
        )
    }
}

impl Sortable for MaterialDelivery {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "id" => SortKey::Int(self.id),
            "date" => SortKey::opt_date(self.date),
            "notes" => SortKey::opt_text(self.notes.as_deref()),
            "cohort" => SortKey::opt_text(self.cohort.as_ref().and_then(|r| r.label.as_deref())),
            "request" => self.request.as_ref().map(|r| SortKey::Int(r.id)).unwrap_or(SortKey::Missing),
            "responsible" => SortKey::opt_text(self.responsible.as_ref().and_then(|r| r.label.as_deref())),
            _ => SortKey::Missing,
        }
    }
}

impl Resource for MaterialDelivery {
    type Payload = MaterialDeliveryDto;

    const KEY: &'static str = "a011_material_delivery";
    const ENDPOINT: &'static str = "/api/entregas-materiales";
    const ROUTE: &'static str = "/entregas";
    const LABEL_FIELDS: &'static [&'static str] = &["id", "fecha_entrega"];

    fn id(&self) -> i64 {
        self.id
    }

    fn relations_mut(&mut self) -> Vec<(&'static str, &mut Option<Related>)> {
        vec![
            (TrainingCohort::KEY, &mut self.cohort),
            (Request::KEY, &mut self.request),
            (User::KEY, &mut self.responsible),
        ]
    }

    fn to_payload(&self) -> MaterialDeliveryDto {
        MaterialDeliveryDto {
            date: self.date,
            notes: self.notes.clone(),
            cohort: related_ref(&self.cohort),
            request: related_ref(&self.request),
            responsible: related_ref(&self.responsible),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reference_is_required() {
        let mut draft = MaterialDeliveryDto {
            date: NaiveDate::from_ymd_opt(2024, 8, 20),
            cohort: Some(Related::id_only(1)),
            request: Some(Related::id_only(2)),
            ..Default::default()
        };
        assert_eq!(draft.validate(DraftMode::Create).unwrap_err().field, "responsable");
        draft.responsible = Some(Related::id_only(3));
        assert!(draft.validate(DraftMode::Create).is_ok());
    }
}
