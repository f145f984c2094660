use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a013_qualification::Qualification;
use crate::domain::common::Resource;
use crate::shared::list_query::{Searchable, SortKey, Sortable};
use crate::shared::relation::{related_label, related_ref, Related};
use crate::shared::serde_helpers::{lenient_string, opt_date};
use crate::shared::validation::{require_relation, require_text, DraftMode, Validate, ValidationError};

/// Ficha de formación: un grupo de aprendices cursando un titulado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingCohort {
    pub id: i64,
    #[serde(rename = "codigo_ficha", default, deserialize_with = "lenient_string::deserialize")]
    pub code: Option<String>,
    #[serde(rename = "fecha_inicio", with = "opt_date", default)]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "fecha_fin", with = "opt_date", default)]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "titulado", default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<Related>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingCohortDto {
    #[serde(rename = "codigo_ficha")]
    pub code: String,
    #[serde(rename = "fecha_inicio", with = "opt_date", default)]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "fecha_fin", with = "opt_date", default)]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "titulado")]
    pub qualification: Option<Related>,
}

impl Validate for TrainingCohortDto {
    fn validate(&self, _mode: DraftMode) -> Result<(), ValidationError> {
        require_text("codigo_ficha", &self.code, "El código de la ficha es obligatorio")?;
        require_relation("titulado", &self.qualification, "Debe seleccionar un titulado")
    }
}

impl Searchable for TrainingCohort {
    fn search_text(&self) -> String {
        format!(
            "{} {}",
            self.code.as_deref().unwrap_or_default(),
            related_label(&self.qualification)
        )
    }
}

impl Sortable for TrainingCohort {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "id" => SortKey::Int(self.id),
            "code" => SortKey::opt_text(self.code.as_deref()),
            "start_date" => SortKey::opt_date(self.start_date),
            "end_date" => SortKey::opt_date(self.end_date),
            "qualification" => SortKey::opt_text(self.qualification.as_ref().and_then(|r| r.label.as_deref())),
            _ => SortKey::Missing,
        }
    }
}

impl Resource for TrainingCohort {
    type Payload = TrainingCohortDto;

    const KEY: &'static str = "a012_training_cohort";
    const ENDPOINT: &'static str = "/api/fichas-formacion";
    const ROUTE: &'static str = "/fichas";
    const LABEL_FIELDS: &'static [&'static str] = &["codigo_ficha"];

    fn id(&self) -> i64 {
        self.id
    }

    fn relations_mut(&mut self) -> Vec<(&'static str, &mut Option<Related>)> {
        vec![(Qualification::KEY, &mut self.qualification)]
    }

    fn to_payload(&self) -> TrainingCohortDto {
        TrainingCohortDto {
            code: self.code.clone().unwrap_or_default(),
            start_date: self.start_date,
            end_date: self.end_date,
            qualification: related_ref(&self.qualification),
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
            "id": 4,
            "codigo_ficha": "2567890",
            "fecha_inicio": "2024-02-05",
            "fecha_fin": "2025-08-30",
            "titulado": {"id": 2, "nombre": "Tecnólogo en Logística"}
        });
        let cohort: TrainingCohort = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(cohort.start_date, NaiveDate::from_ymd_opt(2024, 2, 5));
        assert_eq!(serde_json::to_value(&cohort).unwrap(), wire);
    }

    #[test]
    fn numeric_code_is_read_as_text() {
        let cohort: TrainingCohort = serde_json::from_value(json!({"id": 4, "codigo_ficha": 2567890})).unwrap();
        assert_eq!(cohort.code.as_deref(), Some("2567890"));
        assert_eq!(cohort.to_payload().code, "2567890");
    }
}
