use serde::{Deserialize, Serialize};

use crate::domain::a001_area::Area;
use crate::domain::a003_site_type::SiteType;
use crate::domain::common::Resource;
use crate::shared::list_query::{Searchable, SortKey, Sortable};
use crate::shared::relation::{related_label, related_ref, Related};
use crate::shared::validation::{require_relation, require_text, DraftMode, Validate, ValidationError};

/// Sitio físico donde se guarda inventario (bodega, ambiente, estante)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: i64,
    #[serde(rename = "nombre_sitio")]
    pub name: String,
    #[serde(rename = "ubicacion", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "tipo_sitio", default, skip_serializing_if = "Option::is_none")]
    pub site_type: Option<Related>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<Related>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteDto {
    #[serde(rename = "nombre_sitio")]
    pub name: String,
    #[serde(rename = "ubicacion")]
    pub location: Option<String>,
    #[serde(rename = "tipo_sitio")]
    pub site_type: Option<Related>,
    pub area: Option<Related>,
}

impl Validate for SiteDto {
    fn validate(&self, _mode: DraftMode) -> Result<(), ValidationError> {
        require_text("nombre_sitio", &self.name, "El nombre del sitio es obligatorio")?;
        require_relation("tipo_sitio", &self.site_type, "Debe seleccionar un tipo de sitio")
    }
}

impl Searchable for Site {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name,
            self.location.as_deref().unwrap_or_default(),
            related_label(&self.site_type),
            related_label(&self.area)
        )
    }
}

impl Sortable for Site {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "id" => SortKey::Int(self.id),
            "name" => SortKey::text(&self.name),
            "location" => SortKey::opt_text(self.location.as_deref()),
            "site_type" => SortKey::opt_text(self.site_type.as_ref().and_then(|r| r.label.as_deref())),
            "area" => SortKey::opt_text(self.area.as_ref().and_then(|r| r.label.as_deref())),
            _ => SortKey::Missing,
        }
    }
}

impl Resource for Site {
    type Payload = SiteDto;

    const KEY: &'static str = "a004_site";
    const ENDPOINT: &'static str = "/api/sitios";
    const ROUTE: &'static str = "/sitios";
    const LABEL_FIELDS: &'static [&'static str] = &["nombre_sitio"];

    fn id(&self) -> i64 {
        self.id
    }

    fn relations_mut(&mut self) -> Vec<(&'static str, &mut Option<Related>)> {
        vec![
            (SiteType::KEY, &mut self.site_type),
            (Area::KEY, &mut self.area),
        ]
    }

    fn to_payload(&self) -> SiteDto {
        SiteDto {
            name: self.name.clone(),
            location: self.location.clone(),
            site_type: related_ref(&self.site_type),
            area: related_ref(&self.area),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_site_type_blocks_submit() {
        let draft = SiteDto {
            name: "Bodega 2".into(),
            ..Default::default()
        };
        let err = draft.validate(DraftMode::Create).unwrap_err();
        assert_eq!(err.message, "Debe seleccionar un tipo de sitio");
    }

    #[test]
    fn search_covers_related_labels() {
        let site: Site = serde_json::from_value(json!({
            "id": 4,
            "nombre_sitio": "Estante A",
            "tipo_sitio": {"id": 1, "nombre_tipo_sitio": "Estantería"},
            "area": {"id": 9, "nombre_area": "Mecánica"}
        }))
        .unwrap();
        assert!(site.matches_filter("mecá"));
        assert!(site.matches_filter("estantería"));
        assert!(!site.matches_filter("bodega"));
    }
}
