use serde::{Deserialize, Serialize};

use crate::domain::common::Resource;
use crate::shared::list_query::{Searchable, SortKey, Sortable};
use crate::shared::validation::{require_text, DraftMode, Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    #[serde(rename = "nombre_rol")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleDto {
    #[serde(rename = "nombre_rol")]
    pub name: String,
}

impl Validate for RoleDto {
    fn validate(&self, _mode: DraftMode) -> Result<(), ValidationError> {
        require_text("nombre_rol", &self.name, "El nombre del rol es obligatorio")
    }
}

impl Searchable for Role {
    fn search_text(&self) -> String {
        self.name.clone()
    }
}

impl Sortable for Role {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "id" => SortKey::Int(self.id),
            "name" => SortKey::text(&self.name),
            _ => SortKey::Missing,
        }
    }
}

impl Resource for Role {
    type Payload = RoleDto;

    const KEY: &'static str = "a016_role";
    const ENDPOINT: &'static str = "/api/roles";
    const ROUTE: &'static str = "/roles";
    const LABEL_FIELDS: &'static [&'static str] = &["nombre_rol"];

    fn id(&self) -> i64 {
        self.id
    }

    fn to_payload(&self) -> RoleDto {
        RoleDto {
            name: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::{ListQuery, SortDescriptor};
    use serde_json::json;

    fn roles() -> Vec<Role> {
        serde_json::from_value(json!([
            {"id": 1, "nombre_rol": "Admin"},
            {"id": 2, "nombre_rol": "Almacenista"}
        ]))
        .unwrap()
    }

    #[test]
    fn nombre_rol_round_trips() {
        let wire = json!({"id": 1, "nombre_rol": "Admin"});
        let role: Role = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(role.name, "Admin");
        assert_eq!(serde_json::to_value(&role).unwrap(), wire);
        assert_eq!(serde_json::to_value(role.to_payload()).unwrap(), json!({"nombre_rol": "Admin"}));
    }

    #[test]
    fn filter_alm_keeps_only_almacenista() {
        let mut query = ListQuery::default();
        query.set_filter("alm");
        let view = query.apply(&roles());
        assert_eq!(view.items.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn one_role_per_page() {
        let mut query = ListQuery::new(1);
        let first = query.apply(&roles());
        assert_eq!(first.items.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(first.total_pages, 2);

        query.set_page(1);
        let second = query.apply(&roles());
        assert_eq!(second.items.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn descending_name_puts_almacenista_first() {
        let mut query = ListQuery::default();
        query.sort = Some(SortDescriptor::descending("name"));
        let names: Vec<String> = query.apply(&roles()).items.into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Almacenista", "Admin"]);
    }
}
