use serde::{Deserialize, Serialize};

use crate::shared::relation::Related;

/// Logged-in user as stored by the backend in the `user` cookie and
/// returned by `/api/perfil`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    #[serde(rename = "nombre", default)]
    pub first_name: Option<String>,
    #[serde(rename = "apellido", default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "id_rol", alias = "rol_id", alias = "idRol", default)]
    pub role_id: Option<i64>,
    #[serde(rename = "rol", default)]
    pub role: Option<Related>,
}

impl UserProfile {
    /// Flat role id first, nested `rol.id` second.
    pub fn effective_role_id(&self) -> Option<i64> {
        self.role_id.or_else(|| self.role.as_ref().map(|r| r.id))
    }

    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            self.email.clone().unwrap_or_else(|| format!("Usuario #{}", self.id))
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_id_from_any_known_key() {
        for body in [
            json!({"id": 1, "id_rol": 3}),
            json!({"id": 1, "rol_id": 3}),
            json!({"id": 1, "rol": {"id": 3, "nombre_rol": "Almacenista"}}),
        ] {
            let profile: UserProfile = serde_json::from_value(body).unwrap();
            assert_eq!(profile.effective_role_id(), Some(3));
        }
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let p: UserProfile = serde_json::from_value(json!({"id": 9, "email": "a@b.co"})).unwrap();
        assert_eq!(p.display_name(), "a@b.co");
        let p: UserProfile = serde_json::from_value(json!({"id": 9, "nombre": "Ana", "apellido": "Ruiz"})).unwrap();
        assert_eq!(p.display_name(), "Ana Ruiz");
    }
}
