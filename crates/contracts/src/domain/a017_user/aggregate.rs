use serde::{Deserialize, Serialize};

use crate::domain::a016_role::Role;
use crate::domain::common::Resource;
use crate::shared::list_query::{Searchable, SortKey, Sortable};
use crate::shared::relation::{related_label, related_ref, Related};
use crate::shared::serde_helpers::lenient_string;
use crate::shared::validation::{
    require_relation, require_text, DraftMode, Validate, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(
        rename = "documento",
        default,
        deserialize_with = "lenient_string::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub document: Option<String>,
    #[serde(rename = "rol", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Related>,
}

impl User {
    pub fn full_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(last) if !last.trim().is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}

/// The password is write-only: sent on create, and on update only when changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(rename = "documento")]
    pub document: Option<String>,
    #[serde(rename = "rol")]
    pub role: Option<Related>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Validate for UserDto {
    fn validate(&self, mode: DraftMode) -> Result<(), ValidationError> {
        require_text("nombre", &self.first_name, "El nombre es obligatorio")?;
        require_text("email", &self.email, "El correo es obligatorio")?;
        if !self.email.contains('@') {
            return Err(ValidationError::new("email", "El correo no es válido"));
        }
        require_relation("rol", &self.role, "Debe seleccionar un rol")?;
        if mode == DraftMode::Create {
            require_text(
                "password",
                self.password.as_deref().unwrap_or_default(),
                "La contraseña es obligatoria",
            )?;
        }
        Ok(())
    }
}

impl Searchable for User {
    fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.full_name(),
            self.email,
            self.document.as_deref().unwrap_or_default(),
            related_label(&self.role)
        )
    }
}

impl Sortable for User {
    fn sort_key(&self, column: &str) -> SortKey {
        match column {
            "id" => SortKey::Int(self.id),
            "name" => SortKey::text(self.full_name()),
            "email" => SortKey::text(&self.email),
            "document" => SortKey::opt_text(self.document.as_deref()),
            "role" => SortKey::opt_text(self.role.as_ref().and_then(|r| r.label.as_deref())),
            _ => SortKey::Missing,
        }
    }
}

impl Resource for User {
    type Payload = UserDto;

    const KEY: &'static str = "a017_user";
    const ENDPOINT: &'static str = "/api/usuarios";
    const ROUTE: &'static str = "/usuarios";
    const LABEL_FIELDS: &'static [&'static str] = &["nombre", "apellido"];

    fn id(&self) -> i64 {
        self.id
    }

    fn relations_mut(&mut self) -> Vec<(&'static str, &mut Option<Related>)> {
        vec![(Role::KEY, &mut self.role)]
    }

    fn to_payload(&self) -> UserDto {
        UserDto {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            document: self.document.clone(),
            role: related_ref(&self.role),
            password: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft() -> UserDto {
        UserDto {
            first_name: "Laura".into(),
            email: "laura@sena.edu.co".into(),
            role: Some(Related::id_only(2)),
            ..Default::default()
        }
    }

    #[test]
    fn password_required_only_on_create() {
        assert_eq!(draft().validate(DraftMode::Create).unwrap_err().field, "password");
        assert!(draft().validate(DraftMode::Update).is_ok());
    }

    #[test]
    fn unchanged_password_is_not_sent() {
        let value = serde_json::to_value(draft()).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["rol"], json!({"id": 2}));
    }

    #[test]
    fn email_needs_an_at_sign() {
        let mut d = draft();
        d.email = "laura".into();
        assert_eq!(d.validate(DraftMode::Update).unwrap_err().message, "El correo no es válido");
    }
}
