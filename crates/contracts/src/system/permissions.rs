use serde::{Deserialize, Serialize};

use crate::shared::serde_helpers::lenient_bool;

/// What a role may do on one navigable route.
///
/// Default is deny-all: a missing or failed lookup never grants anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PermissionMatrix {
    #[serde(rename = "puede_ver", default, deserialize_with = "lenient_bool::deserialize")]
    pub can_view: bool,
    #[serde(rename = "puede_crear", default, deserialize_with = "lenient_bool::deserialize")]
    pub can_create: bool,
    #[serde(rename = "puede_editar", default, deserialize_with = "lenient_bool::deserialize")]
    pub can_edit: bool,
    #[serde(rename = "puede_eliminar", default, deserialize_with = "lenient_bool::deserialize")]
    pub can_delete: bool,
}

impl PermissionMatrix {
    pub const DENY_ALL: Self = Self {
        can_view: false,
        can_create: false,
        can_edit: false,
        can_delete: false,
    };
}

/// Query string of `/api/por-ruta-rol/permisos`.
#[derive(Debug, Clone, Serialize)]
pub struct PermissionQuery<'a> {
    pub ruta: &'a str,
    #[serde(rename = "idRol")]
    pub role_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flags_decode_from_numbers() {
        let m: PermissionMatrix = serde_json::from_value(json!({
            "puede_ver": 1, "puede_crear": 0, "puede_editar": true
        }))
        .unwrap();
        assert_eq!(
            m,
            PermissionMatrix { can_view: true, can_create: false, can_edit: true, can_delete: false }
        );
        assert_eq!(PermissionMatrix::default(), PermissionMatrix::DENY_ALL);
    }
}
