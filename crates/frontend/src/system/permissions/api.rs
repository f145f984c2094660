use contracts::shared::envelope::unwrap_item;
use contracts::system::permissions::{PermissionMatrix, PermissionQuery};
use serde_json::Value;

use crate::shared::api_utils;

pub const PERMISSIONS_ENDPOINT: &str = "/api/por-ruta-rol/permisos";

/// Permission flags from a response body; anything unreadable denies.
pub fn matrix_from_body(body: Value) -> PermissionMatrix {
    match unwrap_item::<PermissionMatrix>(body) {
        Ok(matrix) => matrix,
        Err(e) => {
            log::warn!("unreadable permission response, denying: {}", e);
            PermissionMatrix::DENY_ALL
        }
    }
}

/// Never fails: no role or a failed call yields deny-all.
pub async fn fetch_permissions(route: &str, role_id: Option<i64>) -> PermissionMatrix {
    let Some(role_id) = role_id else {
        log::warn!("no role for {}, denying", route);
        return PermissionMatrix::DENY_ALL;
    };
    let query = PermissionQuery {
        ruta: route,
        role_id,
    };
    match api_utils::get_json_with_query(PERMISSIONS_ENDPOINT, &query).await {
        Ok(body) => matrix_from_body(body),
        Err(e) => {
            log::warn!("permission lookup for {} failed, denying: {}", route, e);
            PermissionMatrix::DENY_ALL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_and_enveloped_flags_decode() {
        let bare = json!({"puede_ver": true, "puede_crear": 1, "puede_editar": false, "puede_eliminar": 0});
        let matrix = matrix_from_body(bare.clone());
        assert!(matrix.can_view && matrix.can_create);
        assert!(!matrix.can_edit && !matrix.can_delete);
        assert_eq!(matrix_from_body(json!({"data": bare})), matrix);
    }

    #[test]
    fn garbage_denies_everything() {
        assert_eq!(matrix_from_body(json!("oops")), PermissionMatrix::DENY_ALL);
        assert_eq!(matrix_from_body(json!({})), PermissionMatrix::DENY_ALL);
    }

    #[test]
    fn query_uses_backend_names() {
        let query = PermissionQuery {
            ruta: "/areas",
            role_id: 2,
        };
        let qs = serde_qs::to_string(&query).unwrap();
        assert!(qs.starts_with("ruta="));
        assert!(qs.ends_with("&idRol=2"));
    }
}
