pub mod api;
pub mod guard;

pub use guard::{use_permissions, AccessDenied, PermissionGate};
