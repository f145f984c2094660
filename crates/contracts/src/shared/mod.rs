pub mod columns;
pub mod envelope;
pub mod list_query;
pub mod lookup;
pub mod relation;
pub mod serde_helpers;
pub mod validation;
