//! Presence checks run before a payload is sent.
//!
//! Cross-entity rules (unique names, stock never negative, existing foreign
//! keys) belong to the backend and are not repeated here.

use crate::shared::relation::Related;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Update,
}

pub trait Validate {
    fn validate(&self, mode: DraftMode) -> Result<(), ValidationError>;
}

pub fn require_text(field: &'static str, value: &str, message: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, message));
    }
    Ok(())
}

pub fn require_relation(
    field: &'static str,
    value: &Option<Related>,
    message: &str,
) -> Result<(), ValidationError> {
    require_some(field, value, message)
}

pub fn require_some<T>(field: &'static str, value: &Option<T>, message: &str) -> Result<(), ValidationError> {
    if value.is_none() {
        return Err(ValidationError::new(field, message));
    }
    Ok(())
}

pub fn require_positive(field: &'static str, value: Option<i64>, message: &str) -> Result<(), ValidationError> {
    match value {
        Some(v) if v > 0 => Ok(()),
        _ => Err(ValidationError::new(field, message)),
    }
}

/// Form inputs hand over `""` for untouched optional fields.
pub fn blank_to_none(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_text_is_missing() {
        let err = require_text("nombre_area", "   ", "El nombre es obligatorio").unwrap_err();
        assert_eq!(err.field, "nombre_area");
        assert_eq!(err.to_string(), "El nombre es obligatorio");
        assert!(require_text("nombre_area", "Bodega", "x").is_ok());
    }

    #[test]
    fn positive_rejects_zero_and_missing() {
        assert!(require_positive("cantidad", Some(0), "x").is_err());
        assert!(require_positive("cantidad", None, "x").is_err());
        assert!(require_positive("cantidad", Some(3), "x").is_ok());
    }

    #[test]
    fn blank_strings_become_none() {
        assert_eq!(blank_to_none("  "), None);
        assert_eq!(blank_to_none("Calle 5"), Some("Calle 5".to_string()));
    }
}
