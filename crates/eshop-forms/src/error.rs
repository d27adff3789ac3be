//! Form errors.

use thiserror::Error;

/// Form error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// One or more fields failed validation; the messages are on the fields.
    #[error("invalid fields: {}", .0.join(", "))]
    Invalid(Vec<&'static str>),

    /// A validated value could not be converted to its typed form.
    #[error("cannot convert {field}: {message}")]
    Conversion {
        field: &'static str,
        message: String,
    },
}

impl FormError {
    /// Names of the fields that failed, if this is a validation failure.
    pub fn invalid_fields(&self) -> &[&'static str] {
        match self {
            FormError::Invalid(fields) => fields,
            FormError::Conversion { .. } => &[],
        }
    }
}
