use thiserror::Error;

/// Failures raised by the decimal arithmetic layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Decimal overflow in {context}")]
    Overflow { context: String },

    #[error("Undefined result in {context}")]
    Undefined { context: String },

    #[error("Non-finite value for {field}")]
    NotFinite { field: String },

    #[error("Malformed number for {field}: {input:?}")]
    Malformed { field: String, input: String },
}

#[derive(Debug, Error)]
pub enum FinPlanError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl FinPlanError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        FinPlanError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for FinPlanError {
    fn from(e: serde_json::Error) -> Self {
        FinPlanError::SerializationError(e.to_string())
    }
}
