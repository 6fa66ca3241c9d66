use formulation_validator::foundation::ConditionError;

/// Error type for schema construction and configuration loading.
///
/// Field validation failures are never reported through this type; they are
/// [`ValidationError`](formulation_validator::foundation::ValidationError)
/// data inside the form state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A built-in rule was declared with a condition it cannot use.
    #[error("invalid condition on field `{field}`: {source}")]
    InvalidCondition {
        field: String,
        #[source]
        source: ConditionError,
    },

    /// The same field name was declared twice.
    #[error("field `{field}` is declared more than once")]
    DuplicateField { field: String },

    /// A schema or options document could not be read.
    #[error("invalid configuration document: {error}")]
    Config { error: String },
}

impl FormError {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::InvalidCondition { .. } | Self::DuplicateField { .. } => "schema",
            Self::Config { .. } => "config",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidCondition { .. } => "FORM_INVALID_CONDITION",
            Self::DuplicateField { .. } => "FORM_DUPLICATE_FIELD",
            Self::Config { .. } => "FORM_CONFIG",
        }
    }
}

impl From<serde_json::Error> for FormError {
    fn from(error: serde_json::Error) -> Self {
        Self::Config {
            error: error.to_string(),
        }
    }
}

/// Result type for form operations that can fail.
pub type Result<T, E = FormError> = std::result::Result<T, E>;
