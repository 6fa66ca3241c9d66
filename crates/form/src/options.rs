//! Session configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use formulation_validator::messages::Messages;

use crate::error::Result;

/// Which user interaction triggers field validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidateOn {
    /// Every change re-evaluates the field.
    Change,
    /// Leaving a field evaluates it.
    #[default]
    Blur,
    /// Only submitting evaluates the form.
    Submit,
}

impl ValidateOn {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Change => "change",
            Self::Blur => "blur",
            Self::Submit => "submit",
        }
    }
}

impl fmt::Display for ValidateOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options a session is created with.
///
/// ```rust
/// use formulation_form::options::{SessionOptions, ValidateOn};
///
/// let options = SessionOptions::from_json(r#"{
///     "validateOn": "submit",
///     "messages": { "required": "I am mandatory" }
/// }"#).unwrap();
/// assert_eq!(options.validate_on, ValidateOn::Submit);
///
/// assert_eq!(SessionOptions::from_json("{}").unwrap().validate_on, ValidateOn::Blur);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionOptions {
    pub validate_on: ValidateOn,
    pub messages: Messages,
}

impl SessionOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn validate_on(mut self, policy: ValidateOn) -> Self {
        self.validate_on = policy;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Read options from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<ValidateOn> for SessionOptions {
    fn from(policy: ValidateOn) -> Self {
        Self::new().validate_on(policy)
    }
}
