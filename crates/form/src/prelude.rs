//! Prelude module for convenient imports.
//!
//! ```rust
//! use formulation_form::prelude::*;
//! ```

pub use crate::binding::{BoundValue, FieldBinding, InputEvent, InputKind};
pub use crate::error::{FormError, Result};
pub use crate::evaluator::{evaluate_all, evaluate_field};
pub use crate::model::{FieldValue, Model};
pub use crate::options::{SessionOptions, ValidateOn};
pub use crate::schema::{FieldSchema, Schema, SchemaBuilder};
pub use crate::session::{ValidationSession, create_session};
pub use crate::state::{FieldValidationState, FormValidationState};

pub use formulation_validator::prelude::*;
