//! # formulation-form
//!
//! Schemas, validation state and stateful sessions for Formulation forms,
//! built on the rule engine in `formulation-validator`.
//!
//! - [`schema`]: which rules apply to which field
//! - [`evaluator`]: pure whole-form and single-field evaluation
//! - [`session`]: a form's model, state and validate-on policy
//! - [`binding`]: widget bindings and input events
//!
//! ## Quick Start
//!
//! ```rust
//! use formulation_form::prelude::*;
//!
//! let schema = Schema::from_json(r#"{
//!     "firstname": { "required": true, "minLength": 2, "maxLength": 20 },
//!     "phone": { "phoneNumbers": true }
//! }"#).unwrap();
//!
//! let mut session = create_session(schema, ValidateOn::Blur);
//! session.set_initial_model([("firstname", "Foo")]);
//!
//! session.handle_change("phone", "abc");
//! session.handle_blur("phone");
//! assert_eq!(
//!     session.resolve_messages("phone"),
//!     vec!["This is not a valid phone number.".to_string()]
//! );
//! ```

pub mod binding;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod options;
pub mod prelude;
pub mod schema;
pub mod session;
pub mod state;

pub use error::{FormError, Result};
pub use evaluator::{evaluate_all, evaluate_field};
pub use session::{ValidationSession, create_session};
