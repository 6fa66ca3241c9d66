//! The validation session: one form's model, state and policy.
//!
//! A [`ValidationSession`] owns everything that changes while a user fills
//! in a form. The UI layer holds it explicitly, reads snapshots through the
//! accessors and writes only through the operations below.
//!
//! ```rust
//! use formulation_form::prelude::*;
//!
//! let schema = Schema::builder()
//!     .field("firstname", FieldSchema::new().required().min_length(2))
//!     .build()
//!     .unwrap();
//! let mut session = create_session(schema, ValidateOn::Change);
//!
//! session.handle_change("firstname", "a");
//! assert_eq!(session.field_state("firstname").unwrap().is_valid, Some(false));
//! assert!(!session.can_submit());
//!
//! session.handle_change("firstname", "ab");
//! assert!(session.can_submit());
//! ```

use std::sync::Arc;

use formulation_validator::foundation::{ValidationError, Value};

use crate::binding::{FieldBinding, InputEvent, InputKind};
use crate::evaluator::{evaluate_all, evaluate_field, field_errors};
use crate::model::Model;
use crate::options::{SessionOptions, ValidateOn};
use crate::schema::Schema;
use crate::state::{FieldValidationState, FormValidationState};

/// Create a session for `schema`.
pub fn create_session(
    schema: impl Into<Arc<Schema>>,
    options: impl Into<SessionOptions>,
) -> ValidationSession {
    ValidationSession::new(schema, options)
}

/// Runtime state of one form.
#[derive(Debug, Clone)]
pub struct ValidationSession {
    schema: Arc<Schema>,
    options: SessionOptions,
    model: Model,
    baseline: Model,
    state: FormValidationState,
    is_touched: bool,
}

impl ValidationSession {
    /// A fresh session: every schema field `null` and pristine.
    pub fn new(schema: impl Into<Arc<Schema>>, options: impl Into<SessionOptions>) -> Self {
        let schema = schema.into();
        let model = Model::seeded(&schema);
        let state = FormValidationState::pristine(&schema);
        Self {
            baseline: model.clone(),
            model,
            state,
            schema,
            options: options.into(),
            is_touched: false,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[must_use]
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    #[must_use]
    pub fn validate_on(&self) -> ValidateOn {
        self.options.validate_on
    }

    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The model captured by the last [`set_initial_model`](Self::set_initial_model).
    #[must_use]
    pub fn baseline(&self) -> &Model {
        &self.baseline
    }

    #[must_use]
    pub fn form_state(&self) -> &FormValidationState {
        &self.state
    }

    #[must_use]
    pub fn field_state(&self, field: &str) -> Option<&FieldValidationState> {
        self.state.field(field)
    }

    /// Whether the user has changed anything since the last reset.
    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.is_touched
    }

    /// The form is valid and the user has changed something.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state.is_valid == Some(true) && self.is_touched
    }

    /// Whether any value differs from the baseline.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.dirty_fields().is_empty()
    }

    /// Fields whose value differs from the baseline.
    #[must_use]
    pub fn dirty_fields(&self) -> Vec<String> {
        self.model.dirty_fields(&self.baseline)
    }

    /// A submit button should be disabled unless the form is dirty, touched
    /// and the current model passes every rule.
    #[must_use]
    pub fn is_submit_disabled(&self) -> bool {
        let valid = evaluate_all(&self.schema, &self.model).is_valid == Some(true);
        !(self.is_dirty() && self.is_touched && valid)
    }

    /// Errors the UI should display for `field`.
    ///
    /// Shown only when the field is invalid and either touched or the policy
    /// is [`ValidateOn::Submit`].
    #[must_use]
    pub fn visible_errors(&self, field: &str) -> &[ValidationError] {
        let submit = self.options.validate_on == ValidateOn::Submit;
        match self.state.field(field) {
            Some(state) if state.is_invalid() && (state.is_touched || submit) => &state.errors,
            _ => &[],
        }
    }

    /// Display text for the visible errors of `field`.
    #[must_use]
    pub fn resolve_messages(&self, field: &str) -> Vec<String> {
        self.options
            .messages
            .resolve_all(self.visible_errors(field))
    }

    /// Rendering instructions for the widget of `field`.
    #[must_use]
    pub fn bind_input(&self, field: &str, kind: InputKind) -> FieldBinding {
        FieldBinding::new(field, kind, self.model.value(field), self.options.validate_on)
    }

    // ========================================================================
    // MODEL OPERATIONS
    // ========================================================================

    /// Seed the model, make it the reset baseline and evaluate the form.
    ///
    /// Schema fields missing from `values` start as `null`. Every touched
    /// flag is cleared.
    pub fn set_initial_model<I, K, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut model = Model::seeded(&self.schema);
        for (field, value) in values {
            model.set(field, value, false);
        }
        self.baseline = model.clone();
        self.model = model;
        self.state = evaluate_all(&self.schema, &self.model);
        self.is_touched = false;
        tracing::debug!(
            fields = self.model.len(),
            is_valid = ?self.state.is_valid,
            "initial model set"
        );
    }

    /// Write a value without validating.
    pub fn set_field_value(&mut self, field: &str, value: impl Into<Value>, touched: bool) {
        self.model.set(field, value, touched);
    }

    /// Write a value without touching it, then evaluate the whole form.
    pub fn set_property(&mut self, field: &str, value: impl Into<Value>) {
        self.model.set(field, value, false);
        self.state = evaluate_all(&self.schema, &self.model);
        tracing::debug!(field, is_valid = ?self.state.is_valid, "property set");
    }

    /// Replace the whole model without validating. The baseline is kept.
    pub fn set_model(&mut self, model: Model) {
        self.model = model;
    }

    pub fn set_touched(&mut self) {
        self.is_touched = true;
    }

    pub fn set_untouched(&mut self) {
        self.is_touched = false;
    }

    // ========================================================================
    // USER EVENTS
    // ========================================================================

    /// A widget changed `field` to `value`.
    ///
    /// The field and the form become touched. What happens to validation
    /// depends on the policy:
    ///
    /// - `change`: the field is evaluated,
    /// - `blur`: an evaluated field loses its verdict but keeps its errors
    ///   until the next blur. The form verdict is not recomputed, so
    ///   [`can_submit`](Self::can_submit) may still report `true` for a
    ///   value nobody has checked yet; call
    ///   [`validate_form`](Self::validate_form) or [`submit`](Self::submit)
    ///   before trusting it,
    /// - `submit`: an evaluated field returns to pristine until the next
    ///   submit.
    pub fn handle_change(&mut self, field: &str, value: impl Into<Value>) {
        let value = value.into();
        self.model.set(field, value.clone(), true);
        self.is_touched = true;

        let policy = self.options.validate_on;
        let evaluated = self
            .state
            .field(field)
            .is_some_and(|state| !state.is_pristine());
        match policy {
            ValidateOn::Change => self.evaluate_trigger(field, &value),
            ValidateOn::Blur if evaluated => {
                if let Some(state) = self.state.fields.get_mut(field) {
                    state.is_valid = None;
                }
            }
            ValidateOn::Submit if evaluated => {
                self.state
                    .fields
                    .insert(field.to_owned(), FieldValidationState::pristine());
                self.state.is_valid = self.state.summarize();
            }
            ValidateOn::Blur | ValidateOn::Submit => {}
        }
        tracing::debug!(
            field,
            %policy,
            field_valid = ?self.state.field(field).and_then(|state| state.is_valid),
            "field changed"
        );
    }

    /// Apply a widget event.
    pub fn handle_input(&mut self, event: InputEvent) {
        let (field, value) = event.into_parts();
        self.handle_change(&field, value);
    }

    /// A widget lost focus. Evaluates the field under the `blur` policy.
    pub fn handle_blur(&mut self, field: &str) {
        self.model.touch(field);
        if self.options.validate_on != ValidateOn::Blur {
            return;
        }
        let value = self.current_value(field);
        self.evaluate_trigger(field, &value);
        tracing::debug!(
            field,
            field_valid = ?self.state.field(field).and_then(|state| state.is_valid),
            "field blurred"
        );
    }

    // ========================================================================
    // VALIDATION
    // ========================================================================

    /// Evaluate one field against its current model value, whatever the
    /// policy. Returns whether the field is valid.
    pub fn validate_field(&mut self, field: &str) -> bool {
        let value = self.current_value(field);
        self.state = evaluate_field(&self.schema, field, &value, &self.state, &self.model);
        self.state
            .field(field)
            .is_none_or(|state| state.is_valid == Some(true))
    }

    /// Evaluate the whole form against the current model.
    pub fn validate_form(&mut self) -> Option<bool> {
        self.state = evaluate_all(&self.schema, &self.model);
        tracing::debug!(is_valid = ?self.state.is_valid, "form validated");
        self.state.is_valid
    }

    /// Evaluate the whole form and decide whether it may be submitted.
    ///
    /// Under the `submit` policy a valid form is enough; otherwise the form
    /// must also have been touched.
    pub fn submit(&mut self) -> bool {
        let is_valid = self.validate_form();
        let allowed = match self.options.validate_on {
            ValidateOn::Submit => is_valid == Some(true),
            ValidateOn::Change | ValidateOn::Blur => self.can_submit(),
        };
        tracing::debug!(allowed, invalid = ?self.state.invalid_fields().collect::<Vec<_>>(), "submit");
        allowed
    }

    // ========================================================================
    // RESETS
    // ========================================================================

    /// Every field pristine, including fields registered without a schema
    /// entry, and every model entry untouched. Values are kept.
    pub fn reset_validation(&mut self) {
        self.state = self.state.reset_for(&self.schema);
        self.model.untouch_all();
        tracing::debug!("validation reset");
    }

    /// Reset validation and restore the baseline values.
    pub fn reset_form(&mut self) {
        self.reset_validation();
        self.model = self.baseline.clone();
        self.is_touched = false;
    }

    /// Reset validation and empty every value. The baseline is kept.
    pub fn clear_form(&mut self) {
        self.reset_validation();
        self.model.clear_values();
        self.is_touched = false;
    }

    // ========================================================================
    // INTERNALS
    // ========================================================================

    /// The model value of `field`, `null` when absent.
    fn current_value(&self, field: &str) -> Value {
        self.model.value(field).cloned().unwrap_or_default()
    }

    /// Evaluate `field` against `value`, then refresh the already evaluated
    /// fields whose cross-field rules read it.
    fn evaluate_trigger(&mut self, field: &str, value: &Value) {
        self.state = evaluate_field(&self.schema, field, value, &self.state, &self.model);

        let schema = Arc::clone(&self.schema);
        let mut refreshed = false;
        for dependent in schema.dependents(field).filter(|name| *name != field) {
            let Some(previous) = self.state.field(dependent) else {
                continue;
            };
            if previous.is_pristine() {
                continue;
            }
            let touched = previous.is_touched;
            let current = self.current_value(dependent);
            let errors = schema
                .field(dependent)
                .map(|rules| field_errors(rules, &current, &self.model))
                .unwrap_or_default();
            tracing::trace!(field, dependent, valid = errors.is_empty(), "dependent revalidated");
            self.state
                .fields
                .insert(dependent.to_owned(), FieldValidationState::evaluated(errors, touched));
            refreshed = true;
        }
        if refreshed {
            self.state.is_valid = Some(!self.state.has_failures());
        }
    }
}
