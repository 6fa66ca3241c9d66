//! Whole-form and single-field evaluation.
//!
//! Both functions are pure: they read a schema and a model and return a new
//! [`FormValidationState`].

use formulation_validator::engine::evaluate_rule;
use formulation_validator::foundation::{FieldLookup, ValidationError, Value};

use crate::model::Model;
use crate::schema::{FieldSchema, Schema};
use crate::state::{FieldValidationState, FormValidationState};

/// Run every rule of `schema` against `value`, collecting failures in
/// declaration order.
pub fn field_errors<L>(schema: &FieldSchema, value: &Value, lookup: &L) -> Vec<ValidationError>
where
    L: FieldLookup + ?Sized,
{
    schema
        .iter()
        .filter_map(|(rule, condition)| evaluate_rule(rule, value, condition, lookup).err())
        .collect()
}

/// Evaluate every schema field against the model.
///
/// Fields absent from the model are evaluated as `null`. Every field comes
/// back untouched. An empty model yields an empty, undecided state.
///
/// ```rust
/// use formulation_form::prelude::*;
///
/// let schema = Schema::builder()
///     .field("firstname", FieldSchema::new().required())
///     .build()
///     .unwrap();
///
/// assert_eq!(evaluate_all(&schema, &Model::new()), FormValidationState::empty());
///
/// let state = evaluate_all(&schema, &Model::from_values([("firstname", "")]));
/// assert_eq!(state.is_valid, Some(false));
/// ```
#[must_use]
pub fn evaluate_all(schema: &Schema, model: &Model) -> FormValidationState {
    if model.is_empty() {
        return FormValidationState::empty();
    }

    let null = Value::Null;
    let fields: indexmap::IndexMap<_, _> = schema
        .fields()
        .map(|(name, field)| {
            let value = model.value(name).unwrap_or(&null);
            let errors = field_errors(field, value, model);
            (name.to_owned(), FieldValidationState::evaluated(errors, false))
        })
        .collect();

    let is_valid = fields
        .values()
        .all(|state| state.is_valid == Some(true));
    tracing::trace!(fields = fields.len(), is_valid, "form evaluated");

    FormValidationState {
        is_valid: Some(is_valid),
        fields,
    }
}

/// Evaluate one field against a candidate `value`, keeping every other
/// field's state from `previous`.
///
/// The field comes back touched. The form is valid when the field is and no
/// other field in `previous` is invalid; pristine fields do not count
/// against it. A field without a schema entry is always valid.
#[must_use]
pub fn evaluate_field(
    schema: &Schema,
    field: &str,
    value: &Value,
    previous: &FormValidationState,
    model: &Model,
) -> FormValidationState {
    let errors = schema
        .field(field)
        .map(|rules| field_errors(rules, value, model))
        .unwrap_or_default();
    let state = FieldValidationState::evaluated(errors, true);

    let others_valid = previous
        .fields
        .iter()
        .filter(|(name, _)| name.as_str() != field)
        .all(|(_, other)| !other.is_invalid());
    let is_valid = state.is_valid == Some(true) && others_valid;
    tracing::trace!(field, is_valid, "field evaluated");

    FormValidationState {
        is_valid: Some(is_valid),
        ..previous.clone().with_field(field, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formulation_validator::foundation::{CustomRule, RuleCondition};
    use pretty_assertions::assert_eq;

    fn schema() -> Schema {
        Schema::builder()
            .field(
                "firstname",
                FieldSchema::new().required().min_length(2).max_length(20),
            )
            .field("phone", FieldSchema::new().phone_numbers())
            .build()
            .unwrap()
    }

    #[test]
    fn evaluate_all_collects_errors_in_order() {
        let model = Model::from_values([("firstname", "a"), ("phone", "abc")]);
        let state = evaluate_all(&schema(), &model);

        assert_eq!(state.is_valid, Some(false));
        assert_eq!(
            state.field("firstname").unwrap().errors,
            vec![ValidationError::rule("minLength", RuleCondition::Number(2))]
        );
        assert_eq!(
            state.field("phone").unwrap().errors[0].rule_name(),
            "phoneNumbers"
        );
        assert!(state.fields.values().all(|field| !field.is_touched));
    }

    #[test]
    fn evaluate_all_treats_absent_as_null() {
        let model = Model::from_values([("phone", "0123456789")]);
        let state = evaluate_all(&schema(), &model);

        let firstname = state.field("firstname").unwrap();
        assert_eq!(firstname.is_valid, Some(false));
        assert_eq!(firstname.errors[0].rule_name(), "required");
        assert_eq!(state.field("phone").unwrap().is_valid, Some(true));
    }

    #[test]
    fn evaluate_all_without_schema_fields_is_valid() {
        let state = evaluate_all(&Schema::default(), &Model::from_values([("a", "x")]));
        assert_eq!(state.is_valid, Some(true));
        assert!(state.fields.is_empty());
    }

    #[test]
    fn evaluate_field_keeps_other_fields() {
        let schema = schema();
        let previous = evaluate_all(&schema, &Model::from_values([("firstname", ""), ("phone", "")]));
        let model = Model::from_values([("firstname", ""), ("phone", "12")]);

        let next = evaluate_field(&schema, "phone", &Value::from("12"), &previous, &model);

        assert_eq!(next.field("firstname"), previous.field("firstname"));
        assert_eq!(next.field("phone").unwrap().is_valid, Some(true));
        assert!(next.field("phone").unwrap().is_touched);
        assert_eq!(next.is_valid, Some(false));
    }

    #[test]
    fn evaluate_field_ignores_pristine_fields() {
        let schema = schema();
        let previous = FormValidationState::pristine(&schema);
        let model = Model::seeded(&schema);

        let next = evaluate_field(&schema, "firstname", &Value::from("Foo"), &previous, &model);

        assert_eq!(next.is_valid, Some(true));
        assert!(next.field("phone").unwrap().is_pristine());
    }

    #[test]
    fn evaluate_field_without_schema_entry() {
        let next = evaluate_field(
            &schema(),
            "nickname",
            &Value::from(""),
            &FormValidationState::empty(),
            &Model::new(),
        );
        assert_eq!(
            next.field("nickname"),
            Some(&FieldValidationState::evaluated(vec![], true))
        );
    }

    #[test]
    fn evaluate_field_reads_dependency_from_model() {
        let equal = CustomRule::depends_on("lastname", "Last names do not match.", |value, other| {
            Some(value) == other
        });
        let schema = Schema::builder()
            .field("lastname", FieldSchema::new())
            .field("confirmLastname", FieldSchema::new().custom("isEqualTo", equal))
            .build()
            .unwrap();
        let model = Model::from_values([("lastname", "Bar")]);
        let previous = FormValidationState::pristine(&schema);

        let next = evaluate_field(&schema, "confirmLastname", &Value::from("Baz"), &previous, &model);
        let confirm = next.field("confirmLastname").unwrap();
        assert_eq!(confirm.is_valid, Some(false));
        assert_eq!(confirm.errors[0].text(), Some("Last names do not match."));
        assert_eq!(confirm.errors[0].dependency(), Some("lastname"));

        let next = evaluate_field(&schema, "confirmLastname", &Value::from("Bar"), &previous, &model);
        assert_eq!(next.field("confirmLastname").unwrap().is_valid, Some(true));
    }
}
