use formulation_form::prelude::*;
use pretty_assertions::assert_eq;

fn profile_schema() -> Schema {
    let equal = CustomRule::depends_on("lastname", "Last names do not match.", |value, other| {
        Some(value) == other
    });
    Schema::builder()
        .field(
            "firstname",
            FieldSchema::new().required().min_length(2).max_length(20),
        )
        .field("lastname", FieldSchema::new().required())
        .field("confirmLastname", FieldSchema::new().custom("isEqualTo", equal))
        .field("phone", FieldSchema::new().phone_numbers())
        .field("email", FieldSchema::new().email())
        .build()
        .expect("schema is valid")
}

// ---------------------------------------------------------------------------
// 1. Seeding and resets
// ---------------------------------------------------------------------------

#[test]
fn reset_then_seed_equals_fresh_session() {
    let seed = [("firstname", "Foo"), ("lastname", "Bar")];

    let mut used = create_session(profile_schema(), ValidateOn::Change);
    used.set_initial_model([("firstname", "x")]);
    used.handle_change("firstname", "abc");
    used.handle_change("phone", "letters");
    used.reset_form();
    used.set_initial_model(seed);

    let mut fresh = create_session(profile_schema(), ValidateOn::Change);
    fresh.set_initial_model(seed);

    assert_eq!(used.model(), fresh.model());
    assert_eq!(used.form_state(), fresh.form_state());
    assert_eq!(used.is_touched(), fresh.is_touched());
}

#[test]
fn clear_then_reset_restores_baseline() {
    let mut session = create_session(profile_schema(), ValidateOn::Blur);
    session.set_initial_model([("firstname", "Foo"), ("email", "foo@example.com")]);
    let baseline = session.model().clone();

    session.handle_change("firstname", "Changed");
    session.clear_form();
    assert_eq!(session.model().value("firstname"), Some(&Value::from("")));
    assert_eq!(session.model().value("email"), Some(&Value::from("")));
    assert!(session.form_state().fields.values().all(FieldValidationState::is_pristine));
    assert!(!session.is_touched());

    session.reset_form();
    assert_eq!(session.model(), &baseline);
    assert_eq!(session.form_state().is_valid, None);
}

#[test]
fn reset_validation_keeps_values() {
    let mut session = create_session(profile_schema(), ValidateOn::Change);
    session.handle_change("firstname", "a");
    session.reset_validation();

    assert_eq!(session.model().value("firstname"), Some(&Value::from("a")));
    assert!(!session.model().is_touched("firstname"));
    assert!(session.field_state("firstname").unwrap().is_pristine());
}

#[test]
fn reset_validation_keeps_fields_outside_schema() {
    let schema = Schema::builder()
        .field("firstname", FieldSchema::new().required())
        .build()
        .expect("schema is valid");
    let mut session = create_session(schema, ValidateOn::Change);
    session.handle_change("nickname", "x");
    assert_eq!(
        session.field_state("nickname").unwrap().is_valid,
        Some(true)
    );

    session.reset_validation();

    assert_eq!(
        session.field_state("nickname"),
        Some(&FieldValidationState::pristine())
    );
    assert_eq!(
        session.field_state("firstname"),
        Some(&FieldValidationState::pristine())
    );
    assert_eq!(session.form_state().is_valid, None);
}

// ---------------------------------------------------------------------------
// 2. Rule scenarios through the session
// ---------------------------------------------------------------------------

#[test]
fn min_length_boundary() {
    let mut session = create_session(profile_schema(), ValidateOn::Change);

    session.handle_change("firstname", "a");
    assert_eq!(
        session.resolve_messages("firstname"),
        vec!["This field has a minimum of 2 characters.".to_string()]
    );

    session.handle_change("firstname", "ab");
    assert!(session.resolve_messages("firstname").is_empty());
}

#[test]
fn phone_numbers() {
    let mut session = create_session(profile_schema(), ValidateOn::Change);

    session.handle_change("phone", "0123456789");
    assert_eq!(session.field_state("phone").unwrap().is_valid, Some(true));

    session.handle_change("phone", "abc");
    let state = session.field_state("phone").unwrap();
    assert_eq!(state.is_valid, Some(false));
    assert_eq!(state.errors[0].rule_name(), "phoneNumbers");
}

#[test]
fn cross_field_rule() {
    let mut session = create_session(profile_schema(), ValidateOn::Change);
    session.set_initial_model([("lastname", "Bar")]);

    session.handle_change("confirmLastname", "Baz");
    let state = session.field_state("confirmLastname").unwrap();
    assert_eq!(state.is_valid, Some(false));
    assert_eq!(
        state.errors,
        vec![ValidationError::message(
            "isEqualTo",
            "Last names do not match.",
            Some("lastname")
        )]
    );

    session.handle_change("confirmLastname", "Bar");
    assert_eq!(session.field_state("confirmLastname").unwrap().is_valid, Some(true));
}

#[test]
fn custom_messages_override_defaults() {
    let options = SessionOptions::from_json(
        r#"{ "validateOn": "change", "messages": { "required": "I am mandatory" } }"#,
    )
    .unwrap();
    let mut session = create_session(profile_schema(), options);

    session.handle_change("lastname", "  ");
    assert_eq!(
        session.resolve_messages("lastname"),
        vec!["I am mandatory".to_string()]
    );
}

// ---------------------------------------------------------------------------
// 3. Submit policy
// ---------------------------------------------------------------------------

#[test]
fn submit_policy_hides_error_of_edited_field_until_next_submit() {
    let mut session = create_session(profile_schema(), ValidateOn::Submit);
    session.set_initial_model([("firstname", "a"), ("lastname", "Bar")]);

    session.handle_change("confirmLastname", "Bar");
    assert!(!session.submit());
    assert_eq!(session.visible_errors("firstname").len(), 1);

    session.handle_change("firstname", "ab");
    assert!(session.visible_errors("firstname").is_empty());
    assert!(session.field_state("firstname").unwrap().is_pristine());

    assert!(session.submit());
    assert!(session.visible_errors("firstname").is_empty());
}

#[test]
fn change_policy_submit_requires_touch() {
    let mut session = create_session(profile_schema(), ValidateOn::Change);
    session.set_initial_model([
        ("firstname", "Foo"),
        ("lastname", "Bar"),
        ("confirmLastname", "Bar"),
    ]);
    assert!(!session.submit());

    session.handle_change("email", "foo@example.com");
    assert!(session.submit());
}

// ---------------------------------------------------------------------------
// 4. Model replacement and focus events
// ---------------------------------------------------------------------------

#[test]
fn set_model_replaces_values_without_validating() {
    let mut session = create_session(profile_schema(), ValidateOn::Change);
    session.set_initial_model([("firstname", "Foo")]);
    let before = session.form_state().clone();

    session.set_model(Model::from_values([("firstname", "a"), ("phone", "letters")]));

    assert_eq!(session.form_state(), &before);
    assert_eq!(session.model().value("firstname"), Some(&Value::from("a")));
    assert_eq!(session.model().value("lastname"), None);
    assert_eq!(session.dirty_fields(), vec!["firstname", "phone"]);

    session.clear_form();
    assert_eq!(session.model().len(), 2);
    assert_eq!(session.model().value("firstname"), Some(&Value::from("")));
    assert_eq!(session.model().value("phone"), Some(&Value::from("")));
    assert_eq!(session.model().value("lastname"), None);
}

#[test]
fn blur_under_submit_policy_only_touches() {
    let mut session = create_session(profile_schema(), ValidateOn::Submit);
    session.set_initial_model([("firstname", "a")]);
    session.handle_change("firstname", "b");
    let before = session.form_state().clone();
    assert!(!session.model().is_touched("lastname"));

    session.handle_blur("lastname");

    assert!(session.model().is_touched("lastname"));
    assert_eq!(session.form_state(), &before);
    assert!(session.field_state("firstname").unwrap().is_pristine());
    assert!(session.field_state("lastname").unwrap().is_invalid());
}

#[test]
fn blur_policy_keeps_form_verdict_until_blur() {
    let mut session = create_session(profile_schema(), ValidateOn::Blur);
    session.set_initial_model([
        ("firstname", "Foo"),
        ("lastname", "Bar"),
        ("confirmLastname", "Bar"),
    ]);

    session.handle_change("firstname", "a");
    assert_eq!(session.field_state("firstname").unwrap().is_valid, None);
    assert!(session.can_submit());
    assert!(session.is_submit_disabled());

    session.handle_blur("firstname");
    assert!(!session.can_submit());
}
