//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};
use rstest_bdd_macros::{given, then, when};
use serde_json::json;

const VALID_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

#[fixture]
fn valid_fields() -> UserFields {
    UserFields {
        id: Some(VALID_ID.to_owned()),
        username: "ada".to_owned(),
        email: "a@aub.edu.lb".to_owned(),
        password: "correct horse battery staple".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        credits: 15,
        grade: 3.7,
    }
}

#[rstest]
fn every_field_reads_back_unchanged(valid_fields: UserFields) {
    let user = User::try_from_fields(valid_fields).expect("valid user");

    assert_eq!(user.id().map(AsRef::as_ref), Some(VALID_ID));
    assert_eq!(user.username(), "ada");
    assert_eq!(user.email().as_ref(), "a@aub.edu.lb");
    assert_eq!(user.password(), "correct horse battery staple");
    assert_eq!(user.first_name(), "Ada");
    assert_eq!(user.last_name(), "Lovelace");
    assert_eq!(user.credits(), 15);
    assert!((user.grade() - 3.7).abs() < f64::EPSILON);
}

#[rstest]
#[case(None)]
#[case(Some(String::new()))]
fn id_is_optional(valid_fields: UserFields, #[case] id: Option<String>) {
    let user = User::try_from_fields(UserFields { id, ..valid_fields }).expect("id is optional");
    assert!(user.id().is_none());
}

#[rstest]
fn rejects_malformed_id(valid_fields: UserFields) {
    let fields = UserFields {
        id: Some("not-a-uuid".to_owned()),
        ..valid_fields
    };
    assert!(matches!(
        User::try_from_fields(fields),
        Err(FormatError::InvalidUuid { value }) if value == "not-a-uuid"
    ));
}

#[rstest]
#[case("student@mail.aub.edu")]
#[case("student@aub.edu.lb")]
fn accepts_institutional_emails(valid_fields: UserFields, #[case] email: &str) {
    let fields = UserFields {
        email: email.to_owned(),
        ..valid_fields
    };
    let user = User::try_from_fields(fields).expect("institutional email");
    assert_eq!(user.email().as_ref(), email);
}

#[rstest]
fn rejects_foreign_domain(valid_fields: UserFields) {
    let fields = UserFields {
        email: "student@gmail.com".to_owned(),
        ..valid_fields
    };
    assert!(matches!(
        User::try_from_fields(fields),
        Err(FormatError::DisallowedEmailDomain { domain, .. }) if domain == "gmail.com"
    ));
}

#[rstest]
#[case("not-an-email")]
#[case("")]
fn rejects_unparsable_or_missing_email(valid_fields: UserFields, #[case] email: &str) {
    let fields = UserFields {
        email: email.to_owned(),
        ..valid_fields
    };
    assert!(matches!(
        User::try_from_fields(fields),
        Err(FormatError::InvalidEmail { value }) if value == email
    ));
}

#[rstest]
fn unvalidated_fields_accept_any_value(valid_fields: UserFields) {
    let fields = UserFields {
        username: String::new(),
        password: String::new(),
        first_name: "  ".to_owned(),
        last_name: "O'Brien-Smith".to_owned(),
        credits: -3,
        grade: 9.9,
        ..valid_fields
    };
    let user = User::try_from_fields(fields).expect("no constraints on these fields");
    assert_eq!(user.credits(), -3);
    assert_eq!(user.last_name(), "O'Brien-Smith");
}

#[rstest]
fn debug_output_redacts_password(valid_fields: UserFields) {
    let rendered = format!("{valid_fields:?}");
    assert!(!rendered.contains("battery"));

    let user = User::try_from_fields(valid_fields).expect("valid user");
    let rendered = format!("{user:?}");
    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("battery"));
}

#[rstest]
fn serialises_with_table_column_keys(valid_fields: UserFields) {
    let user = User::try_from_fields(valid_fields).expect("valid user");
    insta::assert_json_snapshot!(user);
}

#[rstest]
fn deserialisation_runs_validation() {
    let payload = json!({
        "username": "ada",
        "email": "ada@gmail.com",
        "password": "pw",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "credits": 15,
        "grade": 3.7
    });
    let result: Result<User, _> = serde_json::from_value(payload);
    let err = result.expect_err("foreign domain");
    assert!(err.to_string().contains("ada@gmail.com is an invalid email"));
}

#[rstest]
fn deserialisation_rejects_unknown_fields(valid_fields: UserFields) {
    let mut payload = serde_json::to_value(valid_fields).expect("serialise fields");
    if let Some(object) = payload.as_object_mut() {
        object.insert("gpa".to_owned(), json!(3.9));
    }
    let result: Result<User, _> = serde_json::from_value(payload);
    assert!(result.is_err());
}

#[given("a valid user payload")]
fn a_valid_user_payload(valid_fields: UserFields) -> UserFields {
    valid_fields
}

#[when("the user is constructed")]
fn the_user_is_constructed(payload: UserFields) -> Result<User, FormatError> {
    User::try_from_fields(payload)
}

#[then("the user is returned")]
fn the_user_is_returned(result: Result<User, FormatError>) {
    let user = result.expect("user should be created");
    assert_eq!(user.id().map(AsRef::as_ref), Some(VALID_ID));
}

#[rstest]
fn constructing_a_user_happy_path(valid_fields: UserFields) {
    let payload = a_valid_user_payload(valid_fields);
    let result = the_user_is_constructed(payload);
    the_user_is_returned(result);
}

#[given("a payload with a personal email address")]
fn a_payload_with_a_personal_email_address(valid_fields: UserFields) -> UserFields {
    UserFields {
        email: "ada@hotmail.com".to_owned(),
        ..valid_fields
    }
}

#[then("user construction fails")]
fn user_construction_fails(result: Result<User, FormatError>) {
    assert!(matches!(
        result,
        Err(FormatError::DisallowedEmailDomain { .. })
    ));
}

#[rstest]
fn constructing_a_user_unhappy_path(valid_fields: UserFields) {
    let payload = a_payload_with_a_personal_email_address(valid_fields);
    let result = the_user_is_constructed(payload);
    user_construction_fails(result);
}
