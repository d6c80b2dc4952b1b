//! Tests for the user record model.

use super::*;
use chrono::NaiveDate;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

fn at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .expect("valid fixture timestamp")
}

#[fixture]
fn profile() -> UserProfile {
    UserProfile {
        name: "Мария Петрова".to_owned(),
        email: "maria@example.com".to_owned(),
        age: 30,
        phone: "+7 (999) 234-56-78".to_owned(),
        city: "Санкт-Петербург".to_owned(),
    }
}

#[rstest]
fn new_record_has_no_timestamps(profile: UserProfile) {
    let user = User::new(UserId::new(2), profile);
    assert!(user.created_at().is_none());
    assert!(user.updated_at().is_none());
}

#[rstest]
fn serialises_snake_case_fields_and_formatted_timestamps(profile: UserProfile) {
    let user = User::new(UserId::new(2), profile).created(at(14, 30, 45));
    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(
        value,
        json!({
            "id": 2,
            "name": "Мария Петрова",
            "email": "maria@example.com",
            "age": 30,
            "phone": "+7 (999) 234-56-78",
            "city": "Санкт-Петербург",
            "created_at": "2024-01-15 14:30:45",
        })
    );
    assert!(value.get("updated_at").is_none());
}

#[rstest]
fn deserialises_records_without_optional_fields() {
    let user: User = serde_json::from_value(json!({
        "id": 4,
        "name": "John Doe",
        "email": "john@example.com",
        "age": 41,
    }))
    .expect("minimal record parses");
    assert_eq!(user.id(), UserId::new(4));
    assert_eq!(user.phone(), "");
    assert_eq!(user.city(), "");
    assert!(user.created_at().is_none());
}

#[rstest]
fn rejects_malformed_timestamps() {
    let result = serde_json::from_value::<User>(json!({
        "id": 4,
        "name": "John Doe",
        "email": "john@example.com",
        "age": 41,
        "created_at": "yesterday",
    }));
    assert!(result.is_err());
}

#[rstest]
fn apply_update_replaces_fields_and_stamps_update(profile: UserProfile) {
    let mut user = User::new(UserId::new(2), profile).created(at(9, 0, 0));
    let edited = UserProfile {
        name: "Мария Иванова".to_owned(),
        email: "m.ivanova@example.com".to_owned(),
        age: 31,
        phone: String::new(),
        city: "Казань".to_owned(),
    };
    user.apply_update(edited, at(10, 0, 0));

    assert_eq!(user.name(), "Мария Иванова");
    assert_eq!(user.email(), "m.ivanova@example.com");
    assert_eq!(user.age(), 31);
    assert_eq!(user.phone(), "");
    assert_eq!(user.city(), "Казань");
    assert_eq!(user.created_at(), Some(at(9, 0, 0)));
    assert_eq!(user.updated_at(), Some(at(10, 0, 0)));
}

#[rstest]
#[case("maria@example.com", true)]
#[case("MARIA@Example.COM", true)]
#[case("maria@example.org", false)]
fn has_email_ignores_case(profile: UserProfile, #[case] email: &str, #[case] expected: bool) {
    let user = User::new(UserId::new(2), profile);
    assert_eq!(user.has_email(email), expected);
}

#[rstest]
fn user_id_parses_and_advances() {
    let id: UserId = "8".parse().expect("numeric id");
    assert_eq!(id.next(), UserId::new(9));
    assert_eq!(serde_json::to_value(id).expect("serialise id"), Value::from(8));
}
