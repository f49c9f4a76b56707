//! Unit tests for the temp token entity

use std::collections::HashMap;

use crate::domain::entities::temp_token::{TempToken, TempTokenState};

fn sample(expiration: i64) -> TempToken {
    let mut info = HashMap::new();
    info.insert("email".to_string(), "user@example.com".to_string());
    TempToken::new("u1", "i1", "pwreset", info, expiration)
}

#[test]
fn test_new_token_has_no_token_string() {
    let token = sample(1_000);
    assert!(token.token.is_empty());
    assert_eq!(token.user_id, "u1");
    assert_eq!(token.instance_id, "i1");
    assert_eq!(token.purpose, "pwreset");
    assert_eq!(token.info.get("email").map(String::as_str), Some("user@example.com"));

    let assigned = token.with_token("abc");
    assert_eq!(assigned.token, "abc");
}

#[test]
fn test_expiration_boundary() {
    let token = sample(1_000);

    assert!(!token.is_expired_at(999));
    // Still valid at exactly the expiration second
    assert!(!token.is_expired_at(1_000));
    assert!(token.is_expired_at(1_001));

    assert_eq!(token.state_at(1_000), TempTokenState::Active);
    assert_eq!(token.state_at(1_001), TempTokenState::Expired);
}

#[test]
fn test_seconds_until_expiration() {
    let token = sample(1_000);
    assert_eq!(token.seconds_until_expiration(400), 600);
    assert_eq!(token.seconds_until_expiration(2_000), 0);
}

#[test]
fn test_matches_owner() {
    let token = sample(1_000);

    assert!(token.matches_owner("i1", "u1", Some("pwreset")));
    assert!(token.matches_owner("i1", "u1", None));
    assert!(!token.matches_owner("i1", "u1", Some("email-verification")));
    assert!(!token.matches_owner("i2", "u1", None));
    assert!(!token.matches_owner("i1", "u2", None));
}

#[test]
fn test_deserialize_without_token_or_info() {
    let json = r#"{
        "user_id": "u1",
        "instance_id": "i1",
        "purpose": "invite",
        "expiration": 42
    }"#;

    let token: TempToken = serde_json::from_str(json).unwrap();
    assert!(token.token.is_empty());
    assert!(token.info.is_empty());
    assert_eq!(token.expiration, 42);
}
