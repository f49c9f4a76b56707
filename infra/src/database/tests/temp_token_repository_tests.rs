//! Tests for the MySQL temp token repository helpers

use std::collections::HashMap;

use crate::database::mysql::TEMP_TOKENS_SCHEMA;
use crate::database::mysql::temp_token_repository_impl::{decode_info, encode_info};

#[test]
fn test_info_column_round_trip() {
    let mut info = HashMap::new();
    info.insert("studyKey".to_string(), "s1".to_string());
    info.insert("redirect".to_string(), "/home".to_string());

    let raw = encode_info(&info).unwrap();
    assert_eq!(decode_info(&raw).unwrap(), info);
}

#[test]
fn test_empty_info_column_decodes_to_empty_map() {
    assert!(decode_info("").unwrap().is_empty());
    assert!(decode_info("{}").unwrap().is_empty());
}

#[test]
fn test_malformed_info_column_is_internal() {
    let err = decode_info("not json").unwrap_err();
    assert_eq!(err.code(), um_core::errors::ErrorCode::Internal);
}

#[test]
fn test_schema_indexes_owner_lookup() {
    assert!(TEMP_TOKENS_SCHEMA.contains("CREATE TABLE IF NOT EXISTS temp_tokens"));
    assert!(TEMP_TOKENS_SCHEMA.contains("token VARCHAR(128) NOT NULL PRIMARY KEY"));
    assert!(TEMP_TOKENS_SCHEMA.contains("(instance_id, user_id, purpose)"));
}

#[test]
fn test_schema_uses_binary_collation() {
    assert!(TEMP_TOKENS_SCHEMA.contains("COLLATE utf8mb4_bin"));
}
