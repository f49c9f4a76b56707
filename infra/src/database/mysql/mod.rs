//! MySQL repository implementations

pub(crate) mod temp_token_repository_impl;

pub use temp_token_repository_impl::{MySqlTempTokenRepository, TEMP_TOKENS_SCHEMA};
