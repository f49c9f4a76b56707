//! Route handlers
//!
//! - `temp_tokens` - Generate, validate, list and delete temporary tokens

pub mod temp_tokens;
