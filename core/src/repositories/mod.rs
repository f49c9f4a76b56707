pub mod temp_token;

pub use temp_token::{InMemoryTempTokenRepository, TempTokenRepository};
