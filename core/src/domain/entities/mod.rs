//! Domain entities representing core business objects.

pub mod temp_token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use temp_token::{TempToken, TempTokenState};
