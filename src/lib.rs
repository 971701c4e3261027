pub mod actors;
pub mod config;
pub mod console;
pub mod dictionary;
pub mod error;
pub mod tokenizer;

// Re-export error types for convenience
pub use error::{DictionaryError, Error, Result};
