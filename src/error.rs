use miette::Diagnostic;
use std::io;
use thiserror::Error;

use crate::dictionary::Language;

/// Primary error type for the Sillabario application
#[derive(Error, Debug, Diagnostic)]
pub enum SpellCheckError {
    #[error("Environment configuration error: {0}")]
    #[diagnostic(code(sillabario::config_error))]
    Config(String),

    #[error("Dictionary error: {0}")]
    #[diagnostic(code(sillabario::dictionary_error))]
    Dictionary(#[from] DictionaryError),

    #[error("Actor system error: {0}")]
    #[diagnostic(code(sillabario::actor_error))]
    Actor(String),

    #[error("I/O error: {0}")]
    #[diagnostic(code(sillabario::io_error))]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    #[diagnostic(code(sillabario::json_error))]
    Json(#[from] serde_json::Error),

    #[error("Unknown search strategy: {0}")]
    #[diagnostic(
        code(sillabario::unknown_strategy),
        help("Use one of: membership, linear, binary")
    )]
    UnknownStrategy(String),

    #[error("No text to check")]
    #[diagnostic(
        code(sillabario::empty_text),
        help("Type some text before running the spell check")
    )]
    EmptyText,
}

/// Dictionary-specific errors
#[derive(Error, Debug, Diagnostic)]
pub enum DictionaryError {
    #[error("No language selected")]
    #[diagnostic(
        code(sillabario::dictionary::invalid_language),
        help("Select a language to continue")
    )]
    InvalidLanguage,

    #[error("Unknown language: {0}")]
    #[diagnostic(
        code(sillabario::dictionary::unknown_language),
        help("Supported languages are Italian and English")
    )]
    UnknownLanguage(String),

    #[error("Failed to read the {language} dictionary: {source}")]
    #[diagnostic(code(sillabario::dictionary::read_error))]
    ReadError {
        language: Language,
        #[source]
        source: io::Error,
    },

    #[error("No dictionary loaded")]
    #[diagnostic(
        code(sillabario::dictionary::not_ready),
        help("Load a dictionary before checking text")
    )]
    NotReady,
}

// Re-export error types for convenience
pub use SpellCheckError as Error;

/// Create a result type that uses our error type
pub type Result<T> = std::result::Result<T, Error>;
