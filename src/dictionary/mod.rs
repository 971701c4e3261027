pub mod checker;
pub mod language;
pub mod loader;
pub mod store;

// Re-export common types
pub use checker::{check, AnnotatedWord, SearchStrategy, SpellCheckReport};
pub use language::Language;
pub use loader::{load_store, DirectorySource, Dictionary, LoadOutcome, MemorySource, WordSource};
pub use store::{compare_ignore_case, fold_case, WordStore};
