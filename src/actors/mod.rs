pub mod spell_checker;

// Re-export actor types for easier import
pub use spell_checker::SpellCheckerActor;
