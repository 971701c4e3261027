use actix::{Actor, Context, Handler, Message};
use std::time::Instant;
use tracing::info;

use crate::dictionary::{
    check, Dictionary, Language, LoadOutcome, SearchStrategy, SpellCheckReport, WordSource,
};
use crate::error::{Error, Result};
use crate::tokenizer::tokenize;

/// Message to load the dictionary of a language
#[derive(Message)]
#[rtype(result = "Result<LoadOutcome>")]
pub struct SelectLanguage {
    pub language: Option<Language>,
}

/// Message to change the search strategy used by later checks
#[derive(Message)]
#[rtype(result = "()")]
pub struct SetStrategy(pub SearchStrategy);

/// Message to spell check a piece of free text
#[derive(Message)]
#[rtype(result = "Result<SpellCheckReport>")]
pub struct SpellCheck {
    pub text: String,
}

/// Message to get the language currently loaded
#[derive(Message)]
#[rtype(result = "Option<Language>")]
pub struct CurrentLanguage;

/// Actor that owns the loaded dictionary and answers check requests one at a time
pub struct SpellCheckerActor {
    dictionary: Dictionary,
    source: Box<dyn WordSource>,
    strategy: SearchStrategy,
}

impl SpellCheckerActor {
    pub fn new(source: impl WordSource + 'static, strategy: SearchStrategy) -> Self {
        Self {
            dictionary: Dictionary::new(),
            source: Box::new(source),
            strategy,
        }
    }
}

impl Actor for SpellCheckerActor {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Context<Self>) {
        info!("SpellCheckerActor started (strategy: {})", self.strategy);
    }
}

impl Handler<SelectLanguage> for SpellCheckerActor {
    type Result = Result<LoadOutcome>;

    fn handle(&mut self, msg: SelectLanguage, _ctx: &mut Context<Self>) -> Self::Result {
        self.dictionary.load(msg.language, &*self.source)
    }
}

impl Handler<SetStrategy> for SpellCheckerActor {
    type Result = ();

    fn handle(&mut self, msg: SetStrategy, _ctx: &mut Context<Self>) -> Self::Result {
        info!("Search strategy set to {}", msg.0);
        self.strategy = msg.0;
    }
}

impl Handler<SpellCheck> for SpellCheckerActor {
    type Result = Result<SpellCheckReport>;

    fn handle(&mut self, msg: SpellCheck, _ctx: &mut Context<Self>) -> Self::Result {
        if msg.text.is_empty() {
            return Err(Error::EmptyText);
        }

        let store = self.dictionary.store()?;
        let tokens = tokenize(&msg.text);

        let start = Instant::now();
        let words = check(&tokens, store, self.strategy);
        let elapsed = start.elapsed();

        let report = SpellCheckReport {
            strategy: self.strategy,
            words,
            elapsed,
        };

        info!(
            "Checked {} words with {} search: {} errors",
            tokens.len(),
            self.strategy,
            report.error_count()
        );

        Ok(report)
    }
}

impl Handler<CurrentLanguage> for SpellCheckerActor {
    type Result = Option<Language>;

    fn handle(&mut self, _msg: CurrentLanguage, _ctx: &mut Context<Self>) -> Self::Result {
        self.dictionary.language()
    }
}
