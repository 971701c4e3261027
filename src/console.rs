use actix::{Actor, Addr};
use std::future::Future;
use std::io::{self, BufRead};
use std::thread;
use tokio::signal;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::{
    actors::{
        spell_checker::{SelectLanguage, SetStrategy, SpellCheck},
        SpellCheckerActor,
    },
    config::{Config, OutputFormat},
    dictionary::{DirectorySource, Language, LoadOutcome, SearchStrategy, SpellCheckReport},
    error::DictionaryError,
    Error, Result,
};

const SELECT_LANGUAGE: &str = "Select a language to continue";
const READ_ERROR: &str = "Error reading the dictionary";
const EMPTY_TEXT: &str = "Insert a text to check";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";
const HELP: &str = concat!(
    "Commands: :language <Italian|English>, :strategy <membership|linear|binary>, ",
    ":clear, :quit"
);

/// One line of console input
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Language(Option<Language>),
    Strategy(String),
    Clear,
    Quit,
    Help,
    Check(String),
    Skip,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Command::Skip;
        }

        let Some(command) = trimmed.strip_prefix(':') else {
            return Command::Check(line.to_string());
        };

        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (command, ""),
        };

        match name {
            "language" | "lang" => Command::Language(argument.parse().ok()),
            "strategy" => Command::Strategy(argument.to_string()),
            "clear" => Command::Clear,
            "quit" | "q" => Command::Quit,
            _ => Command::Help,
        }
    }
}

/// What the console has to show after handling a command
#[derive(Debug, PartialEq)]
pub enum Output {
    /// Notice for the user, written to stderr
    Status(String),
    /// Check result, written to stdout
    Report(String),
    Silent,
    Quit,
}

/// Console front end: remembers whether checking is allowed, like the
/// disabled controls of a form, and forwards work to the actor.
pub struct Console {
    checker: Addr<SpellCheckerActor>,
    output_format: OutputFormat,
    checking_enabled: bool,
}

impl Console {
    pub fn new(checker: Addr<SpellCheckerActor>, output_format: OutputFormat) -> Self {
        Self {
            checker,
            output_format,
            checking_enabled: false,
        }
    }

    pub fn checking_enabled(&self) -> bool {
        self.checking_enabled
    }

    pub async fn handle(&mut self, command: Command) -> Result<Output> {
        match command {
            Command::Language(language) => self.select_language(language).await,
            Command::Strategy(name) => self.set_strategy(&name).await,
            Command::Clear => Ok(match self.output_format {
                OutputFormat::Text => Output::Status(CLEAR_SCREEN.to_string()),
                OutputFormat::Json => Output::Silent,
            }),
            Command::Quit => Ok(Output::Quit),
            Command::Help => Ok(Output::Status(HELP.to_string())),
            Command::Check(text) => self.spell_check(text).await,
            Command::Skip => Ok(Output::Silent),
        }
    }

    async fn select_language(&mut self, language: Option<Language>) -> Result<Output> {
        let result = self
            .checker
            .send(SelectLanguage { language })
            .await
            .map_err(|e| Error::Actor(e.to_string()))?;

        let status = match result {
            Ok(LoadOutcome::Loaded { language, words }) => {
                self.checking_enabled = true;
                format!("{language} dictionary loaded ({words} words)")
            }
            Ok(LoadOutcome::AlreadyLoaded(language)) => {
                self.checking_enabled = true;
                format!("{language} dictionary already loaded")
            }
            Err(Error::Dictionary(
                DictionaryError::InvalidLanguage | DictionaryError::UnknownLanguage(_),
            )) => {
                self.checking_enabled = false;
                SELECT_LANGUAGE.to_string()
            }
            Err(Error::Dictionary(DictionaryError::ReadError { .. })) => {
                self.checking_enabled = false;
                READ_ERROR.to_string()
            }
            Err(e) => return Err(e),
        };

        Ok(Output::Status(status))
    }

    async fn set_strategy(&self, name: &str) -> Result<Output> {
        let status = match name.parse::<SearchStrategy>() {
            Ok(strategy) => {
                self.checker
                    .send(SetStrategy(strategy))
                    .await
                    .map_err(|e| Error::Actor(e.to_string()))?;
                format!("Search strategy: {strategy}")
            }
            Err(e) => e.to_string(),
        };
        Ok(Output::Status(status))
    }

    async fn spell_check(&self, text: String) -> Result<Output> {
        if !self.checking_enabled {
            return Ok(Output::Status(SELECT_LANGUAGE.to_string()));
        }

        let result = self
            .checker
            .send(SpellCheck { text })
            .await
            .map_err(|e| Error::Actor(e.to_string()))?;

        match result {
            Ok(report) => self.render(&report).map(Output::Report),
            Err(Error::EmptyText) => Ok(Output::Status(EMPTY_TEXT.to_string())),
            Err(e) => Err(e),
        }
    }

    fn render(&self, report: &SpellCheckReport) -> Result<String> {
        match self.output_format {
            OutputFormat::Text => Ok(report.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(report)?),
        }
    }

    /// Handle input lines until they run out, `:quit` is typed or `shutdown` completes.
    pub async fn drive<F>(
        &mut self,
        mut lines: mpsc::Receiver<io::Result<String>>,
        shutdown: F,
    ) -> Result<()>
    where
        F: Future,
    {
        tokio::pin!(shutdown);

        loop {
            let line = tokio::select! {
                line = lines.recv() => line,
                _ = &mut shutdown => {
                    info!("Received shutdown signal, stopping");
                    return Ok(());
                }
            };

            let Some(line) = line else {
                info!("Input closed, stopping");
                return Ok(());
            };

            match self.handle(Command::parse(&line?)).await {
                Ok(Output::Status(status)) => eprintln!("{status}"),
                Ok(Output::Report(report)) => println!("{report}"),
                Ok(Output::Silent) => {}
                Ok(Output::Quit) => return Ok(()),
                Err(e) => {
                    error!("Console stopped: {}", e);
                    return Err(e);
                }
            }
        }
    }
}

/// Read stdin on its own thread so a pending read never holds up shutdown.
fn spawn_stdin_reader() -> mpsc::Receiver<io::Result<String>> {
    let (tx, rx) = mpsc::channel(16);

    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });

    rx
}

pub async fn run(config: Config) -> miette::Result<()> {
    info!(
        "Using dictionaries in {} with {} search",
        config.dictionary_dir.display(),
        config.strategy
    );

    let source = DirectorySource::new(&config.dictionary_dir);
    let checker = SpellCheckerActor::new(source, config.strategy).start();
    let mut console = Console::new(checker, config.output_format);

    if let Output::Status(status) = console.handle(Command::Language(config.language)).await? {
        eprintln!("{status}");
    }
    eprintln!("{HELP}");

    console.drive(spawn_stdin_reader(), signal::ctrl_c()).await?;
    Ok(())
}
