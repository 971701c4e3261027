use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sillabario::{config, console};

#[actix_rt::main]
async fn main() -> miette::Result<()> {
    // Set up logging on stderr, stdout carries the check results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sillabario=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting spell checker");

    // Load configuration
    let config = config::load_config()?;

    // Run the console until input ends, `:quit` or Ctrl-C
    console::run(config).await
}
