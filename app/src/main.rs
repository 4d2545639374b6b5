//! Terminal front end for the task list.
//!
//! Reads one command per line from stdin and prints the page after each.
//! Type `help` for the command list, or `help <command>` for one command.

use std::sync::Arc;
use todomvc::shell;
use todomvc::{App, Command, Config, Flow};
use todomvc_core::UuidGenerator;
use todomvc_storage::FileStorage;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file (if present)
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    init_tracing(&config)?;
    tracing::info!(
        namespace = %config.namespace,
        data_dir = %config.data_dir.display(),
        "Starting todomvc"
    );

    let storage = Arc::new(FileStorage::new(&config.data_dir));
    let mut app = App::start(&config, storage, Arc::new(UuidGenerator), None).await?;
    println!("{}", app.document());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::from_line(&line) {
            Ok(command) => command,
            Err(error) => {
                // Help goes to stdout, usage errors to stderr
                error.print()?;
                continue;
            },
        };
        match shell::execute(&mut app, command).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => println!("{}", app.document()),
            Err(error) => eprintln!("{error}"),
        }
    }

    tracing::info!("Bye");
    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&config.log_filter)?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
