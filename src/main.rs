//! command-router - routes slash commands straight to sub-agent CLIs.

use std::sync::Arc;

use command_router::cli::Cli;
use command_router::error::Result;
use command_router::host::CommandTable;
use command_router::invoke::{Invoker, ShellInvoker};
use command_router::{logging, register_commands};
use futures::future::join_all;
use futures::stream::{FuturesOrdered, StreamExt};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tracing::{error, info};

/// Printed for input lines that are not slash commands.
const NOT_A_COMMAND: &str = "Commands start with '/'. Type /help for available commands.";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // .env values feed the env-backed CLI flags
    let _ = dotenvy::dotenv();
    logging::init_stderr_logging();

    if let Err(e) = run().await {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = cli.resolve_config()?;

    let invoker: Arc<dyn Invoker> = Arc::new(ShellInvoker::new());
    let mut table = CommandTable::new();
    register_commands(&mut table, &config, invoker)?;

    let mut stdout = tokio::io::stdout();

    if cli.list {
        return write_line(&mut stdout, &table.help_text()).await;
    }

    let table = &table;
    if !cli.exec.is_empty() {
        let responses = join_all(cli.exec.iter().map(|line| respond(table, line))).await;
        for text in responses.into_iter().flatten() {
            write_line(&mut stdout, &text).await?;
        }
        return Ok(());
    }

    // Commands run concurrently; responses are written in input order.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending = FuturesOrdered::new();
    let mut input_open = true;

    while input_open || !pending.is_empty() {
        tokio::select! {
            line = lines.next_line(), if input_open => match line? {
                Some(line) => pending.push_back(async move { respond(table, &line).await }),
                None => input_open = false,
            },
            Some(response) = pending.next(), if !pending.is_empty() => {
                if let Some(text) = response {
                    write_line(&mut stdout, &text).await?;
                }
            }
        }
    }

    Ok(())
}

/// Dispatches one line, returning the text to print.
///
/// Blank lines produce nothing. The local operator running the binary counts
/// as authorized.
async fn respond(table: &CommandTable, line: &str) -> Option<String> {
    if line.trim().is_empty() {
        return None;
    }

    let text = match table.dispatch(line, true).await {
        Some(response) => response.text,
        None => NOT_A_COMMAND.to_string(),
    };
    Some(text)
}

async fn write_line(stdout: &mut Stdout, text: &str) -> Result<()> {
    stdout.write_all(format!("{text}\n").as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}
