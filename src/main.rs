use anyhow::{Context, Result};
use ask_client::{
    QuestionSubmitter, cli,
    ask::HttpAskClient,
    config::{self, LogsConfig},
    view::TerminalView,
};
use std::sync::{Arc, Mutex};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

/// `logs.level` must be a bare level; `RUST_LOG` may carry full directives
/// such as `ask_client=debug,reqwest=warn` and replaces it when set.
fn build_filter(rust_log: Option<&str>, level: &str) -> Result<EnvFilter> {
    validate_log_level(level)?;

    match rust_log.filter(|directives| !directives.trim().is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| anyhow::anyhow!("Invalid RUST_LOG '{}': {}", directives, e)),
        None => Ok(EnvFilter::new(level)),
    }
}

/// JSON logs go to `logs.file` when set, otherwise to stderr so they stay
/// out of the answers on stdout.
fn init_logging(logs: &LogsConfig, filter: EnvFilter) -> Result<()> {
    match &logs.file {
        Some(path) => {
            if let Some(dir) = std::path::Path::new(path).parent() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("creating log directory for {}", path))?;
            }
            let file = std::fs::File::create(path)
                .with_context(|| format!("opening log file {}", path))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .json()
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .json()
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment directives override the configured level
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = match build_filter(rust_log.as_deref(), &config.logs.level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let log_level = filter.to_string();

    init_logging(&config.logs, filter)?;

    info!("Starting ask client with log filter: {}", log_level);

    let client = HttpAskClient::new(config.client.clone())?;
    info!("Asking questions at {}", client.endpoint());

    let view = Arc::new(TerminalView::new());
    let submitter = QuestionSubmitter::new(view.clone(), Arc::new(client), config.messages);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    cli::run(&submitter, &view, stdin, tokio::io::stdout()).await?;

    Ok(())
}
