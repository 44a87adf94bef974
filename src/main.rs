use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "etym", about = "Word-origin voice assistant webhook")]
struct Cli {
    /// TOML config file layered over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Listen address, overrides `server.listen`.
    #[arg(long)]
    listen: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,

    /// Append logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let default_level = if cli.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_env_filter(filter)
                .init();
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let config = etym_core::config::Config::load(cli.config.as_deref())?;
    if config.dictionary.app_id.is_empty() || config.dictionary.app_key.is_empty() {
        tracing::warn!("dictionary credentials are empty; set ETYM_DICTIONARY__APP_ID and ETYM_DICTIONARY__APP_KEY");
    }

    let client = etym_lookup::OxfordClient::new(&config.dictionary)?;
    let listen = cli.listen.unwrap_or(config.server.listen);

    etym_webhook::serve(&listen, Arc::new(client), config.webhook).await
}
