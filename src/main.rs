//! Krishi-Sahayak entry point.

use clap::{Parser, Subcommand};
use krishi_sahayak::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

/// Krishi-Sahayak: keyword-matched agricultural advisory demo
#[derive(Parser, Debug)]
#[command(name = "krishi")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP front end (default behavior)
    Serve {
        /// Bind host. If not specified, uses config file value.
        #[arg(long)]
        host: Option<String>,
        /// Bind port. If not specified, uses config file value.
        #[arg(short, long)]
        port: Option<u16>,
        /// Enable JSON logging format
        #[arg(long)]
        json_logs: bool,
    },
    /// Ask a single question and print the advice
    Ask {
        /// Question text
        text: String,
    },
    /// Interactive advisory shell
    Chat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let command = args.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
        json_logs: false,
    });

    match command {
        Command::Serve {
            host,
            port,
            json_logs,
        } => run_http_server(&args.config, host, port, json_logs).await,
        Command::Ask { text } => {
            init_cli_tracing();
            let advice = krishi_sahayak::advisor::respond(&text)?;
            cli::output::print_advice(&advice, args.json);
            Ok(())
        }
        Command::Chat => {
            init_cli_tracing();
            let config = load_config(&args.config)?;
            cli::chat::run_chat(config)
        }
    }
}

/// Quiet stderr logging for the CLI modes.
fn init_cli_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(config_path: &Option<String>) -> anyhow::Result<Config> {
    let config = if let Some(path) = config_path {
        Config::from_file(path)?
    } else {
        Config::load()?
    };
    Ok(config)
}

/// Run the HTTP front end.
async fn run_http_server(
    config_path: &Option<String>,
    host: Option<String>,
    port: Option<u16>,
    json_logs: bool,
) -> anyhow::Result<()> {
    // Initialize tracing for server mode
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting Krishi-Sahayak v{}", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(config_path)?;

    // Override bind address from CLI args only if explicitly provided
    if let Some(h) = host {
        config.server.host = h;
    }
    if let Some(p) = port {
        config.server.port = p;
    }

    tracing::info!(
        addr = %config.bind_addr(),
        upload_dir = %config.upload_dir().display(),
        "Configuration loaded"
    );

    krishi_sahayak::web::run_server(config).await
}
