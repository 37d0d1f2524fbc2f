//! Main entry point for translate-relay

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use translate_relay::cli::commands::{self, Commands};

/// translate-relay - HTTP relay in front of a public translation provider
#[derive(Parser, Debug)]
#[command(name = "translate-relay", version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    let default_filter = if args.verbose {
        "translate_relay=debug,tower_http=debug".to_string()
    } else {
        "translate_relay=info,tower_http=info".to_string()
    };

    let filter = if args.verbose {
        tracing_subscriber::EnvFilter::new(default_filter)
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| default_filter.into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    match args.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        static_dir: None,
    }) {
        Commands::Serve {
            host,
            port,
            static_dir,
        } => {
            commands::handle_serve(host, port, static_dir).await?;
        }
        Commands::Languages => {
            commands::handle_languages().await?;
        }
        Commands::Translate {
            text,
            target_lang,
            source_lang,
        } => {
            commands::handle_translate(text, target_lang, source_lang).await?;
        }
    }

    Ok(())
}
