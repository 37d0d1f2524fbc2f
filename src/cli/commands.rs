//! CLI command definitions and handlers

use clap::Subcommand;
use std::path::PathBuf;
use tracing::info;

use crate::core::client::TranslationClient;
use crate::core::config::ServerConfig;
use crate::core::models::AUTO_DETECT;

/// Commands for translate-relay
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP API server (default)
    Serve {
        /// Bind address (default: HOST or 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (default: PORT or 5000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory served under /static (default: STATIC_DIR or ./static)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Print the supported languages
    Languages,

    /// Translate a single text and print the result
    Translate {
        /// Text to translate
        text: String,

        /// Target language code or name
        #[arg(short, long)]
        target_lang: String,

        /// Source language (auto-detect if not specified)
        #[arg(long, default_value = AUTO_DETECT)]
        source_lang: String,
    },
}

/// Handle server command
pub async fn handle_serve(
    host: Option<String>,
    port: Option<u16>,
    static_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    use crate::server::api::run_server;

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(static_dir) = static_dir {
        config.static_dir = static_dir;
    }

    let client = TranslationClient::from_env()?;

    info!("Starting HTTP server on {}:{}", config.host, config.port);
    println!("🚀 Server starting on http://{}:{}", config.host, config.port);

    run_server(config, client).await?;

    Ok(())
}

/// Handle languages command
pub async fn handle_languages() -> anyhow::Result<()> {
    let client = TranslationClient::from_env()?;
    let languages = client.list_languages().await?;

    for language in &languages {
        println!("{:<10} {}", language.code, language.name);
    }

    Ok(())
}

/// Handle one-shot translation command
pub async fn handle_translate(
    text: String,
    target_lang: String,
    source_lang: String,
) -> anyhow::Result<()> {
    let client = TranslationClient::from_env()?;

    info!("Translating from {} to {}", source_lang, target_lang);
    let translated = client.translate(&text, &source_lang, &target_lang).await?;
    println!("{}", translated);

    Ok(())
}
