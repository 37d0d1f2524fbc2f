//! translate-relay - HTTP relay in front of a public translation provider
//!
//! This library exposes the translation client, the provider seam it talks
//! through, and the axum router serving `/api/translate` and `/api/languages`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod server;

// Re-export key types for convenience
pub use core::{
    client::TranslationClient,
    config::{ServerConfig, TranslatorConfig},
    errors::TranslationError,
    google::GoogleTranslateProvider,
    models::{LanguageEntry, TranslationRequest, TranslationResponse},
    provider::TranslationProvider,
};

pub use server::api::{build_router, run_server};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
