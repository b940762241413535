//! Translation Gateway - HTTP translation service library
//!
//! This library exposes a thin HTTP endpoint that delegates translation to an
//! external provider and returns the translated text as JSON.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;
pub mod server;

// Re-export key types for convenience
pub use self::core::{
    client::{HttpTranslator, Translate},
    config::TranslatorConfig,
    errors::TranslationError,
    models::{TranslationRequest, TranslationResult},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
