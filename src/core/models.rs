//! Core data models for translation

use serde::{Deserialize, Serialize};

/// Translation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    /// Source language code. `None` asks the provider to auto-detect.
    pub source_lang: Option<String>,
    pub target_lang: String,
}

impl TranslationRequest {
    pub fn new(text: String, target_lang: String) -> Self {
        Self {
            text,
            source_lang: None,
            target_lang,
        }
    }

    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = Some(source_lang.into());
        self
    }
}

/// Translation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    pub translated_text: String,
    pub detected_source_lang: Option<String>,
}
