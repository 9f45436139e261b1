//! Machine translation of catalog entries.
//!
//! Requests are issued strictly one after another, and the [`ThrottlePolicy`]
//! delay is applied after every request, including the last one.
//!
//! ## Module Structure
//!
//! - `openai`: chat-completions backend

pub mod openai;

use std::time::Duration;

use chrono::Utc;
use thiserror::Error;

use crate::core::{catalog::Catalog, error::L10nError, language::TargetLanguage};

pub use openai::OpenAiTranslator;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("request to translation service failed")]
    Http(#[from] reqwest::Error),

    #[error("translation service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("translation service returned an empty translation")]
    EmptyResponse,
}

/// A backend that turns one source string into `target_language`.
///
/// `target_language` is the human-readable name (e.g. "French").
#[allow(async_fn_in_trait)]
pub trait Translator {
    async fn translate(&self, text: &str, target_language: &str)
    -> Result<String, TranslateError>;
}

/// Pause applied after each translation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottlePolicy {
    pub delay: Duration,
}

impl ThrottlePolicy {
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(5);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    /// No pause at all.
    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    async fn pause(&self) {
        if self.delay.is_zero() {
            return;
        }
        tracing::info!(
            "Waiting {}s before next translation...",
            self.delay.as_secs_f32()
        );
        tokio::time::sleep(self.delay).await;
    }
}

impl Default for ThrottlePolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

/// Translate every entry of `template` into `language`, in order.
///
/// The first failed request aborts the language: nothing partial is returned.
pub async fn translate_catalog<T: Translator>(
    translator: &T,
    template: &Catalog,
    language: &TargetLanguage,
    policy: &ThrottlePolicy,
) -> Result<Catalog, L10nError> {
    let mut translations = Vec::with_capacity(template.len());

    for entry in &template.entries {
        let translated = translator
            .translate(&entry.source, language.name())
            .await
            .and_then(|raw| {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    Err(TranslateError::EmptyResponse)
                } else {
                    Ok(trimmed.to_string())
                }
            })
            .map_err(|source| L10nError::Translation {
                language: language.tag().to_string(),
                text: entry.source.clone(),
                source,
            })?;

        tracing::info!("Translated: {} -> {} [{}]", entry.source, translated, language);
        translations.push(translated);

        policy.pause().await;
    }

    template.localized(language, translations, Utc::now())
}
