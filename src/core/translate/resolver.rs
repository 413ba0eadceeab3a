use colored::Colorize;

use super::Translate;

/// A literal the provider could not translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFailure {
    pub text: String,
    pub reason: String,
}

/// Best-effort translation on top of a fallible provider.
///
/// Each call is independent. A failure is reported on stderr, recorded, and
/// the original text is returned in place of the translation.
pub struct TranslationResolver<T> {
    provider: T,
    source_locale: String,
    dest_locale: String,
    failures: Vec<TranslationFailure>,
}

impl<T: Translate> TranslationResolver<T> {
    pub fn new(provider: T, source_locale: &str, dest_locale: &str) -> Self {
        Self {
            provider,
            source_locale: source_locale.to_string(),
            dest_locale: dest_locale.to_string(),
            failures: Vec::new(),
        }
    }

    pub fn provider(&self) -> &T {
        &self.provider
    }

    pub fn source_locale(&self) -> &str {
        &self.source_locale
    }

    pub fn dest_locale(&self) -> &str {
        &self.dest_locale
    }

    /// Translate `text`, falling back to `text` itself on failure.
    pub fn resolve(&mut self, text: &str) -> String {
        let result = self
            .provider
            .translate(text, &self.source_locale, &self.dest_locale)
            .and_then(|translated| {
                if translated.trim().is_empty() && !text.trim().is_empty() {
                    anyhow::bail!("empty translation")
                }
                Ok(translated)
            });

        match result {
            Ok(translated) => translated,
            Err(err) => {
                let reason = format!("{:#}", err);
                eprintln!(
                    "{} translation failed for '{}': {}",
                    "warning:".bold().yellow(),
                    text,
                    reason
                );
                self.failures.push(TranslationFailure {
                    text: text.to_string(),
                    reason,
                });
                text.to_string()
            }
        }
    }

    pub fn failures(&self) -> &[TranslationFailure] {
        &self.failures
    }
}
