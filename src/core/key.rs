//! Translation key derivation.
//!
//! A key is `{namespace}.{identifier}` where the identifier is a camelCase
//! rendering of the literal's words. Derivation is a pure function of
//! `(text, namespace)`.

use std::fmt;

use crate::utils::capitalize;

/// Identifier used when a literal has no letters or digits left after normalization.
pub const UNKNOWN_IDENTIFIER: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TranslationKey {
    namespace: String,
    identifier: String,
}

impl TranslationKey {
    /// Derive the key for `text` under `namespace`.
    ///
    /// ```
    /// use locswap::core::TranslationKey;
    ///
    /// let key = TranslationKey::derive("Save Settings", "dashboard");
    /// assert_eq!(key.to_string(), "dashboard.saveSettings");
    /// ```
    pub fn derive(text: &str, namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            identifier: derive_identifier(text),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Rightmost (unqualified) portion of the key.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.identifier)
    }
}

/// Unqualified portion of a dotted key string (`"a.b.c"` → `"c"`).
pub fn unqualified(key: &str) -> &str {
    key.rsplit('.').next().unwrap_or(key)
}

/// camelCase identifier built from the letters, digits and whitespace of `text`.
///
/// Words after the first are capitalized; a word starting with a digit is
/// joined with `_` instead, so `"step 2 of 3"` and `"step2 of3"` stay distinct.
pub fn derive_identifier(text: &str) -> String {
    let normalized: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    let mut words = normalized.split_whitespace();
    let Some(first) = words.next() else {
        return UNKNOWN_IDENTIFIER.to_string();
    };

    let mut identifier = first.to_string();
    for word in words {
        if word.starts_with(char::is_numeric) {
            identifier.push('_');
            identifier.push_str(word);
        } else {
            identifier.push_str(&capitalize(word));
        }
    }
    identifier
}
