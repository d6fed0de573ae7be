//! Locale context: current language, string lookup and text direction.
//!
//! DESIGN
//! ======
//! Two static string tables (English, Arabic) keyed by dotted message keys.
//! Lookups never fail: a key missing from the active table is returned as-is,
//! so untranslated UI strings degrade to their key rather than disappearing.
//!
//! The selected language is per client and lives in client storage under
//! `language`, mirroring the browser's localStorage entry. Clients that never
//! chose a language get the configured default.

mod strings;

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::state::AppState;
use crate::storage::LANGUAGE_KEY;

// =============================================================================
// LANGUAGE
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

/// Text direction applied to the document root for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

/// Public description of a selectable language.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub is_rtl: bool,
    pub direction: Direction,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    #[must_use]
    pub fn from_code(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    /// Name of the language written in that language.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "العربية",
        }
    }

    #[must_use]
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    #[must_use]
    pub fn direction(self) -> Direction {
        if self.is_rtl() { Direction::Rtl } else { Direction::Ltr }
    }

    #[must_use]
    pub fn info(self) -> LanguageInfo {
        LanguageInfo { code: self.code(), name: self.native_name(), is_rtl: self.is_rtl(), direction: self.direction() }
    }

    /// Choose between an English and an Arabic rendition of the same text.
    #[must_use]
    pub fn pick<'a>(self, en: &'a str, ar: &'a str) -> &'a str {
        match self {
            Self::En => en,
            Self::Ar => ar,
        }
    }
}

// =============================================================================
// LOOKUP
// =============================================================================

static EN_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| strings::EN.iter().copied().collect());

static AR_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| strings::AR.iter().copied().collect());

fn table_for(lang: Language) -> &'static HashMap<&'static str, &'static str> {
    match lang {
        Language::En => &EN_TABLE,
        Language::Ar => &AR_TABLE,
    }
}

/// Look up `key` in the table for `lang`, falling back to the key itself.
#[must_use]
pub fn translate(lang: Language, key: &str) -> &str {
    table_for(lang).get(key).copied().unwrap_or(key)
}

/// Full string table for `lang`, in declaration order.
#[must_use]
pub fn entries(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::En => strings::EN,
        Language::Ar => strings::AR,
    }
}

// =============================================================================
// PER-CLIENT SELECTION
// =============================================================================

/// Resolve the language a client has selected, or the configured default.
pub async fn current_language(state: &AppState, client_id: Option<&str>) -> Language {
    let Some(client_id) = client_id else {
        return state.config.default_language;
    };
    state
        .storage
        .get_item(client_id, LANGUAGE_KEY)
        .await
        .and_then(|code| Language::from_code(&code))
        .unwrap_or(state.config.default_language)
}

/// Persist a client's language choice.
pub async fn set_language(state: &AppState, client_id: &str, lang: Language) {
    state
        .storage
        .set_item(client_id, LANGUAGE_KEY, lang.code().to_owned())
        .await;
    tracing::debug!(client_id, language = lang.code(), "language selected");
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
