//! Server configuration parsed from environment variables.

use std::str::FromStr;

use crate::i18n::Language;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LATENCY_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Base artificial delay applied to every store call.
    pub latency_ms: u64,
    /// Language for clients that never picked one.
    pub default_language: Language,
    /// Mark the client cookie `Secure`.
    pub cookie_secure: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            latency_ms: DEFAULT_LATENCY_MS,
            default_language: Language::En,
            cookie_secure: false,
        }
    }
}

impl AppConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SOUQ_LATENCY_MS`: default 500
    /// - `SOUQ_DEFAULT_LANGUAGE`: `en` (default) or `ar`
    /// - `COOKIE_SECURE`: boolean, default false
    ///
    /// Unparseable values are logged and replaced by their default.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let default_language = match std::env::var("SOUQ_DEFAULT_LANGUAGE") {
            Ok(raw) => Language::from_code(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "unknown SOUQ_DEFAULT_LANGUAGE, using default");
                defaults.default_language
            }),
            Err(_) => defaults.default_language,
        };

        Self {
            port: env_parse("PORT", defaults.port),
            latency_ms: env_parse("SOUQ_LATENCY_MS", defaults.latency_ms),
            default_language,
            cookie_secure: env_bool("COOKIE_SECURE").unwrap_or(defaults.cookie_secure),
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    raw.trim().parse::<T>().unwrap_or_else(|_| {
        tracing::warn!(key, value = %raw, "invalid value, using default");
        default
    })
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
