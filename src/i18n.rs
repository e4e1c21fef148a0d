//! Localized user-facing messages.
//!
//! The service answers in one of a fixed set of locales. A request picks its
//! locale through the `Accept-Language` header; anything unsupported (or a
//! missing header) falls back to the default locale chosen at startup.
//!
//! # Example
//!
//! ```
//! use user_service::i18n::{Translations, parse_accept_language};
//!
//! let translations = Translations::new("ru");
//!
//! let code = parse_accept_language("en-US,fr;q=0.9");
//! assert_eq!(translations.get(&code).invalid_id, "invalid id");
//!
//! // Unknown codes resolve to the fallback locale.
//! assert_eq!(translations.get("de").invalid_id, "неверный id");
//! ```

use std::fmt;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::{HeaderMap, header::ACCEPT_LANGUAGE, request::Parts};

use crate::state::AppState;

/// Supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ru,
    Kk,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ru, Locale::Kk];

    /// Matches a locale code case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::Kk => "kk",
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Self::En => &EN,
            Self::Ru => &RU,
            Self::Kk => &KK,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Keys of the message bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    Unauthorized,
    InvalidId,
    InvalidName,
}

/// One locale's worth of user-facing strings.
#[derive(Debug, PartialEq, Eq)]
pub struct Messages {
    pub unauthorized: &'static str,
    pub invalid_id: &'static str,
    pub invalid_name: &'static str,
}

impl Messages {
    pub fn get(&self, key: MessageKey) -> &'static str {
        match key {
            MessageKey::Unauthorized => self.unauthorized,
            MessageKey::InvalidId => self.invalid_id,
            MessageKey::InvalidName => self.invalid_name,
        }
    }
}

static EN: Messages = Messages {
    unauthorized: "unauthorized",
    invalid_id: "invalid id",
    invalid_name: "invalid name",
};

static RU: Messages = Messages {
    unauthorized: "неавторизован",
    invalid_id: "неверный id",
    invalid_name: "неверное имя",
};

static KK: Messages = Messages {
    unauthorized: "авторизацияланбаған",
    invalid_id: "жарамсыз id",
    invalid_name: "жарамсыз аты",
};

/// Locale lookup table with a fixed fallback.
///
/// Built once at startup from `DEFAULT_LANGUAGE` and shared read-only by all
/// requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translations {
    fallback: Locale,
}

impl Translations {
    /// Creates the table with `default_language` as fallback.
    ///
    /// Unsupported values silently select English.
    pub fn new(default_language: &str) -> Self {
        Self {
            fallback: Locale::from_code(default_language).unwrap_or_default(),
        }
    }

    pub fn fallback(&self) -> Locale {
        self.fallback
    }

    /// Resolves a locale code, falling back on a miss or an empty code.
    pub fn locale(&self, code: &str) -> Locale {
        Locale::from_code(code).unwrap_or(self.fallback)
    }

    /// Returns the bundle for `code`. Never fails.
    pub fn get(&self, code: &str) -> &'static Messages {
        self.locale(code).messages()
    }

    /// Returns the bundle selected by the request's `Accept-Language` header.
    pub fn for_headers(&self, headers: &HeaderMap) -> &'static Messages {
        let header = headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        self.get(&parse_accept_language(header))
    }
}

/// Extracts the primary language tag from an `Accept-Language` value.
///
/// Only the first entry is considered; quality parameters and region subtags
/// are dropped. An empty header gives an empty string.
///
/// ```
/// use user_service::i18n::parse_accept_language;
///
/// assert_eq!(parse_accept_language("en-US,fr;q=0.9"), "en");
/// assert_eq!(parse_accept_language(" RU;q=0.8 "), "ru");
/// assert_eq!(parse_accept_language(""), "");
/// ```
pub fn parse_accept_language(header: &str) -> String {
    let first = header.split(',').next().unwrap_or_default().trim();
    let without_quality = first.split(';').next().unwrap_or_default();
    let primary = without_quality.split('-').next().unwrap_or_default();

    primary.to_lowercase()
}

/// Message bundle for the current request, resolved from `Accept-Language`.
///
/// ```rust,ignore
/// async fn handler(Localized(msg): Localized) -> String {
///     msg.unauthorized.to_string()
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Localized(pub &'static Messages);

impl<S> FromRequestParts<S> for Localized
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        Ok(Self(state.translations.for_headers(&parts.headers)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_every_bundle_is_complete() {
        let keys = [
            MessageKey::Unauthorized,
            MessageKey::InvalidId,
            MessageKey::InvalidName,
        ];

        for locale in Locale::ALL {
            for key in keys {
                let text = locale.messages().get(key);
                assert!(!text.is_empty(), "{locale} is missing {key:?}");
                assert_eq!(text, locale.messages().get(key));
            }
        }
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let translations = Translations::new("en");

        assert_eq!(translations.get("RU"), &RU);
        assert_eq!(translations.get("Kk"), &KK);
    }

    #[test]
    fn test_get_unknown_returns_fallback() {
        let translations = Translations::new("kk");

        assert_eq!(translations.get("de"), &KK);
        assert_eq!(translations.get(""), &KK);
        assert_eq!(translations.get("en-us"), &KK);
    }

    #[test]
    fn test_unsupported_default_forces_english() {
        assert_eq!(Translations::new("fr").fallback(), Locale::En);
        assert_eq!(Translations::new("").fallback(), Locale::En);
        assert_eq!(Translations::new("RU").fallback(), Locale::Ru);
    }

    #[test]
    fn test_parse_accept_language() {
        assert_eq!(parse_accept_language("en-US,fr;q=0.9"), "en");
        assert_eq!(parse_accept_language("ru"), "ru");
        assert_eq!(parse_accept_language("kk-KZ;q=1.0, en"), "kk");
        assert_eq!(parse_accept_language("  EN-GB  "), "en");
        assert_eq!(parse_accept_language("*"), "*");
        assert_eq!(parse_accept_language(""), "");
        assert_eq!(parse_accept_language(",en"), "");
    }

    #[test]
    fn test_parse_accept_language_is_idempotent() {
        let once = parse_accept_language("ru-RU;q=0.8,en");
        assert_eq!(parse_accept_language(&once), once);
    }

    #[test]
    fn test_for_headers() {
        let translations = Translations::new("en");

        let mut headers = HeaderMap::new();
        assert_eq!(translations.for_headers(&headers), &EN);

        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("ru-RU,en;q=0.5"));
        assert_eq!(translations.for_headers(&headers), &RU);

        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("de-DE"));
        assert_eq!(translations.for_headers(&headers), &EN);
    }
}
