//! Supported content languages, source-language detection and localized lookup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Cyrillic block; any code point in here marks the text as Russian
const CYRILLIC: std::ops::RangeInclusive<char> = '\u{0400}'..='\u{04FF}';

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ru,
}

impl Language {
    pub const DEFAULT: Language = Language::En;

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// The language a comment in `self` gets translated into
    pub fn counterpart(&self) -> Language {
        match self {
            Language::En => Language::Ru,
            Language::Ru => Language::En,
        }
    }

    /// Classify text as Russian if it contains any Cyrillic character, English otherwise.
    ///
    /// This is a script check, not a language model: short or mixed text and
    /// every non-Cyrillic script end up as English.
    pub fn detect(text: &str) -> Language {
        if text.chars().any(|c| CYRILLIC.contains(&c)) {
            Language::Ru
        } else {
            Language::En
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            other => Err(format!("Unsupported language '{}'", other)),
        }
    }
}

/// Pick the display text for `lang`: exact non-empty match, then the default
/// language, then an empty string.
pub fn localize(content: &BTreeMap<Language, String>, lang: Language) -> String {
    if let Some(text) = content.get(&lang).filter(|t| !t.is_empty()) {
        return text.clone();
    }

    content.get(&Language::DEFAULT).cloned().unwrap_or_default()
}

/// Resolve the request language from the `lang` query value and the
/// `Accept-Language` header.
///
/// An explicit but unsupported `lang` value falls back to the default rather
/// than to the header.
pub fn resolve(query_lang: Option<&str>, accept_language: Option<&str>) -> Language {
    match query_lang.filter(|l| !l.is_empty()) {
        Some(code) => code.parse().unwrap_or(Language::DEFAULT),
        None => match accept_language {
            Some(header) if header.to_lowercase().contains("ru") => Language::Ru,
            _ => Language::DEFAULT,
        },
    }
}
