//! Language Value Object
//!
//! The language code used to render user-facing messages.

use std::fmt;
use std::str::FromStr;

/// Supported message languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    Zh,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Zh, Lang::En];

    /// Language code as stored in configuration
    pub fn code(self) -> &'static str {
        match self {
            Lang::Zh => "zh",
            Lang::En => "en",
        }
    }

    /// Parse a code, falling back to English for anything unknown
    ///
    /// Message catalogs always carry English text, so it is the safe default
    /// when rendering for a code nothing else understands.
    pub fn from_code_or_en(code: &str) -> Self {
        code.parse().unwrap_or(Lang::En)
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error for an unsupported language code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language '{0}' (expected one of: zh, en)")]
pub struct UnknownLang(pub String);

impl FromStr for Lang {
    type Err = UnknownLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "zh_cn" => Ok(Lang::Zh),
            "en" | "en-us" | "en_us" => Ok(Lang::En),
            other => Err(UnknownLang(other.to_string())),
        }
    }
}
