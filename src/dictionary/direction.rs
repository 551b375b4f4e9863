//! Translation direction between the page language and English.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Which side of each phrase pair is matched and which is substituted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Ukrainian page text to English.
    #[default]
    ToTarget,
    /// English text back to Ukrainian.
    ToSource,
}

impl Direction {
    /// Pick the display direction for a user locale tag such as `uk-UA` or `en-US`.
    ///
    /// Ukrainian-speaking users see the page language; everyone else gets English.
    #[must_use]
    pub fn for_locale(locale: &str) -> Self {
        if locale.trim().to_lowercase().starts_with("uk") {
            Self::ToSource
        } else {
            Self::ToTarget
        }
    }

    /// Short code of the language the output is rendered in.
    #[must_use]
    pub fn output_language(self) -> &'static str {
        match self {
            Self::ToTarget => "en",
            Self::ToSource => "ua",
        }
    }

    /// The opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::ToTarget => Self::ToSource,
            Self::ToSource => Self::ToTarget,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.output_language())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "to-target" | "totarget" => Ok(Self::ToTarget),
            "ua" | "uk" | "to-source" | "tosource" => Ok(Self::ToSource),
            other => Err(Error::Config(format!("unknown translation direction: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ukrainian_locales_keep_page_language() {
        assert_eq!(Direction::for_locale("uk"), Direction::ToSource);
        assert_eq!(Direction::for_locale("uk-UA"), Direction::ToSource);
        assert_eq!(Direction::for_locale("UK"), Direction::ToSource);
    }

    #[test]
    fn other_locales_get_english() {
        assert_eq!(Direction::for_locale("en-US"), Direction::ToTarget);
        assert_eq!(Direction::for_locale("de"), Direction::ToTarget);
        assert_eq!(Direction::for_locale(""), Direction::ToTarget);
    }

    #[test]
    fn parses_language_codes() {
        assert_eq!("en".parse::<Direction>().ok(), Some(Direction::ToTarget));
        assert_eq!("ua".parse::<Direction>().ok(), Some(Direction::ToSource));
        assert!("fr".parse::<Direction>().is_err());
    }

    #[test]
    fn reversed_flips() {
        assert_eq!(Direction::ToTarget.reversed(), Direction::ToSource);
        assert_eq!(Direction::ToSource.reversed().to_string(), "en");
    }
}
