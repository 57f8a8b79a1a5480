use serde::Serialize;
use std::fmt;
use unidecode::unidecode;

/// Canonical comparison form of a municipality label.
///
/// Transliterates to ASCII, turns hyphens, apostrophes and any other
/// punctuation into separators, collapses whitespace and lower-cases.
/// The result only contains `[a-z0-9 ]`, so applying it twice is a no-op.
pub fn normalize_name(input: &str) -> String {
    unidecode(input) // Convert Unicode to ASCII
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Join key shared by the catalog, the rent tables and the land registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CityKey(String);

impl CityKey {
    pub fn new(raw: &str) -> Self {
        Self(normalize_name(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty keys come from blank labels and are never indexed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CityKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
