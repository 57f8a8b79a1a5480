//! Rewrites land-registry commune labels into the catalog's spelling.
//!
//! The registry records every arrondissement of a multi-district city as its
//! own numbered commune (`PARIS 01`, `LYON 3EME`, `MARSEILLE 13`), while the
//! reference catalog names them `Paris 1er`, `Lyon 3e`, `Marseille 13e`.
//! Everything else only needs its casing fixed.

use once_cell::sync::Lazy;
use regex::Regex;

/// Cities whose arrondissements appear as numbered registry entries.
pub const DEFAULT_DISTRICT_CITIES: [&str; 3] = ["PARIS", "MARSEILLE", "LYON"];

static DEFAULT_RULES: Lazy<DistrictRules> = Lazy::new(|| {
    DistrictRules::new(DEFAULT_DISTRICT_CITIES).expect("default district pattern is valid")
});

/// District detection table: a closed set of city names followed by a
/// one- or two-digit district number and an optional non-digit suffix.
#[derive(Debug, Clone)]
pub struct DistrictRules {
    cities: Vec<String>,
    pattern: Option<Regex>,
}

impl DistrictRules {
    pub fn new<I, S>(cities: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cities: Vec<String> = cities
            .into_iter()
            .map(|city| city.as_ref().trim().to_uppercase())
            .filter(|city| !city.is_empty())
            .collect();

        let pattern = if cities.is_empty() {
            None
        } else {
            let alternation = cities
                .iter()
                .map(|city| regex::escape(city))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!(
                r"^({alternation})\s*0?([0-9]{{1,2}})[^0-9]*$"
            ))?)
        };

        Ok(Self { cities, pattern })
    }

    /// Upper-cased city names this table recognizes.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn harmonize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        let upper = trimmed.to_uppercase();

        if let Some(captures) = self.pattern.as_ref().and_then(|p| p.captures(&upper)) {
            if let Ok(district) = captures[2].parse::<u32>() {
                return format!("{} {}", capitalize(&captures[1]), ordinal(district));
            }
        }

        title_case(trimmed)
    }
}

impl Default for DistrictRules {
    fn default() -> Self {
        DEFAULT_RULES.clone()
    }
}

/// Harmonize with the built-in Paris / Marseille / Lyon table.
pub fn harmonize(raw: &str) -> String {
    DEFAULT_RULES.harmonize(raw)
}

/// French ordinal: `1er`, then `2e`, `3e`, ...
pub fn ordinal(n: u32) -> String {
    if n == 1 {
        "1er".to_string()
    } else {
        format!("{n}e")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Upper-cases every letter that follows a non-letter, lower-cases the rest.
pub fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut word_start = true;

    for c in input.chars() {
        if c.is_alphabetic() {
            if word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            result.push(c);
            word_start = true;
        }
    }

    result
}
