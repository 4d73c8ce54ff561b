use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Result, TaxError};
use crate::modules::customers::Address;

/// One entry of a literal postal code list
#[derive(Debug, Clone, PartialEq, Eq)]
enum PostalCodeEntry {
    Code(String),
    /// Inclusive numeric range, written `low:high`
    Range(u64, u64),
}

#[derive(Debug, Clone)]
enum PostalCodeRule {
    Regex(Regex),
    List(Vec<PostalCodeEntry>),
}

/// A postal code filter: either `/regex/flags` or a comma separated list of
/// codes and `low:high` ranges, e.g. `"6691, 6991:6993"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostalCodePattern {
    source: String,
    rule: PostalCodeRule,
}

impl PostalCodePattern {
    pub fn parse(source: &str) -> Result<Self> {
        let trimmed = source.trim();
        let rule = if trimmed.starts_with('/') {
            PostalCodeRule::Regex(Self::compile_regex(trimmed)?)
        } else {
            PostalCodeRule::List(Self::build_list(trimmed))
        };

        Ok(Self {
            source: trimmed.to_string(),
            rule,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether the postal code satisfies this pattern
    pub fn matches(&self, postal_code: &str) -> bool {
        let postal_code = postal_code.trim();
        match &self.rule {
            PostalCodeRule::Regex(regex) => regex.is_match(postal_code),
            PostalCodeRule::List(entries) => entries.iter().any(|entry| match entry {
                PostalCodeEntry::Code(code) => code.eq_ignore_ascii_case(postal_code),
                PostalCodeEntry::Range(low, high) => {
                    if postal_code.is_empty() || !postal_code.bytes().all(|b| b.is_ascii_digit()) {
                        return false;
                    }
                    postal_code
                        .parse::<u64>()
                        .map(|value| value >= *low && value <= *high)
                        .unwrap_or(false)
                }
            }),
        }
    }

    fn compile_regex(source: &str) -> Result<Regex> {
        let closing = source.rfind('/').filter(|&idx| idx > 0).ok_or_else(|| {
            TaxError::configuration(format!("Unterminated postal code regex '{}'", source))
        })?;
        let body = &source[1..closing];
        let flags = &source[closing + 1..];

        let mut builder = RegexBuilder::new(body);
        for flag in flags.chars() {
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                'x' => {
                    builder.ignore_whitespace(true);
                }
                'u' => {}
                other => {
                    return Err(TaxError::configuration(format!(
                        "Unsupported regex flag '{}' in postal code pattern '{}'",
                        other, source
                    )))
                }
            }
        }

        builder.build().map_err(|e| {
            TaxError::configuration(format!("Invalid postal code regex '{}': {}", source, e))
        })
    }

    fn build_list(source: &str) -> Vec<PostalCodeEntry> {
        source
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .filter_map(|entry| match entry.split_once(':') {
                Some((low, high)) => {
                    let low = low.trim().parse::<u64>().ok()?;
                    let high = high.trim().parse::<u64>().ok()?;
                    Some(PostalCodeEntry::Range(low.min(high), low.max(high)))
                }
                None => Some(PostalCodeEntry::Code(entry.to_string())),
            })
            .collect()
    }
}

impl PartialEq for PostalCodePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for PostalCodePattern {}

impl fmt::Display for PostalCodePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl TryFrom<String> for PostalCodePattern {
    type Error = TaxError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<PostalCodePattern> for String {
    fn from(pattern: PostalCodePattern) -> Self {
        pattern.source
    }
}

/// A geographic matching rule: country, optional area, optional postal filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub country_code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrative_area: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included_postal_codes: Option<PostalCodePattern>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_postal_codes: Option<PostalCodePattern>,
}

impl Territory {
    pub fn country(country_code: &str) -> Self {
        Self {
            country_code: country_code.trim().to_uppercase(),
            administrative_area: None,
            included_postal_codes: None,
            excluded_postal_codes: None,
        }
    }

    pub fn with_administrative_area(mut self, area: &str) -> Self {
        self.administrative_area = Some(area.trim().to_string());
        self
    }

    pub fn including(mut self, pattern: &str) -> Result<Self> {
        self.included_postal_codes = Some(PostalCodePattern::parse(pattern)?);
        Ok(self)
    }

    pub fn excluding(mut self, pattern: &str) -> Result<Self> {
        self.excluded_postal_codes = Some(PostalCodePattern::parse(pattern)?);
        Ok(self)
    }

    /// Whether the address falls inside this territory
    pub fn matches(&self, address: &Address) -> bool {
        if !self
            .country_code
            .eq_ignore_ascii_case(address.country_code.trim())
        {
            return false;
        }

        if let Some(area) = &self.administrative_area {
            let matches_area = address
                .administrative_area
                .as_deref()
                .map(|candidate| area.eq_ignore_ascii_case(candidate.trim()))
                .unwrap_or(false);
            if !matches_area {
                return false;
            }
        }

        let postal_code = address.postal_code_or_empty();
        if let Some(included) = &self.included_postal_codes {
            if !included.matches(postal_code) {
                return false;
            }
        }
        if let Some(excluded) = &self.excluded_postal_codes {
            if excluded.matches(postal_code) {
                return false;
            }
        }

        true
    }
}
