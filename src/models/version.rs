use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::utils::error::ParseError;

/// Delimiter between version sections
pub const SECTION_DELIMITER: char = '.';

/// A dot-separated numeric version such as `2.13.4`
///
/// Sections are kept in the order they appeared in the source string. A
/// `Version` is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Version {
    sections: Vec<u64>,
}

impl Version {
    /// Create a version directly from its sections
    pub fn new(sections: Vec<u64>) -> Self {
        Self { sections }
    }

    /// The numeric sections, left to right
    pub fn sections(&self) -> &[u64] {
        &self.sections
    }

    pub fn num_sections(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section at `index`, if present
    pub fn section(&self, index: usize) -> Option<u64> {
        self.sections.get(index).copied()
    }

    /// Section-wise ordering: the first differing section decides, then the
    /// version with more sections is greater.
    pub fn compare_sections(&self, other: &Self) -> Ordering {
        let shared = min_sections(self, other);
        for i in 0..shared {
            match self.sections[i].cmp(&other.sections[i]) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
        self.num_sections().cmp(&other.num_sections())
    }
}

/// Number of sections both versions have
pub fn min_sections(v1: &Version, v2: &Version) -> usize {
    v1.num_sections().min(v2.num_sections())
}

/// Parse a version string into its numeric sections
///
/// Every section must consist solely of ASCII digits; signs, whitespace and
/// trailing garbage (`78pear`) are rejected. Empty input and empty sections
/// fail as well.
pub fn parse(input: &str) -> Result<Version, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let sections = input
        .split(SECTION_DELIMITER)
        .enumerate()
        .map(|(index, token)| parse_section(index, token))
        .collect::<Result<Vec<u64>, ParseError>>()?;

    Ok(Version::new(sections))
}

fn parse_section(index: usize, token: &str) -> Result<u64, ParseError> {
    if token.is_empty() {
        return Err(ParseError::EmptySection { index });
    }

    // u64::from_str alone would accept a leading '+'
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidSection {
            index,
            token: token.to_string(),
        });
    }

    token.parse::<u64>().map_err(|_| ParseError::Overflow {
        index,
        token: token.to_string(),
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", SECTION_DELIMITER)?;
            }
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value)
    }
}

impl From<Vec<u64>> for Version {
    fn from(sections: Vec<u64>) -> Self {
        Self::new(sections)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_sections(other)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }
}
