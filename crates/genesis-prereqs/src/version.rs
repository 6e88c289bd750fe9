//! Dotted tool version parsing and comparison.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A tool version as a `(major, minor, patch, release)` tuple.
///
/// Ordering is lexicographic, most significant component first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub release: u64,
}

/// The string was not one of `N`, `N.N`, `N.N.N` or `N.N.N.N`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{input}' does not look like a valid version string")]
pub struct ParseError {
    pub input: String,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64, release: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            release,
        }
    }

    /// True when `self` is the same as or newer than `minimum`.
    pub fn at_least(&self, minimum: &Version) -> bool {
        self >= minimum
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.release != 0 {
            write!(f, ".{}", self.release)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError {
            input: s.to_string(),
        };

        let mut parts = [0u64; 4];
        let mut count = 0;
        for component in s.split('.') {
            if count == parts.len()
                || component.is_empty()
                || !component.bytes().all(|b| b.is_ascii_digit())
            {
                return Err(invalid());
            }
            parts[count] = component.parse().map_err(|_| invalid())?;
            count += 1;
        }

        let [major, minor, patch, release] = parts;
        Ok(Self::new(major, minor, patch, release))
    }
}

/// Parse a dotted version string, zero-filling missing components.
pub fn parse_version(s: &str) -> Result<Version, ParseError> {
    s.parse()
}

/// Compare two version strings: is `candidate` at least `minimum`?
pub fn at_least(candidate: &str, minimum: &str) -> Result<bool, ParseError> {
    let candidate = parse_version(candidate)?;
    let minimum = parse_version(minimum)?;
    Ok(candidate.at_least(&minimum))
}
