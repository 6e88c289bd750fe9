//! Kit references of the form `NAME[/VERSION]`.

use std::fmt;
use std::str::FromStr;

use genesis_prereqs::version::Version;
use genesis_util::errors::GenesisError;

/// A Genesis kit, optionally pinned to a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitRef {
    pub name: String,
    pub version: Option<Version>,
    raw_version: Option<String>,
}

impl KitRef {
    /// True when `s` names a kit archive on disk rather than a kit reference.
    pub fn is_archive_path(s: &str) -> bool {
        s.ends_with(".tar.gz") || s.ends_with(".tgz")
    }
}

impl FromStr for KitRef {
    type Err = GenesisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, version) = match s.split_once('/') {
            Some((name, version)) => (name, Some(version).filter(|v| !v.is_empty())),
            None => (s, None),
        };

        if name.is_empty() {
            return Err(GenesisError::usage(format!(
                "'{s}' does not name a kit; expected NAME or NAME/VERSION"
            )));
        }

        let parsed = version
            .map(|v| {
                v.parse::<Version>()
                    .map_err(|e| GenesisError::usage(format!("invalid kit version in '{s}': {e}")))
            })
            .transpose()?;

        Ok(Self {
            name: name.to_string(),
            version: parsed,
            raw_version: version.map(str::to_string),
        })
    }
}

impl fmt::Display for KitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw_version {
            Some(version) => write!(f, "{}/{version}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
