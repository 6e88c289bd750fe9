//! Minimum-version checks for the external tools Genesis shells out to.

use std::collections::HashMap;
use std::fmt;
use std::sync::{LazyLock, Mutex, PoisonError};

use genesis_util::errors::{GenesisError, GenesisResult};
use regex::Regex;

use crate::probe::{ProbeError, Tool, ToolProbe, REQUIRED_TOOLS};
use crate::version::{parse_version, ParseError, Version};

/// Why a single tool failed its prerequisite check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrereqFailure {
    /// The version command could not be executed at all.
    Missing { tool: Tool, error: ProbeError },

    /// The tool ran, but its output was not a recognizable version.
    Corrupt {
        tool: Tool,
        output: String,
        error: Option<ParseError>,
    },

    /// The tool is older than the supported minimum.
    TooOld {
        tool: Tool,
        found: String,
        minimum: String,
    },
}

impl PrereqFailure {
    pub fn tool(&self) -> &Tool {
        match self {
            Self::Missing { tool, .. } | Self::Corrupt { tool, .. } | Self::TooOld { tool, .. } => {
                tool
            }
        }
    }

    /// The one-line summary shown in red.
    pub fn headline(&self) -> String {
        match self {
            Self::Missing { tool, .. } => {
                format!("Missing `{}' - install {} {}", tool.name, tool.title, tool.source)
            }
            Self::Corrupt { tool, .. } => format!(
                "Your `{}' binary seems to be corrupt; running `{}' resulted in",
                tool.name,
                tool.probe_command()
            ),
            Self::TooOld {
                tool,
                found,
                minimum,
            } => format!(
                "{} v{found} is installed, but Genesis requires at least v{minimum}",
                tool.title
            ),
        }
    }

    /// Follow-up lines telling the operator what to do.
    pub fn details(&self) -> Vec<String> {
        match self {
            Self::Missing { tool, error } => {
                vec![format!("(`{}` said: {error})", tool.probe_command())]
            }
            Self::Corrupt {
                tool,
                output,
                error,
            } => {
                let said = match error {
                    Some(e) => format!("'{output}' ({e})"),
                    None => format!("'{output}'"),
                };
                vec![said, format!("Please re-install {} {}", tool.title, tool.source)]
            }
            Self::TooOld { tool, .. } => {
                vec![format!("Please upgrade your {} {}", tool.title, tool.source)]
            }
        }
    }
}

impl fmt::Display for PrereqFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.headline())?;
        for line in self.details() {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

/// Compiled version patterns, keyed by pattern text.
static PATTERNS: LazyLock<Mutex<HashMap<&'static str, Regex>>> = LazyLock::new(Default::default);

fn version_pattern(tool: &Tool) -> Option<Regex> {
    let mut patterns = PATTERNS.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(re) = patterns.get(tool.pattern) {
        return Some(re.clone());
    }
    match Regex::new(tool.pattern) {
        Ok(re) => {
            patterns.insert(tool.pattern, re.clone());
            Some(re)
        }
        Err(e) => {
            tracing::warn!("version pattern for `{}' does not compile: {e}", tool.name);
            None
        }
    }
}

/// Pull the raw version string out of a tool's version output.
///
/// A pattern that does not compile matches nothing.
pub fn extract_version<'a>(tool: &Tool, output: &'a str) -> Option<&'a str> {
    version_pattern(tool)?
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Probe one tool and decide whether it is present, sane and new enough.
pub fn check_prerequisite(tool: &Tool, probe: &dyn ToolProbe) -> Result<Version, PrereqFailure> {
    let output = probe.probe(tool).map_err(|error| PrereqFailure::Missing {
        tool: *tool,
        error,
    })?;

    let corrupt = |error: Option<ParseError>| PrereqFailure::Corrupt {
        tool: *tool,
        output: output.clone(),
        error,
    };

    let raw = extract_version(tool, &output).ok_or_else(|| corrupt(None))?;
    let found = parse_version(raw).map_err(|e| corrupt(Some(e)))?;
    let minimum = parse_version(tool.minimum).map_err(|e| corrupt(Some(e)))?;

    if !found.at_least(&minimum) {
        return Err(PrereqFailure::TooOld {
            tool: *tool,
            found: raw.to_string(),
            minimum: tool.minimum.to_string(),
        });
    }

    tracing::debug!(
        "{} v{raw} satisfies the minimum of v{}",
        tool.name,
        tool.minimum
    );
    Ok(found)
}

/// Check every tool in `tools`, collecting all failures.
pub fn run_checks(tools: &[Tool], probe: &dyn ToolProbe) -> Vec<PrereqFailure> {
    tools
        .iter()
        .filter_map(|tool| check_prerequisite(tool, probe).err())
        .inspect(|failure| tracing::debug!("prerequisite check failed for {}", failure.tool().name))
        .collect()
}

/// Check spruce, safe and git, failing with every diagnostic at once.
pub fn run_all_prerequisite_checks(probe: &dyn ToolProbe) -> GenesisResult<()> {
    let failures = run_checks(&REQUIRED_TOOLS, probe);
    if failures.is_empty() {
        return Ok(());
    }
    Err(GenesisError::Prerequisites {
        diagnostics: failures.iter().map(ToString::to_string).collect(),
    })
}
