//! External tools Genesis depends on, and how to ask them for their version.

use genesis_util::process::ToolCommand;
use thiserror::Error;

/// An external tool with a minimum supported version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    /// Executable name, also used in diagnostics: `spruce`.
    pub name: &'static str,
    /// Display name: `Spruce`.
    pub title: &'static str,
    /// Arguments that make the tool print its version.
    pub version_args: &'static [&'static str],
    /// Whether the version is printed on standard error.
    pub merge_stderr: bool,
    /// Pattern whose first capture group is the raw version string.
    pub pattern: &'static str,
    /// Oldest acceptable version.
    pub minimum: &'static str,
    /// Where to get it, e.g. `from https://...`.
    pub source: &'static str,
}

impl Tool {
    /// The probe command line as shown in diagnostics: `spruce -v`.
    pub fn probe_command(&self) -> String {
        self.command().command_line()
    }

    fn command(&self) -> ToolCommand {
        ToolCommand::new(self.name)
            .args(self.version_args.iter().copied())
            .merge_stderr(self.merge_stderr)
    }
}

pub const SPRUCE: Tool = Tool {
    name: "spruce",
    title: "Spruce",
    version_args: &["-v"],
    merge_stderr: false,
    pattern: r"(?i)version\s+(\S+)",
    minimum: "1.8.9",
    source: "from https://github.com/geofffranks/spruce/releases",
};

pub const SAFE: Tool = Tool {
    name: "safe",
    title: "Safe",
    version_args: &["-v"],
    merge_stderr: true,
    pattern: r"(?i)^safe\s+v(\S+)",
    minimum: "0.0.29",
    source: "from https://github.com/starkandwayne/safe/releases",
};

pub const GIT: Tool = Tool {
    name: "git",
    title: "Git",
    version_args: &["--version"],
    merge_stderr: false,
    pattern: r"(?i)version\s+(\S+)",
    minimum: "1.8.0",
    source: "via your platform package manager",
};

/// Every tool checked before Genesis does real work, in reporting order.
pub const REQUIRED_TOOLS: [Tool; 3] = [SPRUCE, SAFE, GIT];

/// The version command could not be run to completion.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProbeError {
    #[error("{reason}")]
    Spawn { reason: String },

    #[error("exited with {status}")]
    Status { status: String },
}

/// Runs a tool's version command and returns what it printed.
pub trait ToolProbe {
    fn probe(&self, tool: &Tool) -> Result<String, ProbeError>;
}

/// Probes the real binaries found on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl ToolProbe for SystemProbe {
    fn probe(&self, tool: &Tool) -> Result<String, ProbeError> {
        let captured = tool.command().capture().map_err(|e| ProbeError::Spawn {
            reason: e.to_string(),
        })?;

        if !captured.success() {
            return Err(ProbeError::Status {
                status: captured.status.to_string(),
            });
        }
        Ok(captured.text)
    }
}
