use miette::Diagnostic;
use thiserror::Error;

/// Exit status for a handler's own failure.
pub const EXIT_COMMAND_FAILED: u8 = 1;
/// Exit status when one or more prerequisite checks failed.
pub const EXIT_PREREQS_FAILED: u8 = 2;
/// Exit status for bad or missing arguments.
pub const EXIT_USAGE: u8 = 3;

/// Unified error type for all Genesis operations.
#[derive(Debug, Error, Diagnostic)]
pub enum GenesisError {
    /// Bad or missing arguments.
    #[error("{message}")]
    #[diagnostic(code(genesis::usage))]
    Usage {
        message: String,
        #[help]
        hint: Option<String>,
    },

    /// External tooling is missing, corrupt, or too old.
    ///
    /// Each entry is one fully rendered diagnostic; all failed checks are
    /// reported together.
    #[error("{} prerequisite check(s) failed", .diagnostics.len())]
    #[diagnostic(
        code(genesis::prereq),
        help("Your system does not look like it is ready for Genesis.")
    )]
    Prerequisites { diagnostics: Vec<String> },

    /// The command name did not match any registered command or alias.
    #[error("unrecognized command '{name}'")]
    #[diagnostic(
        code(genesis::unknown_command),
        help("Run 'genesis help' for a list of commands.")
    )]
    UnknownCommand { name: String },

    /// A command handler failed.
    #[error("{message}")]
    #[diagnostic(code(genesis::command))]
    Command { message: String },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    #[diagnostic(code(genesis::io))]
    Io(#[from] std::io::Error),

    /// The command registry was built incorrectly.
    #[error(transparent)]
    #[diagnostic(code(genesis::registry))]
    Registry(#[from] RegistryError),
}

impl GenesisError {
    /// Build a usage error with no follow-up hint.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
            hint: None,
        }
    }

    /// Build a usage error pointing at a command's own `-h` output.
    pub fn usage_for(command: &str, message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
            hint: Some(format!("See 'genesis {command} -h' for usage.")),
        }
    }

    /// Build a command-level failure.
    pub fn command(message: impl Into<String>) -> Self {
        Self::Command {
            message: message.into(),
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage { .. } => EXIT_USAGE,
            Self::Prerequisites { .. } => EXIT_PREREQS_FAILED,
            Self::UnknownCommand { .. }
            | Self::Command { .. }
            | Self::Io(_)
            | Self::Registry(_) => EXIT_COMMAND_FAILED,
        }
    }
}

/// Mistakes made while building the command registry at startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("command '{0}' is already registered")]
    DuplicateCommand(String),

    #[error("cannot alias '{alias}' to unknown command '{target}'")]
    UnknownTarget { target: String, alias: String },

    #[error("cannot alias '{alias}' to '{target}', which is itself an alias")]
    AliasChain { target: String, alias: String },
}

/// Convenience alias used by every Genesis crate.
pub type GenesisResult<T> = Result<T, GenesisError>;
