//! Running the external tools Genesis shells out to.

use std::process::{Command, ExitStatus};

use crate::errors::GenesisError;

/// An external program invocation whose output is captured as text.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
    merge_stderr: bool,
}

/// What a finished [`ToolCommand`] printed, and how it exited.
#[derive(Debug, Clone)]
pub struct Captured {
    pub status: ExitStatus,
    /// Standard output, followed by standard error when merged, with trailing
    /// newlines removed.
    pub text: String,
}

impl Captured {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            merge_stderr: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Some tools (`safe`) report on standard error; fold it into the text.
    pub fn merge_stderr(mut self, merge: bool) -> Self {
        self.merge_stderr = merge;
        self
    }

    /// The invocation as a user would type it, e.g. `git --version`.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run to completion and capture its output.
    ///
    /// Only a failure to start the program is an error; a non-zero exit is
    /// left to the caller via [`Captured::status`].
    pub fn capture(&self) -> Result<Captured, GenesisError> {
        tracing::debug!("running `{}`", self.command_line());
        let output = Command::new(&self.program).args(&self.args).output()?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        if self.merge_stderr {
            text.push_str(&String::from_utf8_lossy(&output.stderr));
        }
        let text = text.trim_end_matches(['\n', '\r']).to_string();

        tracing::trace!(status = ?output.status, output = %text, "`{}` finished", self.command_line());
        Ok(Captured {
            status: output.status,
            text,
        })
    }
}
