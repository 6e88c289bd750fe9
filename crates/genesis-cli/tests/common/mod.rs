#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;

#[allow(deprecated)]
pub fn genesis() -> Command {
    Command::cargo_bin("genesis").unwrap()
}

/// Version output for each fake tool; `None` leaves the tool off `PATH`.
pub struct Tools {
    pub spruce: Option<&'static str>,
    pub safe: Option<&'static str>,
    pub git: Option<&'static str>,
}

impl Tools {
    pub fn healthy() -> Self {
        Self {
            spruce: Some("spruce - Version 1.8.9"),
            safe: Some("safe v0.0.29"),
            git: Some("git version 2.39.2"),
        }
    }

    pub fn none() -> Self {
        Self {
            spruce: None,
            safe: None,
            git: None,
        }
    }
}

/// Write shell scripts standing in for spruce, safe and git into `bin`.
/// `safe` reports its version on standard error, like the real one.
#[cfg(unix)]
pub fn install_tools(bin: &Path, tools: &Tools) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::create_dir_all(bin).unwrap();
    for (name, output, redirect) in [
        ("spruce", tools.spruce, ""),
        ("safe", tools.safe, " >&2"),
        ("git", tools.git, ""),
    ] {
        let Some(output) = output else { continue };
        let script = bin.join(name);
        std::fs::write(&script, format!("#!/bin/sh\necho '{output}'{redirect}\n")).unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    }
}

/// A `genesis` command whose `PATH` holds only the given fake tools.
#[cfg(unix)]
pub fn genesis_with_tools(bin: &Path, tools: &Tools) -> Command {
    install_tools(bin, tools);
    let mut cmd = genesis();
    cmd.env("PATH", bin);
    cmd
}
