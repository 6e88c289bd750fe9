use genesis_prereqs::probe::{ProbeError, SystemProbe, Tool, ToolProbe, GIT, SAFE, SPRUCE};

#[test]
fn test_probe_commands_match_tool_conventions() {
    assert_eq!(SPRUCE.probe_command(), "spruce -v");
    assert_eq!(SAFE.probe_command(), "safe -v");
    assert_eq!(GIT.probe_command(), "git --version");
}

#[test]
fn test_system_probe_reports_missing_binary() {
    let tool = Tool {
        name: "genesis_missing_tool_xyz_123",
        ..SPRUCE
    };
    let err = SystemProbe.probe(&tool).unwrap_err();
    assert!(matches!(err, ProbeError::Spawn { .. }));
}

#[cfg(unix)]
#[test]
fn test_system_probe_reports_failing_binary() {
    let tool = Tool {
        name: "false",
        version_args: &[],
        ..SPRUCE
    };
    let err = SystemProbe.probe(&tool).unwrap_err();
    assert!(matches!(err, ProbeError::Status { .. }));
}

#[cfg(unix)]
#[test]
fn test_system_probe_trims_trailing_newline() {
    let tool = Tool {
        name: "echo",
        version_args: &["Version", "9.9.9"],
        ..SPRUCE
    };
    let out = SystemProbe.probe(&tool).unwrap();
    assert_eq!(out, "Version 9.9.9");
}

#[cfg(unix)]
#[test]
fn test_system_probe_merges_stderr_when_asked() {
    let tool = Tool {
        name: "sh",
        version_args: &["-c", "echo 'safe v1.0.0' >&2"],
        merge_stderr: true,
        ..SAFE
    };
    assert_eq!(SystemProbe.probe(&tool).unwrap(), "safe v1.0.0");

    let quiet = Tool {
        merge_stderr: false,
        ..tool
    };
    assert_eq!(SystemProbe.probe(&quiet).unwrap(), "");
}
