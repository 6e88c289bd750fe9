use std::path::PathBuf;

use genesis_core::options::{scan, GlobalOptions, GLOBAL_FLAGS};

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_defaults() {
    let opts = GlobalOptions::default();
    assert_eq!(opts.cwd, PathBuf::from("."));
    assert!(!opts.debug && !opts.trace && !opts.verbose && !opts.yes_to_all && !opts.help);
}

#[test]
fn test_empty_argv_has_no_command() {
    let scanned = scan(Vec::<String>::new()).unwrap();
    assert_eq!(scanned.command, None);
    assert!(scanned.args.is_empty());
    assert_eq!(scanned.options, GlobalOptions::default());
}

#[test]
fn test_global_flag_before_command() {
    let scanned = scan(["-D", "init", "foo"]).unwrap();
    assert_eq!(scanned.command.as_deref(), Some("init"));
    assert_eq!(scanned.args, strings(&["foo"]));
    assert!(scanned.options.debug);
}

#[test]
fn test_global_flag_after_command() {
    let scanned = scan(["init", "-D", "foo"]).unwrap();
    assert_eq!(scanned.command.as_deref(), Some("init"));
    assert_eq!(scanned.args, strings(&["foo"]));
    assert!(scanned.options.debug);
}

#[test]
fn test_every_long_flag() {
    let scanned = scan([
        "--debug", "--trace", "--verbose", "--yes", "--help", "--cwd", "/tmp", "ping",
    ])
    .unwrap();
    let opts = scanned.options;
    assert!(opts.debug && opts.trace && opts.verbose && opts.yes_to_all && opts.help);
    assert_eq!(opts.cwd, PathBuf::from("/tmp"));
    assert_eq!(scanned.command.as_deref(), Some("ping"));
}

#[test]
fn test_cwd_forms() {
    for argv in [
        vec!["-C", "/srv/repo", "ping"],
        vec!["-C/srv/repo", "ping"],
        vec!["--cwd", "/srv/repo", "ping"],
        vec!["--cwd=/srv/repo", "ping"],
        vec!["ping", "-C", "/srv/repo"],
    ] {
        let scanned = scan(argv.clone()).unwrap();
        assert_eq!(scanned.options.cwd, PathBuf::from("/srv/repo"), "{argv:?}");
        assert_eq!(scanned.command.as_deref(), Some("ping"), "{argv:?}");
        assert!(scanned.args.is_empty(), "{argv:?}");
    }
}

#[test]
fn test_cwd_value_is_not_the_command() {
    let scanned = scan(["-C", "init", "ping"]).unwrap();
    assert_eq!(scanned.options.cwd, PathBuf::from("init"));
    assert_eq!(scanned.command.as_deref(), Some("ping"));
}

#[test]
fn test_short_cluster() {
    let scanned = scan(["-Dyv", "version"]).unwrap();
    assert!(scanned.options.debug);
    assert!(scanned.options.yes_to_all);
    assert!(scanned.options.verbose);
    assert!(!scanned.options.trace);
}

#[test]
fn test_short_cluster_ending_in_cwd() {
    let scanned = scan(["-DC", "/srv", "ping"]).unwrap();
    assert!(scanned.options.debug);
    assert_eq!(scanned.options.cwd, PathBuf::from("/srv"));

    let scanned = scan(["-yC/srv", "ping"]).unwrap();
    assert!(scanned.options.yes_to_all);
    assert_eq!(scanned.options.cwd, PathBuf::from("/srv"));
}

#[test]
fn test_missing_cwd_value_is_usage_error() {
    for argv in [vec!["-C"], vec!["ping", "--cwd"], vec!["-DC"]] {
        let err = scan(argv.clone()).unwrap_err();
        assert_eq!(err.exit_code(), 3, "{argv:?}");
    }
}

#[test]
fn test_boolean_flag_with_value_is_usage_error() {
    let err = scan(["--debug=yes", "ping"]).unwrap_err();
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_unknown_option_before_command_is_usage_error() {
    let err = scan(["--bogus", "init"]).unwrap_err();
    assert_eq!(err.exit_code(), 3);
    assert!(err.to_string().contains("--bogus"));

    let err = scan(["-k", "init"]).unwrap_err();
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_unknown_options_after_command_are_left_for_the_command() {
    let scanned = scan(["init", "-k", "shield/6.3.0", "--force", "-D", "us-west"]).unwrap();
    assert_eq!(scanned.command.as_deref(), Some("init"));
    assert_eq!(
        scanned.args,
        strings(&["-k", "shield/6.3.0", "--force", "us-west"])
    );
    assert!(scanned.options.debug);
}

#[test]
fn test_mixed_cluster_is_not_global() {
    let scanned = scan(["repipe", "-nD"]).unwrap();
    assert_eq!(scanned.args, strings(&["-nD"]));
    assert!(!scanned.options.debug);
}

#[test]
fn test_double_dash_stops_scanning() {
    let scanned = scan(["lookup", "--", "-D", "env"]).unwrap();
    assert_eq!(scanned.command.as_deref(), Some("lookup"));
    assert_eq!(scanned.args, strings(&["--", "-D", "env"]));
    assert!(!scanned.options.debug);
}

#[test]
fn test_double_dash_before_command() {
    let scanned = scan(["-y", "--", "yamls", "-h"]).unwrap();
    assert_eq!(scanned.command.as_deref(), Some("yamls"));
    assert_eq!(scanned.args, strings(&["--", "-h"]));
    assert!(!scanned.options.help);
    assert!(scanned.options.yes_to_all);
}

#[test]
fn test_bare_double_dash_leaves_no_command() {
    for argv in [vec!["--"], vec!["-D", "--"]] {
        let scanned = scan(argv).unwrap();
        assert_eq!(scanned.command, None);
        assert!(scanned.args.is_empty());
    }
}

#[test]
fn test_lone_dash_is_positional() {
    let scanned = scan(["lookup", "-"]).unwrap();
    assert_eq!(scanned.args, strings(&["-"]));
}

#[test]
fn test_help_flag_anywhere() {
    assert!(scan(["-h"]).unwrap().options.help);
    assert!(scan(["init", "--help"]).unwrap().options.help);
}

#[test]
fn test_flag_labels() {
    let labels: Vec<String> = GLOBAL_FLAGS.iter().map(|f| f.label()).collect();
    assert!(labels.contains(&"-C, --cwd PATH".to_string()));
    assert!(labels.contains(&"-D, --debug".to_string()));
    assert_eq!(labels.len(), 6);
}
