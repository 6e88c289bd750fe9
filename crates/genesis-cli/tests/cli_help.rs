mod common;

use common::genesis;
use predicates::prelude::*;

#[test]
fn test_no_arguments_shows_command_listing() {
    genesis()
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "USAGE: genesis [OPTIONS] COMMAND [MORE OPTIONS]",
        ))
        .stderr(predicate::str::contains("-C, --cwd PATH"))
        .stderr(predicate::str::contains("help|usage"))
        .stderr(predicate::str::contains("compile-kit"))
        .stderr(predicate::str::contains("DEPLOYMENTS"));
}

#[test]
fn test_listing_groups_follow_registration_order() {
    let output = genesis().arg("help").output().unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let info = stderr.find("\n  INFO\n").unwrap();
    let deployments = stderr.find("\n  DEPLOYMENTS\n").unwrap();
    let pipelines = stderr.find("\n  PIPELINES\n").unwrap();
    let kits = stderr.find("\n  KITS\n").unwrap();
    assert!(info < deployments && deployments < pipelines && pipelines < kits);
}

#[test]
fn test_help_flag_alone_shows_listing() {
    genesis()
        .arg("-h")
        .assert()
        .success()
        .stderr(predicate::str::contains("per-command usage information"));
}

#[test]
fn test_bare_double_dash_shows_listing() {
    for args in [vec!["--"], vec!["-D", "--"]] {
        genesis()
            .args(&args)
            .assert()
            .success()
            .stderr(predicate::str::contains("USAGE: genesis [OPTIONS] COMMAND"));
    }
}

#[test]
fn test_help_with_double_dash_before_topic() {
    genesis()
        .args(["help", "--", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE: genesis init"));
}

#[test]
fn test_usage_is_an_alias_for_help() {
    genesis()
        .arg("usage")
        .assert()
        .success()
        .stderr(predicate::str::contains("USAGE: genesis [OPTIONS]"));
}

#[test]
fn test_help_help_is_too_meta() {
    genesis()
        .args(["help", "help"])
        .assert()
        .success()
        .stderr(predicate::str::contains("too meta"));
}

#[test]
fn test_help_for_a_command_prints_its_usage() {
    genesis()
        .args(["help", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE: genesis init [-k KIT/VERSION] name"))
        .stdout(predicate::str::contains("-k, --kit"));
}

#[test]
fn test_command_help_flag_in_any_position() {
    for args in [["init", "-h"], ["-h", "init"], ["init", "--help"]] {
        genesis()
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::contains("USAGE: genesis init"));
    }
}

#[test]
fn test_every_command_has_help() {
    for command in [
        "compile-kit",
        "decompile-kit",
        "describe",
        "download",
        "graph",
        "init",
        "lookup",
        "manifest",
        "new",
        "ping",
        "repipe",
        "secrets",
        "summary",
        "version",
        "yamls",
    ] {
        genesis()
            .args([command, "-h"])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("USAGE: genesis {command}")));
    }
}

#[test]
fn test_help_has_no_side_effects() {
    let tmp = tempfile::TempDir::new().unwrap();
    genesis()
        .current_dir(tmp.path())
        .args(["init", "-h", "concourse"])
        .assert()
        .success();
    assert!(!tmp.path().join("concourse-deployments").exists());
}

#[test]
fn test_help_for_unknown_command_fails() {
    genesis()
        .args(["help", "bogus"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unrecognized command 'bogus'"));
}
