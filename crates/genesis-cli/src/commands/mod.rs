//! Command registry and handler modules.

mod compile_kit;
mod decompile_kit;
mod describe;
mod download;
mod graph;
mod init;
mod lookup;
mod manifest;
mod new;
mod ping;
mod repipe;
mod secrets;
mod summary;
mod version;
mod yamls;

use clap::Parser;
use genesis_core::router::{Router, HELP_COMMAND};
use genesis_util::errors::{GenesisError, GenesisResult, RegistryError};

const INFO: &str = "INFO";
const DEPLOYMENTS: &str = "DEPLOYMENTS";
const PIPELINES: &str = "PIPELINES";
const KITS: &str = "KITS";

/// `-c, --config` as shared by the pipeline commands.
const PIPELINE_CONFIG: (&str, &str) = (
    "-c, --config",
    "Path to the pipeline configuration file, which specifies\n\
     Git parameters, notification settings, pipeline layouts,\n\
     etc.  Defaults to 'ci.yml'",
);

/// Build the router with every `genesis` command.
pub fn registry() -> Result<Router, RegistryError> {
    let mut router = Router::new();
    router.alias(HELP_COMMAND, "usage")?;

    router.register("version", "Print the version of Genesis.", INFO, version::exec)?;
    router.register("ping", "See if the genesis binary is a real thing.", INFO, ping::exec)?;
    router.register("summary", "Print a summary of defined environments.", INFO, summary::exec)?;
    router.register(
        "yamls",
        "Print a list of the YAML files used for a single environment.",
        INFO,
        yamls::exec,
    )?;
    router.register("lookup", "Find a key set in environment manifests.", INFO, lookup::exec)?;

    router.register("init", "Initialize a new Genesis deployment.", DEPLOYMENTS, init::exec)?;
    router.register(
        "new",
        "Create a new Genesis deployment environment.",
        DEPLOYMENTS,
        new::exec,
    )?;
    router.register(
        "manifest",
        "Generate a redacted BOSH deployment manifest for an environment.",
        DEPLOYMENTS,
        manifest::exec,
    )?;
    router.register(
        "secrets",
        "Re-generate // rotate credentials (passwords, keys, etc.).",
        DEPLOYMENTS,
        secrets::exec,
    )?;

    router.register(
        "repipe",
        "Configure a Concourse pipeline for automating deployments.",
        PIPELINES,
        repipe::exec,
    )?;
    router.register("describe", "Describe a Concourse pipeline, in words.", PIPELINES, describe::exec)?;
    router.register("graph", "Draw a Concourse pipeline.", PIPELINES, graph::exec)?;

    router.register(
        "compile-kit",
        "Create a distributable kit archive from dev.",
        KITS,
        compile_kit::exec,
    )?;
    router.register("decompile-kit", "Unpack a kit archive to dev.", KITS, decompile_kit::exec)?;
    router.register("download", "Download a Genesis Kit from the Internet.", KITS, download::exec)?;

    Ok(router)
}

/// Parse a command's own flags from the arguments the router left over.
fn parse_args<T: Parser>(command: &str, args: &[String]) -> GenesisResult<T> {
    T::try_parse_from(args).map_err(|e| {
        let rendered = e.to_string();
        let message = rendered
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ")
            .to_string();
        GenesisError::usage_for(command, message)
    })
}

/// The end of the line for commands whose real work lives in external tools
/// Genesis does not drive yet.
fn not_implemented(command: &str) -> GenesisResult<()> {
    eprintln!("genesis {command} is not implemented yet");
    Ok(())
}
