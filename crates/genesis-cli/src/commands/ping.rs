use clap::Parser;
use genesis_core::options::GlobalOptions;
use genesis_core::usage::Usage;
use genesis_prereqs::check::run_all_prerequisite_checks;
use genesis_prereqs::probe::SystemProbe;
use genesis_util::errors::GenesisResult;

const USAGE: Usage = Usage {
    synopsis: "ping",
    options: &[],
};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
struct Args {}

/// Check that the binary runs and its external tools are in order.
pub fn exec(_opts: &GlobalOptions, args: &[String], help: bool) -> GenesisResult<()> {
    if help {
        USAGE.print();
        return Ok(());
    }
    let _: Args = super::parse_args("ping", args)?;

    run_all_prerequisite_checks(&SystemProbe)?;
    println!("PING!");
    Ok(())
}
