use clap::Parser;
use genesis_core::options::GlobalOptions;
use genesis_core::usage::Usage;
use genesis_core::VERSION;
use genesis_util::errors::GenesisResult;

const USAGE: Usage = Usage {
    synopsis: "version",
    options: &[],
};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
struct Args {}

pub fn exec(_opts: &GlobalOptions, args: &[String], help: bool) -> GenesisResult<()> {
    if help {
        USAGE.print();
        return Ok(());
    }
    let _: Args = super::parse_args("version", args)?;

    println!("genesis v{VERSION}");
    Ok(())
}
