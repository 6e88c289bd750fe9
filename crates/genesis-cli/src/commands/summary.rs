use clap::Parser;
use genesis_core::options::GlobalOptions;
use genesis_core::repo::find_repo_root;
use genesis_core::usage::Usage;
use genesis_util::errors::GenesisResult;

const USAGE: Usage = Usage {
    synopsis: "summary",
    options: &[],
};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
struct Args {}

pub fn exec(opts: &GlobalOptions, args: &[String], help: bool) -> GenesisResult<()> {
    if help {
        USAGE.print();
        return Ok(());
    }
    let _: Args = super::parse_args("summary", args)?;

    let root = find_repo_root(&opts.cwd)?;
    tracing::debug!("summarizing environments in {}", root.display());
    super::not_implemented("summary")
}
