use clap::Parser;
use genesis_core::options::GlobalOptions;
use genesis_core::repo::find_repo_root;
use genesis_core::usage::Usage;
use genesis_util::errors::GenesisResult;

const USAGE: Usage = Usage {
    synopsis: "lookup key env-name default-value",
    options: &[],
};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    key: String,
    env: String,
    default: String,
}

pub fn exec(opts: &GlobalOptions, args: &[String], help: bool) -> GenesisResult<()> {
    if help {
        USAGE.print();
        return Ok(());
    }
    let args: Args = super::parse_args("lookup", args)?;

    find_repo_root(&opts.cwd)?;
    tracing::debug!(?args, "looking up key");
    super::not_implemented("lookup")
}
