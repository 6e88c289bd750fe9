use clap::Parser;
use genesis_core::options::GlobalOptions;
use genesis_core::repo::find_repo_root;
use genesis_core::usage::Usage;
use genesis_util::errors::GenesisResult;

const USAGE: Usage = Usage {
    synopsis: "graph [pipeline-layout]",
    options: &[super::PIPELINE_CONFIG],
};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    #[arg(short, long, default_value = "ci.yml")]
    config: String,

    layout: Option<String>,
}

pub fn exec(opts: &GlobalOptions, args: &[String], help: bool) -> GenesisResult<()> {
    if help {
        USAGE.print();
        return Ok(());
    }
    let args: Args = super::parse_args("graph", args)?;

    let root = find_repo_root(&opts.cwd)?;
    tracing::debug!(?args, "graphing pipeline from {}", root.join(&args.config).display());
    super::not_implemented("graph")
}
