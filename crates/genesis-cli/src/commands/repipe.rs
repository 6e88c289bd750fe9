use clap::Parser;
use genesis_core::options::GlobalOptions;
use genesis_core::repo::find_repo_root;
use genesis_core::usage::Usage;
use genesis_prereqs::check::run_all_prerequisite_checks;
use genesis_prereqs::probe::SystemProbe;
use genesis_util::errors::GenesisResult;

const USAGE: Usage = Usage {
    synopsis: "repipe [pipeline-layout]",
    options: &[
        (
            "-t, --target",
            "The name of your Concourse target (per `fly targets'),\n\
             if it differs from the pipeline layout name.",
        ),
        (
            "-n, --dry-run",
            "Generate the Concourse Pipeline configuration, but\n\
             refrain from actually deploying it to Concourse.\n\
             Instead, just print the YAML.",
        ),
        super::PIPELINE_CONFIG,
    ],
};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    #[arg(short, long)]
    target: Option<String>,

    #[arg(short = 'n', long)]
    dry_run: bool,

    #[arg(short, long, default_value = "ci.yml")]
    config: String,

    layout: Option<String>,
}

pub fn exec(opts: &GlobalOptions, args: &[String], help: bool) -> GenesisResult<()> {
    if help {
        USAGE.print();
        return Ok(());
    }
    let args: Args = super::parse_args("repipe", args)?;

    run_all_prerequisite_checks(&SystemProbe)?;
    let root = find_repo_root(&opts.cwd)?;
    tracing::debug!(?args, "repiping from {}", root.join(&args.config).display());
    super::not_implemented("repipe")
}
