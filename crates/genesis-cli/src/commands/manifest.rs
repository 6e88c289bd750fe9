use clap::Parser;
use genesis_core::options::GlobalOptions;
use genesis_core::repo::find_repo_root;
use genesis_core::usage::Usage;
use genesis_prereqs::check::run_all_prerequisite_checks;
use genesis_prereqs::probe::SystemProbe;
use genesis_util::errors::GenesisResult;

const USAGE: Usage = Usage {
    synopsis: "manifest [--no-redact] [--cloud-config path.yml] deployment-env.yml",
    options: &[
        (
            "-c, --cloud-config PATH",
            "Path to your downloaded BOSH cloud-config",
        ),
        (
            "    --no-redact",
            "Do not redact credentials in the manifest.\n\
             USE THIS OPTION WITH GREAT CARE AND CAUTION.",
        ),
    ],
};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    #[arg(short, long, value_name = "PATH")]
    cloud_config: Option<String>,

    #[arg(long)]
    no_redact: bool,

    env_file: String,
}

pub fn exec(opts: &GlobalOptions, args: &[String], help: bool) -> GenesisResult<()> {
    if help {
        USAGE.print();
        return Ok(());
    }
    let args: Args = super::parse_args("manifest", args)?;

    run_all_prerequisite_checks(&SystemProbe)?;
    find_repo_root(&opts.cwd)?;
    if args.no_redact {
        tracing::warn!("credentials in the manifest for {} will not be redacted", args.env_file);
    }
    tracing::debug!(?args, "generating manifest");
    super::not_implemented("manifest")
}
