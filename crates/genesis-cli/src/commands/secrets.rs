use clap::Parser;
use genesis_core::options::GlobalOptions;
use genesis_core::repo::find_repo_root;
use genesis_core::usage::Usage;
use genesis_prereqs::check::run_all_prerequisite_checks;
use genesis_prereqs::probe::SystemProbe;
use genesis_util::errors::GenesisResult;

const USAGE: Usage = Usage {
    synopsis: "secrets [--rotate] [--vault target] deployment-env.yml",
    options: &[
        (
            "    --rotate",
            "Rotate credentials.  Any non-fixed credentials defined\n\
             by the kit will be regenerated in the Vault.",
        ),
        (
            "    --vault",
            "The name of a `safe' target (a Vault) to store newly\n\
             generated credentials in.",
        ),
    ],
};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    #[arg(long)]
    rotate: bool,

    #[arg(long)]
    vault: Option<String>,

    env_file: String,
}

pub fn exec(opts: &GlobalOptions, args: &[String], help: bool) -> GenesisResult<()> {
    if help {
        USAGE.print();
        return Ok(());
    }
    let args: Args = super::parse_args("secrets", args)?;

    run_all_prerequisite_checks(&SystemProbe)?;
    find_repo_root(&opts.cwd)?;
    tracing::debug!(?args, "managing credentials");
    super::not_implemented("secrets")
}
