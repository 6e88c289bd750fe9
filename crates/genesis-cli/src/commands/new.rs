use clap::Parser;
use genesis_core::options::GlobalOptions;
use genesis_core::repo::{find_repo_root, valid_repo_name};
use genesis_core::usage::Usage;
use genesis_prereqs::check::run_all_prerequisite_checks;
use genesis_prereqs::probe::SystemProbe;
use genesis_util::errors::{GenesisError, GenesisResult};

const USAGE: Usage = Usage {
    synopsis: "new [--vault target] env-name[.yml]",
    options: &[(
        "    --vault",
        "The name of a `safe' target (a Vault) to store newly\n\
         generated credentials in.",
    )],
};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    #[arg(long)]
    vault: Option<String>,

    env: String,
}

pub fn exec(opts: &GlobalOptions, args: &[String], help: bool) -> GenesisResult<()> {
    if help {
        USAGE.print();
        return Ok(());
    }
    let args: Args = super::parse_args("new", args)?;

    let env = args.env.strip_suffix(".yml").unwrap_or(&args.env);
    if !valid_repo_name(env) {
        return Err(GenesisError::usage_for(
            "new",
            format!(
                "invalid environment name '{env}': names start with a lowercase letter \
                 and contain only lowercase letters, digits and hyphens"
            ),
        ));
    }

    run_all_prerequisite_checks(&SystemProbe)?;
    let root = find_repo_root(&opts.cwd)?;
    tracing::debug!(env, vault = ?args.vault, "new environment in {}", root.display());
    super::not_implemented("new")
}
