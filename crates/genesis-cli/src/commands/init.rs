use clap::Parser;
use genesis_core::kit::KitRef;
use genesis_core::options::GlobalOptions;
use genesis_core::repo::{init_repo, valid_repo_name};
use genesis_core::usage::Usage;
use genesis_core::VERSION;
use genesis_prereqs::check::run_all_prerequisite_checks;
use genesis_prereqs::probe::SystemProbe;
use genesis_util::errors::{GenesisError, GenesisResult};
use genesis_util::term;

const USAGE: Usage = Usage {
    synopsis: "init [-k KIT/VERSION] name",
    options: &[(
        "-k, --kit",
        "Name (and optionally, version) of the Genesis Kit to\n\
         base these deployments on.  i.e.: shield/6.3.0",
    )],
};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    #[arg(short, long, value_name = "KIT/VERSION")]
    kit: Option<String>,

    /// Repository name; `-deployments` is appended if missing
    name: String,
}

pub fn exec(opts: &GlobalOptions, args: &[String], help: bool) -> GenesisResult<()> {
    if help {
        USAGE.print();
        return Ok(());
    }
    let args: Args = super::parse_args("init", args)?;

    if !valid_repo_name(&args.name) {
        return Err(GenesisError::usage_for(
            "init",
            format!(
                "invalid repository name '{}': names start with a lowercase letter \
                 and contain only lowercase letters, digits and hyphens",
                args.name
            ),
        ));
    }
    let kit = args.kit.as_deref().map(str::parse::<KitRef>).transpose()?;

    run_all_prerequisite_checks(&SystemProbe)?;

    let root = init_repo(&opts.cwd, &args.name, VERSION)?;
    term::status(
        "Initialized",
        &format!("empty Genesis repository in {}", root.display()),
    );

    if let Some(kit) = kit {
        tracing::warn!("kit {kit} was not installed; fetching kits is not implemented yet");
    }
    Ok(())
}
