use clap::Parser;
use genesis_core::options::GlobalOptions;
use genesis_core::usage::Usage;
use genesis_prereqs::version::Version;
use genesis_util::errors::{GenesisError, GenesisResult};

/// Development kits live in `dev/`, described by `dev/kit.yml`.
const DEV_KIT_METADATA: &str = "dev/kit.yml";

// -v belongs to the global --verbose flag.
const USAGE: Usage = Usage {
    synopsis: "compile-kit -n NAME --version VERSION",
    options: &[
        ("-n, --name", "Name of the kit archive."),
        ("    --version", "Version to package."),
    ],
};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    #[arg(short, long)]
    name: String,

    #[arg(long)]
    version: String,
}

pub fn exec(opts: &GlobalOptions, args: &[String], help: bool) -> GenesisResult<()> {
    if help {
        USAGE.print();
        return Ok(());
    }
    let args: Args = super::parse_args("compile-kit", args)?;

    let version: Version = args
        .version
        .parse()
        .map_err(|e| GenesisError::usage_for("compile-kit", format!("invalid kit version: {e}")))?;

    if !opts.cwd.join(DEV_KIT_METADATA).is_file() {
        return Err(GenesisError::command("Development kit (in dev/) not found"));
    }

    tracing::debug!(name = %args.name, %version, "compiling kit");
    super::not_implemented("compile-kit")
}
