use clap::Parser;
use genesis_core::kit::KitRef;
use genesis_core::options::GlobalOptions;
use genesis_core::usage::Usage;
use genesis_util::errors::{GenesisError, GenesisResult};

const USAGE: Usage = Usage {
    synopsis: "decompile-kit [NAME/VERSION | path/to/kit.tar.gz]",
    options: &[("-f, --force", "Overwrite dev/, if it exists.")],
};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    #[arg(short, long)]
    force: bool,

    kit: Option<String>,
}

pub fn exec(opts: &GlobalOptions, args: &[String], help: bool) -> GenesisResult<()> {
    if help {
        USAGE.print();
        return Ok(());
    }
    let args: Args = super::parse_args("decompile-kit", args)?;

    match args.kit.as_deref() {
        Some(path) if KitRef::is_archive_path(path) => {
            tracing::debug!(archive = path, "decompiling kit archive");
        }
        Some(reference) => {
            let kit: KitRef = reference.parse()?;
            tracing::debug!(%kit, "decompiling kit");
        }
        None => tracing::debug!("decompiling the latest kit"),
    }

    let dev = opts.cwd.join("dev");
    if dev.exists() && !args.force {
        return Err(GenesisError::command(format!(
            "{} already exists; use -f to overwrite it",
            dev.display()
        )));
    }

    super::not_implemented("decompile-kit")
}
