use clap::Parser;
use genesis_core::kit::KitRef;
use genesis_core::options::GlobalOptions;
use genesis_core::usage::Usage;
use genesis_util::errors::GenesisResult;

const USAGE: Usage = Usage {
    synopsis: "download NAME[/VERSION] [...]",
    options: &[],
};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    #[arg(required = true)]
    kits: Vec<String>,
}

pub fn exec(_opts: &GlobalOptions, args: &[String], help: bool) -> GenesisResult<()> {
    if help {
        USAGE.print();
        return Ok(());
    }
    let args: Args = super::parse_args("download", args)?;

    let kits = args
        .kits
        .iter()
        .map(|k| k.parse::<KitRef>())
        .collect::<GenesisResult<Vec<_>>>()?;
    for kit in &kits {
        tracing::debug!(%kit, "downloading kit");
    }
    super::not_implemented("download")
}
