use genesis_core::options::GlobalOptions;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// `-T` logs everything, `-D` debug and up, `-v` info and up. Without any of
/// them `RUST_LOG` applies, falling back to warnings only.
pub fn init(options: &GlobalOptions) {
    let filter = if options.trace {
        EnvFilter::new("trace")
    } else if options.debug {
        EnvFilter::new("debug")
    } else if options.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    tracing::debug!(?options, "global options");
}
