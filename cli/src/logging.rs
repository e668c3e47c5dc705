use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a stderr subscriber. `RUST_LOG` wins over the verbosity flag.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let default_level = if verbose {
        "twoway=debug,twoway_core=debug"
    } else {
        "twoway=warn,twoway_core=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()?;

    Ok(())
}
