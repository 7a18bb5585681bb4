use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "COSTSIM_LOG";

/// Installs a stderr subscriber. `COSTSIM_LOG` wins over the `verbose` flag.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "costsim=debug" } else { "costsim=warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .try_init();
}
