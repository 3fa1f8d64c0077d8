use tracing::Level;
use tracing_subscriber::EnvFilter;

pub fn level_for(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Installs a stderr subscriber. `RUST_LOG` takes precedence over the flags.
pub fn init(verbose: u8, quiet: bool) {
    let level = level_for(verbose, quiet);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,pizza_match={}",
            level.as_str().to_lowercase()
        ))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
