use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a tracing subscriber for configuration runs.
///
/// Log level comes from `RUST_LOG`, defaulting to "info". Warnings from
/// best-effort steps (such as Gradle wrapper normalization) show up at the
/// default level, as do rewritten wrapper versions; resolution decisions
/// are logged at "debug".
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_init_twice_does_not_panic() {
        let _ = init();
        assert!(init().is_err());
        tracing::info!("Setting Gradle version 8.6");
    }
}
