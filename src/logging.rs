use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Installs a stderr subscriber so stdout stays clean for mapped JSON.
///
/// `directive` wins over `RUST_LOG`; with neither set the level is `info`.
pub fn init_logging(directive: Option<&str>) -> anyhow::Result<()> {
    let env_filter = match directive {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?,
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).try_init()?;

    Ok(())
}
