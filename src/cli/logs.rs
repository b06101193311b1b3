use tracing::metadata::LevelFilter;
use tracing::Level;
use tracing_subscriber::fmt::format::PrettyFields;
use tracing_subscriber::EnvFilter;

use super::error::CliError;

/// Initializes logging (through the tracing crate) for the cli.
///
/// The default level is INFO, raised to DEBUG by the debug flag. `RUST_LOG`
/// overrides both.
pub fn init(debug: bool) -> Result<(), CliError> {
    let default_level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from_level(default_level).into())
                .from_env_lossy(),
        )
        .fmt_fields(PrettyFields::new())
        .try_init()
        .map_err(|_| CliError::Tracing("unable to set the global logging subscriber".to_string()))
}
