use crate::error::{ReadinessError, Result};
use tracing_subscriber::EnvFilter;

pub fn level_for(verbose: u8, quiet: bool, config_level: Option<&str>) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => config_level.unwrap_or("warn").to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

pub fn init(verbose: u8, quiet: bool, config_level: Option<&str>) -> Result<()> {
    let level = level_for(verbose, quiet, config_level);
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&level)
            .map_err(|err| ReadinessError::Logging(format!("invalid level '{level}': {err}")))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|err| ReadinessError::Logging(err.to_string()))
}
