//! Logging setup.
//!
//! The terminal runner owns stdout/stderr, so log records go to a file and
//! only when one is configured (`PAPER_PLANE_LOG_PATH`). Level filtering
//! follows `RUST_LOG`, defaulting to `info`.

use std::fs::OpenOptions;

use anyhow::{Context, Result};

/// Install the global logger writing to `log_path`.
///
/// Returns `false` without doing anything when no path is configured.
pub fn init_logging(log_path: Option<&str>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("install logger")?;

    log::info!("logging to {}", path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_means_no_logger() {
        assert!(!init_logging(None).unwrap());
    }
}
