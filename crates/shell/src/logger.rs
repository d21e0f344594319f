//! Logging to rotated files with `ftlog`.

use std::path::{Path, PathBuf};

use ftlog::{
    appender::{FileAppender, Period},
    LevelFilter, LoggerGuard,
};

/// Configures the logger to write to `<log_dir>/<file_name>.log`.
///
/// The returned guard must be held for as long as logs should be written.
///
/// # Errors
///
/// - If `log_dir` cannot be created or resolved.
/// - If a global logger is already set.
pub fn configure_logger<P: AsRef<Path>>(log_dir: P, file_name: &str) -> Result<(LoggerGuard, PathBuf), String> {
    let log_dir = log_dir.as_ref();
    std::fs::create_dir_all(log_dir).map_err(|e| format!("Failed to create {log_dir:?}: {e}"))?;
    let log_path = log_dir
        .canonicalize()
        .map_err(|e| format!("Failed to resolve {log_dir:?}: {e}"))?
        .join(format!("{file_name}.log"));

    let writer = FileAppender::builder().path(&log_path).rotate(Period::Day).build();

    let err_path = log_path.with_extension("err.log");

    // The pipeline's own debug lines are dropped; ftlog's appender diagnostics go to `err_path`.
    let guard = ftlog::Builder::new()
        .max_log_level(LevelFilter::Info)
        .root(writer)
        .filter("ftlog::appender", "ftlog-appender", LevelFilter::Debug)
        .appender("ftlog-appender", FileAppender::new(err_path))
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok((guard, log_path))
}
