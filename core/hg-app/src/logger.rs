use crate::{AppError, Result as AppErrorResult};

use hg_config::LogLevel;

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
///
/// Stdout is reserved for command output, so console logs go to stderr.
#[track_caller]
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> AppErrorResult<()> {
    let level_filter = *log_level;

    let output: fern::Output = match log_file {
        Some(ref log_path) => {
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::logger(format!(
                        "Failed to create log directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|e| {
                    AppError::logger(format!(
                        "Failed to open log file {}: {e}",
                        log_path.display()
                    ))
                })?
                .into()
        }
        None => std::io::stderr().into(),
    };

    // Colors only make sense on a terminal
    let colors = (colored && log_file.is_none()).then(|| {
        ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
    });

    Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| {
            let date = humantime::format_rfc3339(SystemTime::now());
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);
            match &colors {
                Some(colors) => out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    level = colors.color(record.level()),
                )),
                None => out.finish(format_args!(
                    "[{date} - {level}] {message} [{file}:{line}]",
                    level = record.level(),
                )),
            }
        })
        .chain(output)
        .apply()
        .map_err(|e| AppError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stderr", level_filter),
    }

    Ok(())
}
