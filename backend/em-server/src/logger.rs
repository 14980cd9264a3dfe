use crate::error::{Result as ServerErrorResult, ServerError};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;

/// Initialize the global `log` backend.
///
/// Lines look like `[2025-03-15T19:30:00Z - INFO] message [src/file.rs:42]`.
/// `log_file` wins over stdout; `colored` only applies to stdout.
pub fn initialize(
    log_level: em_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let output = match log_file {
        Some(ref log_path) => {
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| ServerError::Logger {
                    message: format!("Failed to create log dir {}: {}", parent.display(), e),
                })?;
            }
            let file = fern::log_file(log_path).map_err(|e| ServerError::Logger {
                message: format!("Failed to open log file {}: {}", log_path.display(), e),
            })?;
            line_format(None).chain(file)
        }
        None if colored => line_format(Some(level_colors())).chain(std::io::stdout()),
        // Plain output for non-TTY (systemd, docker logs)
        None => line_format(None).chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(output)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!("Logger initialized: level={:?}, file={}", level_filter, path.display()),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    // Route `tracing` events from dependencies into the same output
    tracing_log::LogTracer::init().ok();

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

fn line_format(colors: Option<ColoredLevelConfig>) -> Dispatch {
    Dispatch::new().format(move |out, message, record| {
        let level = match &colors {
            Some(colors) => colors.color(record.level()).to_string(),
            None => record.level().to_string(),
        };
        out.finish(format_args!(
            "[{} - {}] {} [{}:{}]",
            humantime::format_rfc3339(SystemTime::now()),
            level,
            message,
            record.file().unwrap_or("unknown"),
            record.line().unwrap_or(0),
        ))
    })
}
