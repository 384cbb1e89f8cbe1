use std::sync::Arc;

use spdlog::sink::{FileSink, StdStream, StdStreamSink};
use spdlog::{Level, LevelFilter, Logger, LoggerBuilder};

use crate::config::{Config, LogLevel};

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Critical => Level::Critical,
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
            LogLevel::Trace => Level::Trace,
        }
    }
}

/// Console output always goes to stderr since stdout may be carrying the
/// generated page.
fn add_console_sink(builder: &mut LoggerBuilder) -> spdlog::Result<()> {
    let stderr = Arc::new(StdStreamSink::builder()
        .std_stream(StdStream::Stderr)
        .build()?);

    builder.sink(stderr);

    Ok(())
}

fn log_level(config: &Config, verbose: bool) -> Level {
    match config.log {
        _ if verbose => Level::Debug,
        Some(ref log) => log.level.into(),
        None => Level::Warn,
    }
}

fn install(logger: Logger, level: Level) {
    let logger = Arc::new(logger);
    logger.set_flush_level_filter(LevelFilter::All);
    logger.set_level_filter(LevelFilter::MoreSevereEqual(level));

    spdlog::set_default_logger(logger);
}

/// Logger with the stderr console sink only.
pub fn console_logger() -> spdlog::Result<Logger> {
    let mut builder = Logger::builder();
    add_console_sink(&mut builder)?;
    builder.build()
}

/// Installs the default logger: stderr plus the configured log file.
/// `verbose` forces Debug.
pub fn configure_logger(config: &Config, verbose: bool) -> spdlog::Result<()> {
    let mut builder = Logger::builder();
    add_console_sink(&mut builder)?;

    if let Some(location) = config.log.as_ref().and_then(|log| log.location.as_ref()) {
        let file_sink = Arc::new(FileSink::builder()
            .path(location)
            .truncate(false)
            .build()?);
        builder.sink(file_sink);
    }

    install(builder.build()?, log_level(config, verbose));

    Ok(())
}

/// Installs a stderr-only default logger. Used when the configured sinks
/// cannot be created, so that nothing falls back to spdlog's stdout logger.
pub fn configure_console_logger(config: &Config, verbose: bool) -> spdlog::Result<()> {
    install(console_logger()?, log_level(config, verbose));
    Ok(())
}
