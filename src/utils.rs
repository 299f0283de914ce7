use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

pub fn parse_log_level(log_level_name: impl AsRef<str>) -> Option<LevelFilter> {
    match &log_level_name.as_ref().to_lowercase()[..] {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Installs `simple_logger` with the given level. The logger can only be installed once per
/// process: later calls lower `log::max_level`, but `simple_logger` keeps filtering by the level
/// it was installed with, so they can't make logging more verbose than the first call did.
pub fn set_global_log_level(log_level_name: impl AsRef<str>) {
    match parse_log_level(&log_level_name) {
        Some(log_level_filter) => {
            if SimpleLogger::new()
                .with_level(log_level_filter)
                .init()
                .is_err()
            {
                log::set_max_level(log_level_filter);
            }
        }
        None => error!(
            "Log level's lowercase representation ({:?}) isn't in \
            [\"off\", \"error\", \"warn\", \"info\", \"debug\", \"trace\"]! \
            Using the old log level for now",
            log_level_name.as_ref()
        ),
    }
}
