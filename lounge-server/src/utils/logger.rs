//! Logging Infrastructure
//!
//! Terminal output by default; with a log directory, a daily rolling file
//! instead. `LOG_LEVEL` accepts a plain level or a full `EnvFilter`
//! directive such as `lounge_server=debug,tower_http=info`.

use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

const LOG_FILE_PREFIX: &str = "lounge-server";

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger with optional JSON formatting and file output
///
/// A second call is a no-op (the first subscriber stays installed).
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let filter = build_filter(log_level.unwrap_or("info"));

    let writer = match log_dir.map(Path::new) {
        Some(path) if path.is_dir() => BoxMakeWriter::new(tracing_appender::rolling::daily(
            path,
            LOG_FILE_PREFIX,
        )),
        Some(path) => {
            eprintln!(
                "Log directory {} does not exist, logging to stdout",
                path.display()
            );
            BoxMakeWriter::new(std::io::stdout)
        }
        None => BoxMakeWriter::new(std::io::stdout),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true)
        .with_writer(writer);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_invalid_directive_falls_back_to_info() {
        let filter = build_filter("lounge_server=notalevel");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_target_directive_is_kept() {
        let filter = build_filter("lounge_server=debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        let dir = tempfile::tempdir().unwrap();
        init_logger_with_file(Some("warn"), false, dir.path().to_str());
        init_logger();
    }
}
