use std::any::Any;
use std::path::PathBuf;

use std::sync::OnceLock;

static ACTIVE_LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

#[must_use]
pub fn default_log_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::home_dir().map_or_else(fallback_log_dir, |home| {
            home.join("Library/Logs/ShariaWatch")
        })
    }
    #[cfg(target_os = "windows")]
    {
        dirs::data_local_dir().map_or_else(fallback_log_dir, |dir| dir.join("ShariaWatch\\Logs"))
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        dirs::data_local_dir()
            .or_else(|| dirs::home_dir().map(|p| p.join(".local/share")))
            .map_or_else(fallback_log_dir, |dir| dir.join("shariawatch/logs"))
    }
}

fn fallback_log_dir() -> PathBuf {
    std::env::temp_dir().join("shariawatch").join("logs")
}

#[must_use]
pub fn active_log_dir() -> PathBuf {
    ACTIVE_LOG_DIR
        .get()
        .cloned()
        .unwrap_or_else(default_log_dir)
}

fn local_offset() -> time::UtcOffset {
    time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC)
}

/// Install the rolling file subscriber; keep the returned guard alive
///
/// The terminal runs full screen, so nothing is ever written to stdout.
pub fn init() -> anyhow::Result<impl Any> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let primary_log_dir = default_log_dir();
    let log_dir = if std::fs::create_dir_all(&primary_log_dir).is_ok() {
        primary_log_dir
    } else {
        let fallback = fallback_log_dir();
        let _ = std::fs::create_dir_all(&fallback);
        fallback
    };

    let _ = ACTIVE_LOG_DIR.set(log_dir.clone());

    let writer = RollingFileAppender::builder()
        .filename_prefix("shariawatch")
        .filename_suffix("log")
        .max_log_files(5)
        .rotation(Rotation::DAILY)
        .build(&log_dir)
        .map_err(|err| anyhow::anyhow!("log init failed (dir: {}): {err}", log_dir.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(writer);

    let timer = fmt::time::OffsetTime::new(
        local_offset(),
        time::format_description::well_known::Rfc3339,
    );
    let file_line = cfg!(debug_assertions);

    let subscriber = fmt::layer()
        .with_ansi(false)
        .with_timer(timer)
        .with_thread_ids(true)
        .with_file(file_line)
        .with_line_number(file_line)
        .with_writer(writer);

    let dirs = "error,shariawatch=debug";
    let dirs = std::env::var(crate::config::LOG).unwrap_or_else(|_| dirs.to_string());
    let subscriber = subscriber.with_filter(tracing_subscriber::EnvFilter::new(dirs));

    tracing_subscriber::registry().with(subscriber).init();
    Ok(guard)
}

fn is_log_file_name(name: &str) -> bool {
    name.starts_with("shariawatch")
        && std::path::Path::new(name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("log"))
}

/// Most recently written log file in the active directory
#[must_use]
pub fn latest_log_file() -> Option<PathBuf> {
    latest_log_file_in(&active_log_dir())
}

fn latest_log_file_in(log_dir: &std::path::Path) -> Option<PathBuf> {
    use std::fs;

    let mut log_files: Vec<PathBuf> = fs::read_dir(log_dir)
        .ok()?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(is_log_file_name)
        })
        .collect();

    log_files.sort_by(|a, b| {
        let time_a = fs::metadata(a).and_then(|m| m.modified()).ok();
        let time_b = fs::metadata(b).and_then(|m| m.modified()).ok();
        match (time_a, time_b) {
            (Some(ta), Some(tb)) => tb.cmp(&ta),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
    });

    log_files.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::{is_log_file_name, latest_log_file_in};
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    struct TempDirGuard {
        path: PathBuf,
    }

    impl TempDirGuard {
        fn new() -> Self {
            let unique = format!(
                "shariawatch-logger-tests-{}",
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_nanos())
                    .unwrap_or_default()
            );
            let path = std::env::temp_dir().join(unique);
            fs::create_dir_all(&path).expect("failed to create temp dir");
            Self { path }
        }
    }

    impl Drop for TempDirGuard {
        fn drop(&mut self) {
            _ = fs::remove_dir_all(&self.path);
        }
    }

    #[test]
    fn accepts_rolling_log_filenames() {
        assert!(is_log_file_name("shariawatch.log"));
        assert!(is_log_file_name("shariawatch.2026-10-17.log"));
        assert!(!is_log_file_name("shariawatch.txt"));
        assert!(!is_log_file_name("other.log"));
    }

    #[test]
    fn returns_latest_log_file() {
        let temp_dir = TempDirGuard::new();

        let old_log = temp_dir.path.join("shariawatch.old.log");
        let new_log = temp_dir.path.join("shariawatch.new.log");
        fs::write(&old_log, "old").expect("failed to write old log");
        std::thread::sleep(Duration::from_millis(20));
        fs::write(&new_log, "new").expect("failed to write new log");
        fs::write(temp_dir.path.join("notes.log"), "x").expect("failed to write other file");

        let selected = latest_log_file_in(&temp_dir.path).expect("latest log not found");
        assert_eq!(selected, new_log);
    }

    #[test]
    fn missing_directory_has_no_log() {
        let path = std::env::temp_dir().join("shariawatch-logger-tests-missing-dir");
        assert_eq!(latest_log_file_in(&path), None);
    }
}
