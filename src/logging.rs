use chrono::Local;
use log::LevelFilter;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Route the logger to a file under `data_dir`. The TUI owns the terminal,
/// so nothing may be written to stdout/stderr while it runs.
///
/// Returns the log file path so the caller can mention it on shutdown.
pub fn init(data_dir: &Path, verbose: bool) -> io::Result<PathBuf> {
    let path = data_dir.join(format!("wordle-helper-{}.log", Local::now().format("%Y%m%d")));
    let file = File::options().append(true).create(true).open(&path)?;

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(path)
}

// Verbose tracing macros, compiled out of release builds.

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}
