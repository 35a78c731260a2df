//! Minimal logger.
//!
//! Prints `[elapsed LEVEL target] message` lines to stderr. Install once at
//! startup with `init_with_level`; later calls are no-ops. With the
//! `tracing` feature a `tracing-subscriber` fmt subscriber can be installed
//! instead, filtered through `RUST_LOG`.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

struct StderrLogger {
    level: LevelFilter,
    started: Instant,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let elapsed = self.started.elapsed().as_secs_f64();
        let mut stderr = std::io::stderr();
        let _ = writeln!(
            stderr,
            "[{:7.3}s {:>5} {}] {}",
            elapsed,
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger with the provided level filter.
///
/// Calling this more than once is a no-op after the first successful
/// initialization.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| StderrLogger {
            level,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// Install a `tracing` fmt subscriber honoring `RUST_LOG` (default `info`).
#[cfg(feature = "tracing")]
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_timer(fmt::time::Uptime::default())
        .with_writer(std::io::stderr)
        .try_init();
}
