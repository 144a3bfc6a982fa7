//! File logging bootstrap.
//!
//! Embedders call [`init_logging`] once at startup; every later call is a
//! no-op so library consumers cannot trip over double initialization.

use std::path::Path;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use once_cell::sync::OnceCell;

const LOG_FILE_BASENAME: &str = "portfolio-dashboard";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Start rotating file logs in `log_dir`.
///
/// The level comes from `RUST_LOG` when set, defaulting to `info`. Returns a
/// human-readable message when the logger cannot start; already-initialized
/// is not an error.
pub fn init_logging(log_dir: &Path) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    std::fs::create_dir_all(log_dir)
        .map_err(|e| format!("failed to create log directory {}: {}", log_dir.display(), e))?;

    let handle = Logger::try_with_env_or_str("info")
        .map_err(|e| format!("invalid log specification: {}", e))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|e| format!("failed to start logger: {}", e))?;

    let _ = LOGGER.set(handle);
    log::info!("logging started in {}", log_dir.display());
    Ok(())
}

/// Whether file logging is active.
pub fn logging_active() -> bool {
    LOGGER.get().is_some()
}
