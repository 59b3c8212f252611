//! File logging under the data directory
//!
//! Everything goes to `<data_dir>/cashplan.log`; stdout is reserved for the
//! reports. The log is trimmed at startup once it outgrows `LogRotation`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "cashplan.log";

const ROTATED_MARKER: &[u8] = b"--- Log rotated (older entries removed) ---\n";

/// Size limits applied to the log file at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRotation {
    /// Rotate once the file is larger than this
    pub max_bytes: u64,
    /// Tail kept after rotating, cut back to a line start
    pub keep_bytes: u64,
}

impl Default for LogRotation {
    fn default() -> Self {
        Self {
            max_bytes: 5 * 1024 * 1024,
            keep_bytes: 1024 * 1024,
        }
    }
}

impl LogRotation {
    /// Trim `path` to its most recent whole lines if it is over the limit.
    ///
    /// Returns the number of bytes dropped, or `None` when nothing was done.
    pub fn apply(&self, path: &Path) -> io::Result<Option<u64>> {
        let size = match fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        if size <= self.max_bytes {
            return Ok(None);
        }

        let mut tail = Vec::new();
        {
            let mut file = File::open(path)?;
            file.seek(SeekFrom::Start(size.saturating_sub(self.keep_bytes)))?;
            file.read_to_end(&mut tail)?;
        }
        let line_start = tail.iter().position(|&b| b == b'\n').map_or(0, |i| i + 1);
        let kept = &tail[line_start..];

        let mut file = File::create(path)?;
        file.write_all(ROTATED_MARKER)?;
        file.write_all(kept)?;
        Ok(Some(size - kept.len() as u64))
    }
}

/// Install the global subscriber writing to `{data_dir}/cashplan.log`.
///
/// `RUST_LOG` overrides `level`; the engine crate logs at `warn` unless
/// overridden.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);
    let rotation = LogRotation::default().apply(&log_path);

    let file = OpenOptions::new().create(true).append(true).open(&log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cashplan={level},cashplan_core=warn")));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    match rotation {
        Ok(Some(dropped)) => tracing::info!(dropped, "log file rotated"),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "log rotation failed"),
    }
    tracing::info!(log_path = %log_path.display(), "cashplan logging initialized");
    Ok(())
}
