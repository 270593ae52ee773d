use std::{fs::OpenOptions, path::PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard};
use tracing_subscriber::{prelude::*, EnvFilter};

pub fn log_path() -> Option<PathBuf> {
    let base = BaseDirs::new()?;
    Some(base.data_dir().join("cmdbar").join("cmdbar.log"))
}

/// Install a file-backed subscriber. The terminal is in raw mode, so nothing
/// goes to stdout/stderr. Keep the returned guard alive until exit.
pub fn init() -> Result<Option<WorkerGuard>> {
    let Some(path) = log_path() else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create log dir: {}", parent.display()))?;
    }
    let mut opts = OpenOptions::new();
    opts.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o600);
    }
    let file = opts
        .open(&path)
        .with_context(|| format!("open log file: {}", path.display()))?;
    let (writer, guard) = non_blocking(file);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cmdbar=info,cmdbar_core=info,tui=info,history=info"));
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false)
        .with_filter(filter);
    let _ = tracing_subscriber::registry().with(layer).try_init();
    Ok(Some(guard))
}
