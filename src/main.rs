//! ramdex binary entrypoint kept minimal. The runtime lives in `ramdex::app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;
use ramdex::args::{Args, determine_log_level};

/// Log timestamp formatter using local time.
struct RamdexTimer;

impl tracing_subscriber::fmt::time::FormatTime for RamdexTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

/// Keeps the non-blocking log writer flushing until process exit.
static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
///
/// Output:
/// - None; logs go to `~/.config/ramdex/logs/ramdex.log`, or stderr when the
///   file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = ramdex::util::paths::logs_dir().join("ramdex.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(RamdexTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(RamdexTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&determine_log_level(&args));
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "ramdex starting");
    if let Err(err) = ramdex::app::run(&args).await {
        tracing::error!(error = %err, "ramdex failed");
        eprintln!("ramdex: {err}");
        std::process::exit(1);
    }
    tracing::info!("ramdex exited");
}
