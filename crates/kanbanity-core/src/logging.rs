use tracing_subscriber::EnvFilter;

/// Environment variable naming a file that receives DEBUG-level logs.
pub const DEBUG_LOG_ENV: &str = "KANBANITY_DEBUG_LOG";

/// Install the global tracing subscriber.
///
/// With `KANBANITY_DEBUG_LOG` set, everything down to DEBUG is appended to
/// that file. Otherwise only warnings reach stderr. `RUST_LOG` overrides the
/// level in both cases. Calling this more than once is harmless.
pub fn init_tracing() -> std::io::Result<()> {
    if let Ok(log_path) = std::env::var(DEBUG_LOG_ENV) {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter_or("debug"))
            .with_writer(std::sync::Mutex::new(log_file))
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter_or("warn"))
            .with_writer(std::io::stderr)
            .try_init();
    }
    Ok(())
}

fn env_filter_or(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}
