//! Tracing initialization for host applications and tests.
//!
//! The engine only emits events; installing a subscriber is up to the caller.
//! These helpers cover the common cases. The filter honours `RUST_LOG`.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

static INIT: Once = Once::new();

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line human readable output.
    #[default]
    Compact,
    /// One JSON object per event, for log shippers.
    Json,
}

/// Initialize compact tracing. Safe to call multiple times.
pub fn init() {
    init_with(LogFormat::Compact);
}

/// Initialize tracing with the given format. Only the first call takes effect.
pub fn init_with(format: LogFormat) {
    INIT.call_once(|| {
        let is_test =
            std::env::var("NEXTEST").is_ok() || std::env::var("CARGO_TARGET_TMPDIR").is_ok();
        let filter = EnvFilter::from_default_env().add_directive(
            if is_test {
                tracing::Level::DEBUG
            } else {
                tracing::Level::INFO
            }
            .into(),
        );

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE);

        let result = match (format, is_test) {
            (LogFormat::Compact, true) => builder.compact().with_test_writer().try_init(),
            (LogFormat::Compact, false) => {
                builder.compact().with_writer(std::io::stderr).try_init()
            }
            (LogFormat::Json, true) => builder.json().with_test_writer().try_init(),
            (LogFormat::Json, false) => builder.json().with_writer(std::io::stderr).try_init(),
        };

        if let Err(e) = result {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
