//! Tracing subscriber setup

use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{self, format::FmtSpan};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber from the counted debug flag:
/// 0 = warn, 1 = info, 2 = debug, 3 = trace. RUST_LOG overrides the flag.
///
/// Safe to call on every invocation; only the first call installs a
/// subscriber, and an already-set dispatcher (e.g. in tests) is left alone.
pub fn init(verbosity: u8) {
    INIT.call_once(|| {
        let level = match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            3 => LevelFilter::TRACE,
            _ => {
                eprintln!("max debug level is -ddd");
                LevelFilter::TRACE
            }
        };

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter);

        if !tracing::dispatcher::has_been_set() {
            tracing_subscriber::registry()
                .with(fmt_layer)
                .try_init()
                .unwrap_or_else(|e| eprintln!("error: failed to set up logging: {e}"));
        }
    });
}
