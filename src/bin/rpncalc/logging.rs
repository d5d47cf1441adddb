//! Log output of the command line interface.
//!
//! Based on `tracing-subscriber`. Everything is written to stderr so that stdout only carries
//! the output of the calculator.

use std::io;

use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter,
    Layer as _,
};

/// Level used when `RUST_LOG` is not set, raised by every `-v`.
fn default_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global subscriber.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbosity).into())
        .from_env_lossy();

    let stderr_layer = fmt::layer()
        .compact()
        .with_target(true)
        .without_time()
        .with_writer(io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_layer).init();
}
