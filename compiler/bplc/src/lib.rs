//! Boogie front-end driver.
//!
//! Parses every named file on the rayon pool, then reports diagnostics
//! in the order the files were given.

mod args;
mod driver;

pub use args::{parse_args, ArgsError, Command, DriverOptions, USAGE};
pub use driver::{parse_all, report, FileResult, Summary};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber when `RUST_LOG` is set.
///
/// Logs go to stderr so they never interleave with printed programs.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
