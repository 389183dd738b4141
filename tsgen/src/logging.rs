//! Tracing setup.
//!
//! The subscriber is only installed when `TSGEN_LOG` or `RUST_LOG` is set.
//! `TSGEN_LOG` wins when both are present and uses the same filter syntax
//! (e.g. `debug`, `tsgen_typescript=trace`). Output goes to stderr so it
//! never mixes with rendered code on stdout.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = match std::env::var("TSGEN_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) if std::env::var("RUST_LOG").is_ok() => EnvFilter::from_default_env(),
        Err(_) => return,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
