#![allow(clippy::multiple_crate_versions)]

//! Multiview - command-line front end of the mosaic engine.
//!
//! Logs go to stderr so JSON output on stdout stays machine-readable. Set
//! `RUST_LOG` to change the filter, e.g. `RUST_LOG=multiview=debug`.

use std::env;

use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_DIRECTIVES: &str = "multiview=info";

fn main() {
    let directives = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVES.to_owned());
    let env_filter = EnvFilter::builder().parse_lossy(directives);
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = multiview_lib::cli::run() {
        eprintln!("multiview: {err}");
        std::process::exit(1);
    }
}
