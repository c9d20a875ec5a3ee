//! Logging utilities

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// The blanket filter is forced to `info` so the demo applications produce
/// output out of the box; module-qualified `RUST_LOG` directives such as
/// `wndshim=trace` still take precedence.
pub fn init() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
