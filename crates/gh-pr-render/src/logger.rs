//! Logging to stderr using env_logger
//!
//! Rendered HTML goes to stdout, so diagnostics must never share it.
//! The level defaults to `warn` and can be raised with `RUST_LOG`.

/// Initialize stderr logging
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .init();
}
