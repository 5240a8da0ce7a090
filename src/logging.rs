//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by dnsmsg and the `dns-query` binary.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To enable debug level logging:
///   RUST_LOG=DEBUG
///
/// Or to see every compression pointer being followed:
///   RUST_LOG=dnsmsg::base::name=TRACE
///
/// Calling this more than once is harmless. Only the first call installs
/// the subscriber.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}
