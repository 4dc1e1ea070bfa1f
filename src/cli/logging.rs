//! Diagnostic logging for the binary.
//!
//! Library code only emits `tracing` events; this installs a plain fmt
//! subscriber on stderr so stdout stays clean for command output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "FILESEAL_LOG";

/// Install the global subscriber.
///
/// `FILESEAL_LOG` wins when set; otherwise `-v` selects `debug`, `-vv`
/// selects `trace`, and the default is `warn`.  Calling this twice is a
/// no-op.
pub fn init(verbosity: u8) {
    let fallback = match verbosity {
        0 => "warn",
        1 => "fileseal=debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
