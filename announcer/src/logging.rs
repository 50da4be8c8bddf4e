// Tracing setup for the binary. Logs go to stderr; stdout carries the message.
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins when set. Otherwise `-v` raises the announcer crates to
/// debug and `-vv` to trace; dependencies stay at warn.
pub fn filter_for(verbosity: u8) -> EnvFilter {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,rate_announcer={level},shared={level}"))
    })
}

pub fn init_logging(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
