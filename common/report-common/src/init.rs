//! Tracing initialization
//!
//! Reporters print their user-facing status on stdout, so all diagnostics
//! are routed to stderr.

use tracing_subscriber::{
    filter::Directive, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Environment variable selecting the log line format
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Shape of the diagnostic lines on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines without ANSI colors
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything but `json` means text
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }

    /// Read the format from `LOG_FORMAT`
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(LOG_FORMAT_VAR).ok().as_deref())
    }
}

/// Filter directive enabling `info` for the reporter crate
pub fn default_directive(crate_name: &str) -> anyhow::Result<Directive> {
    Ok(format!("{}=info", crate_name).parse()?)
}

/// Initialize tracing/logging for a reporter binary
///
/// `RUST_LOG` is honored on top of an `info` default for `crate_name`
/// (e.g., "sysinfo_report"). Fails if a global subscriber is already set.
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(default_directive(crate_name)?);
    let registry = tracing_subscriber::registry().with(filter);
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    match LogFormat::from_env() {
        LogFormat::Json => registry.with(stderr_layer.json()).try_init()?,
        LogFormat::Text => registry.with(stderr_layer.with_ansi(false)).try_init()?,
    }

    Ok(())
}
