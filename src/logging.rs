//! Log subscriber for the CLI. Everything goes to stderr; stdout carries compiled output only.

use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    /// `NIP13_LOG_FORMAT` = `compact` | `pretty` | `json`.
    pub fn from_env() -> Self {
        std::env::var("NIP13_LOG_FORMAT").ok().as_deref().and_then(Self::parse).unwrap_or_default()
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Some(LogFormat::Compact),
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// `RUST_LOG` filter (default `info`) with the format from [`LogFormat::from_env`].
pub fn init_logging() {
    init_logging_with(LogFormat::from_env())
}

/// A second call is a no-op.
pub fn init_logging_with(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt::Subscriber::builder().with_env_filter(env_filter).with_writer(std::io::stderr);

    let _ = match format {
        LogFormat::Compact => builder.compact().with_target(false).try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
