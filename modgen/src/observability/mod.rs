//! Logging setup
//!
//! Diagnostics go through `tracing` and are written to stderr so they never
//! mix with generated output or JSON printed on stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise the level follows the number of `-v`
/// flags given on the command line (see [`LogLevel::from_verbosity`]).
///
/// # Example
///
/// ```rust,no_run
/// use modgen::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init(1)?;
/// tracing::info!("scaffolding started");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let level = LogLevel::from_verbosity(verbosity);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.directive()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(cfg!(debug_assertions))
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}

/// Default log level selected from `-v` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Warnings and errors only
    Warn,
    /// Per-file progress
    Info,
    /// Parser and lookup decisions
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Map a `-v` count to a level
    #[must_use]
    pub const fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// `EnvFilter` directive for this level
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Info => "info,modgen=info,modgen_cli_lib=info",
            Self::Debug => "info,modgen=debug,modgen_cli_lib=debug",
            Self::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(LogLevel::from_verbosity(0), LogLevel::Warn);
        assert_eq!(LogLevel::from_verbosity(1), LogLevel::Info);
        assert_eq!(LogLevel::from_verbosity(2), LogLevel::Debug);
        assert_eq!(LogLevel::from_verbosity(9), LogLevel::Trace);
    }

    #[test]
    fn test_directives_parse() {
        for level in [LogLevel::Warn, LogLevel::Info, LogLevel::Debug, LogLevel::Trace] {
            assert!(EnvFilter::try_new(level.directive()).is_ok());
        }
    }
}
