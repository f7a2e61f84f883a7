//! Logging setup for the binaries
//!
//! `RUST_LOG` wins over the configured level when set. Output goes to stderr
//! so rendered screens and exports on stdout stay clean.
//!
//! Configuration is loaded before the configured subscriber exists, so
//! [`load_config`] runs under a scoped bootstrap subscriber at the default
//! level. Skipped config files and ignored `TRENDWAVE_*` values still get
//! reported.

use std::path::Path;

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, ConfigError, LoggingConfig};

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("trendwave={}", config.level).into())
}

/// Install the global subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    if config.format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    }
}

/// Subscriber used while the configuration itself is being loaded
pub fn bootstrap_subscriber<W>(make_writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(env_filter(&LoggingConfig::default()))
        .with(tracing_subscriber::fmt::layer().with_writer(make_writer))
}

/// Load configuration from `path`, or the default locations, with its
/// diagnostics on stderr
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    tracing::subscriber::with_default(bootstrap_subscriber(std::io::stderr), || match path {
        Some(path) => Config::load_with_env(path),
        None => Ok(Config::load_default()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_ignored_overrides_are_reported() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = bootstrap_subscriber(move || writer.clone());

        let config = tracing::subscriber::with_default(subscriber, || {
            let mut config = Config::default();
            config.apply_overrides(|key| match key {
                "TRENDWAVE_DEFAULT_SECTION" => Some("charts".to_string()),
                "TRENDWAVE_ANIMATIONS" => Some("maybe".to_string()),
                _ => None,
            });
            config
        });

        assert_eq!(config, Config::default());
        let output = captured.contents();
        assert!(output.contains("Ignoring TRENDWAVE_DEFAULT_SECTION"));
        assert!(output.contains("Ignoring TRENDWAVE_ANIMATIONS"));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[dashboard]\nsidebar_collapsed = true\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(config.dashboard.sidebar_collapsed);

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[dashboard\n").unwrap();
        assert!(matches!(
            load_config(Some(&bad)),
            Err(ConfigError::Parse { .. })
        ));
    }
}
