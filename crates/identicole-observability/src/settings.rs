use std::path::PathBuf;
use std::sync::OnceLock;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via OBSERVABILITY_ENABLED env var
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true) // Enabled by default
    })
}

/// Log output settings.
///
/// # Environment Variables
///
/// - `LOG_LEVEL`: level for the Identicole crates when `RUST_LOG` is unset (default: `info`)
/// - `LOG_DIR`: directory for daily-rolling JSON logs; unset disables file output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub dir: Option<PathBuf>,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            level: lookup("LOG_LEVEL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "info".to_string()),
            dir: lookup("LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Default filter directive: our crates at `level`, HTTP internals at warn.
    pub fn default_directive(&self) -> String {
        format!(
            "identicole={level},identicole_client={level},identicole_token={level},reqwest=warn,hyper=warn,hyper_util=warn",
            level = self.level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = LogSettings::from_lookup(|_| None);
        assert_eq!(settings.level, "info");
        assert_eq!(settings.dir, None);
    }

    #[test]
    fn test_overrides() {
        let settings = LogSettings::from_lookup(|key| match key {
            "LOG_LEVEL" => Some("debug".to_string()),
            "LOG_DIR" => Some("storage/logs".to_string()),
            _ => None,
        });
        assert_eq!(settings.level, "debug");
        assert_eq!(settings.dir, Some(PathBuf::from("storage/logs")));
        assert!(settings.default_directive().starts_with("identicole=debug"));
    }
}
