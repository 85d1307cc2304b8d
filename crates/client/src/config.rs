//! CLI configuration from the environment.
use std::env;
use std::path::PathBuf;

/// Settings shared by every subcommand.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub logging: LoggingConfig,
    /// Directory content paths are resolved against.
    pub content_root: PathBuf,
    /// Content config file; built-in defaults apply when unset.
    pub content_config: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            content_root: PathBuf::from("."),
            content_config: None,
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `REPUGNANT_LOG_DIR` - Directory for the log file (default: platform cache dir)
    /// - `REPUGNANT_FILE_LOG` - Also log to a file (default: false)
    /// - `REPUGNANT_CONTENT_ROOT` - Root for relative content paths (default: `.`)
    /// - `REPUGNANT_CONTENT_CONFIG` - Content config TOML file (default: none)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("REPUGNANT_LOG_DIR") {
            config.logging.log_dir = Some(dir);
        }
        if let Some(enabled) = read_env_bool("REPUGNANT_FILE_LOG") {
            config.logging.file = enabled;
        }
        if let Some(root) = read_env::<PathBuf>("REPUGNANT_CONTENT_ROOT") {
            config.content_root = root;
        }
        if let Some(path) = read_env::<PathBuf>("REPUGNANT_CONTENT_CONFIG") {
            config.content_config = Some(path);
        }

        config
    }
}

/// Where and whether to write log output besides stderr.
#[derive(Clone, Debug, Default)]
pub struct LoggingConfig {
    pub file: bool,
    pub log_dir: Option<PathBuf>,
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
