// Configuration for the storefront TUI
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/vitrine/config.toml)
// 3. Built-in defaults (lowest priority)
//
// The theme toggle writes back through `save()`, so the file doubles as the
// persistent store for the dark-mode flag.

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Feature flags for optional page behaviors (opt-out: default enabled)
#[derive(Debug, Clone)]
pub struct Features {
    /// Discount popup: show the offer toast a few seconds after launch
    pub discount_popup: bool,

    /// Reveal animations: fade sections in as they enter the viewport.
    /// Disabled, every section renders at rest from the first frame.
    pub reveal_animations: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            discount_popup: true,
            reveal_animations: true,
        }
    }
}

/// Log file rotation cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl LogRotation {
    fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "hourly" => LogRotation::Hourly,
            "never" => LogRotation::Never,
            _ => LogRotation::Daily,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LogRotation::Hourly => "hourly",
            LogRotation::Daily => "daily",
            LogRotation::Never => "never",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Also write logs to rotating files (off by default; the TUI keeps
    /// its own in-memory buffer either way)
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_prefix: String,
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "vitrine".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "dark" or "light"
    pub theme: String,

    /// Seconds after launch before the discount popup appears
    pub popup_delay_secs: u64,

    /// Feature flags for optional page behaviors
    pub features: Features,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Feature flags as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileFeatures {
    discount_popup: Option<bool>,
    reveal_animations: Option<bool>,
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
    file_prefix: Option<String>,
    file_rotation: Option<String>,
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    theme: Option<String>,
    popup_delay_secs: Option<u64>,

    /// Optional [features] section
    features: Option<FileFeatures>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/vitrine/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("vitrine").join("config.toml"))
    }

    /// Create config template if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        let template = r#"# vitrine configuration
# Uncomment and modify options as needed

# Theme: "dark" or "light" (the in-app toggle writes this back)
# theme = "dark"

# Seconds after launch before the discount popup appears
# popup_delay_secs = 5

# Feature flags (default: all enabled)
# [features]
# discount_popup = true     # Show the offer toast after launch
# reveal_animations = true  # Fade sections in as they scroll into view

# Logging configuration
# [logging]
# level = "info"            # trace, debug, info, warn, error (RUST_LOG overrides)
# file_enabled = false      # Also write logs to rotating files
# file_dir = "./logs"
# file_prefix = "vitrine"
# file_rotation = "daily"   # hourly, daily, never
"#;

        // Write template (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                FileConfig::default()
            }),
            Err(_) => FileConfig::default(), // File doesn't exist, use defaults
        }
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# vitrine configuration

# Theme: "dark" or "light" (the in-app toggle writes this back)
theme = "{theme}"

# Seconds after launch before the discount popup appears
popup_delay_secs = {popup_delay}

# Feature flags
[features]
discount_popup = {popup}
reveal_animations = {reveal}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_prefix = "{file_prefix}"
file_rotation = "{file_rotation}"
"#,
            theme = self.theme,
            popup_delay = self.popup_delay_secs,
            popup = self.features.discount_popup,
            reveal = self.features.reveal_animations,
            log_level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_prefix = self.logging.file_prefix,
            file_rotation = self.logging.file_rotation.name(),
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();

        // Theme: env > file > default
        let theme = std::env::var("VITRINE_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or_else(|| "dark".to_string());

        // Popup delay: env > file > default (5s, matching the page)
        let popup_delay_secs = std::env::var("VITRINE_POPUP_DELAY")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.popup_delay_secs)
            .unwrap_or(5);

        // Feature flags: file config only (env vars would be verbose)
        // Default: enabled (opt-out pattern)
        let file_features = file.features.unwrap_or_default();
        let features = Features {
            discount_popup: file_features.discount_popup.unwrap_or(true),
            reveal_animations: file_features.reveal_animations.unwrap_or(true),
        };

        // Logging settings: file config only (RUST_LOG env var handled in main.rs)
        let file_logging = file.logging.unwrap_or_default();
        let defaults = LoggingConfig::default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or(defaults.level),
            file_enabled: file_logging.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
            file_prefix: file_logging.file_prefix.unwrap_or(defaults.file_prefix),
            file_rotation: file_logging
                .file_rotation
                .as_deref()
                .map(LogRotation::from_name)
                .unwrap_or(defaults.file_rotation),
        };

        Self {
            theme,
            popup_delay_secs,
            features,
            logging,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            popup_delay_secs: 5,
            features: Features::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_toml_round_trips_through_the_file_parser() {
        let mut config = Config::default();
        config.theme = "light".to_string();
        config.popup_delay_secs = 9;
        config.features.discount_popup = false;
        config.logging.level = "debug".to_string();
        config.logging.file_rotation = LogRotation::Hourly;

        let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
        assert_eq!(parsed.theme.as_deref(), Some("light"));
        assert_eq!(parsed.popup_delay_secs, Some(9));
        assert_eq!(parsed.features.unwrap().discount_popup, Some(false));
        let logging = parsed.logging.unwrap();
        assert_eq!(logging.level.as_deref(), Some("debug"));
        assert_eq!(logging.file_rotation.as_deref(), Some("hourly"));
    }

    #[test]
    fn rotation_names_round_trip() {
        for rotation in [LogRotation::Hourly, LogRotation::Daily, LogRotation::Never] {
            assert_eq!(LogRotation::from_name(rotation.name()), rotation);
        }
        assert_eq!(LogRotation::from_name("weekly"), LogRotation::Daily);
    }

    #[test]
    fn defaults_match_the_page() {
        let config = Config::default();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.popup_delay_secs, 5);
        assert!(config.features.discount_popup);
        assert!(config.features.reveal_animations);
        assert!(!config.logging.file_enabled);
    }
}
