//! Configuration system

pub use serde::{Serialize, Deserialize};

/// Configuration trait
///
/// Implementors pick up file loading and saving for free; the format is
/// chosen by file extension (`.toml` or `.ron`).
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Window settings loaded at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Title bar text
    pub title: String,
    /// Client width in pixels
    pub width: u32,
    /// Client height in pixels
    pub height: u32,
    /// Reveal the window immediately after creation
    pub visible: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "wndshim window".to_string(),
            width: 800,
            height: 600,
            visible: true,
        }
    }
}

impl Config for WindowConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_config() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "wndshim window");
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert!(config.visible);
    }

    #[test]
    fn test_toml_parse() {
        let config: WindowConfig = toml::from_str(
            r#"
            title = "Demo"
            width = 1024
            height = 768
            visible = false
            "#,
        )
        .unwrap();
        assert_eq!(config.title, "Demo");
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert!(!config.visible);
    }

    #[test]
    fn test_toml_round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("wndshim_config_{}.toml", std::process::id()));
        let path = path.to_str().unwrap();

        let config = WindowConfig {
            title: "Round Trip".to_string(),
            width: 640,
            height: 480,
            visible: false,
        };
        config.save_to_file(path).unwrap();
        let loaded = WindowConfig::load_from_file(path).unwrap();
        let _ = std::fs::remove_file(path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unsupported_extension() {
        let path = std::env::temp_dir().join(format!("wndshim_config_{}.yaml", std::process::id()));
        std::fs::write(&path, "title: nope").unwrap();
        let result = WindowConfig::load_from_file(path.to_str().unwrap());
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = WindowConfig::load_from_file("/nonexistent/wndshim.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
