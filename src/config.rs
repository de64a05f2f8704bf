use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Startup settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct SketchConfig {
    /// Width and height of the square canvas in logical pixels
    pub canvas_size: f32,
    pub thin_thickness: f32,
    pub thick_thickness: f32,
    pub sticker_size: f32,
    /// Stickers offered before the user adds any
    pub stickers: Vec<String>,
    /// Text pre-filled in the custom sticker prompt
    pub custom_sticker_default: String,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_size: 256.0,
            thin_thickness: 2.0,
            thick_thickness: 4.0,
            sticker_size: 36.0,
            stickers: vec!["🍙".to_owned(), "🥟".to_owned(), "🍜".to_owned()],
            custom_sticker_default: "🧽".to_owned(),
        }
    }
}

impl SketchConfig {
    pub fn load<A: AsRef<Path>>(path: A) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the first command line argument or [`CONFIG_ENV_VAR`],
    /// falling back to defaults when neither is set
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::args_os()
            .nth(1)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR));

        match path {
            Some(path) => {
                log::info!("Loading config from {}", Path::new(&path).display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("canvas_size", self.canvas_size),
            ("thin_thickness", self.thin_thickness),
            ("thick_thickness", self.thick_thickness),
            ("sticker_size", self.sticker_size),
        ];
        for (name, value) in sizes {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.thin_thickness >= self.thick_thickness {
            return Err(ConfigError::Invalid(format!(
                "thin_thickness ({}) must be less than thick_thickness ({})",
                self.thin_thickness, self.thick_thickness
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = SketchConfig::from_json("{}").unwrap();
        assert_eq!(config, SketchConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            SketchConfig::from_json(r#"{ "thick_thickness": 8, "stickers": ["⭐"] }"#).unwrap();
        assert_eq!(config.thick_thickness, 8.0);
        assert_eq!(config.thin_thickness, 2.0);
        assert_eq!(config.stickers, vec!["⭐".to_owned()]);
    }

    #[test]
    fn test_rejects_non_positive_sizes() {
        let err = SketchConfig::from_json(r#"{ "sticker_size": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_thin_not_below_thick() {
        let err =
            SketchConfig::from_json(r#"{ "thin_thickness": 5, "thick_thickness": 4 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = SketchConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SketchConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
