//! Slider configuration, loadable from TOML.
//!
//! ```toml
//! orientation = "vertical"
//! preview_enabled = true
//! border_width = 1.5
//! border_color = "00000028"
//! base_color = "3B82F6"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::SolidColor;
use crate::constants;
use crate::error::ConfigError;
use crate::orientation::Orientation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub orientation: Orientation,
    pub preview_enabled: bool,
    pub border_width: f64,
    /// Hex, `RRGGBB` or `RRGGBBAA`.
    pub border_color: String,
    /// Hex, `RRGGBB`. Alpha is ignored.
    pub base_color: String,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            preview_enabled: true,
            border_width: constants::DEFAULT_BORDER_WIDTH,
            border_color: constants::DEFAULT_BORDER_COLOR.to_string(),
            base_color: SolidColor::default().to_hex(),
        }
    }
}

impl SliderConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: SliderConfig = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&src)?;
        log::debug!("loaded slider config from {}", path.display());
        Ok(config)
    }

    /// Check that both colors parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parsed_base_color()?;
        self.parsed_border_color()?;
        Ok(())
    }

    pub fn parsed_base_color(&self) -> Result<SolidColor, ConfigError> {
        parse_color("base_color", &self.base_color)
    }

    pub fn parsed_border_color(&self) -> Result<SolidColor, ConfigError> {
        parse_color("border_color", &self.border_color)
    }

    /// Border width, never negative.
    pub fn border_width(&self) -> f64 {
        if self.border_width.is_finite() {
            self.border_width.max(0.0)
        } else {
            0.0
        }
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<SolidColor, ConfigError> {
    SolidColor::from_hex(value).ok_or_else(|| ConfigError::InvalidColor {
        field,
        value: value.to_string(),
    })
}
