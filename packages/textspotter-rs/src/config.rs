//! Configuration management
//!
//! Settings come from an optional TOML file; command line flags are applied on
//! top of it (see [`crate::cli::Args::apply`]).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use textspotter_ffi::default_library_path;
use tracing::debug;

use crate::annotate::CrosshairStyle;
use crate::driver::{DriverOptions, Mode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Image to search
    pub image_path: Option<PathBuf>,

    /// Native textspotter library
    pub library_path: PathBuf,

    /// Show the annotated image after a match (interactive mode only)
    pub display: bool,

    /// Where to save the annotated image, if anywhere
    pub output_path: Option<PathBuf>,

    /// Decode the image here and use the in-memory entry point
    pub in_memory: bool,

    pub crosshair: CrosshairStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_path: None,
            library_path: default_library_path(),
            display: true,
            output_path: None,
            in_memory: false,
            crosshair: CrosshairStyle::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("reading config from {}", path.display());
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn driver_options(&self, mode: Mode, json: bool) -> DriverOptions {
        DriverOptions {
            mode,
            display: self.display,
            output_path: self.output_path.clone(),
            in_memory: self.in_memory,
            json,
            crosshair: self.crosshair,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.image_path.is_none());
        assert!(config.display);
        assert!(!config.in_memory);
        assert_eq!(config.library_path, default_library_path());
        assert_eq!(config.crosshair, CrosshairStyle::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            image_path = "pictures/home.png"

            [crosshair]
            thickness = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.image_path, Some(PathBuf::from("pictures/home.png")));
        assert_eq!(config.library_path, default_library_path());
        assert_eq!(config.crosshair.thickness, 4);
        assert_eq!(config.crosshair.color, [255, 0, 0]);
    }

    #[test]
    fn test_full_toml() {
        let config = Config::from_toml(
            r#"
            image_path = "home.png"
            library_path = "vendor/textspotter.dll"
            display = false
            output_path = "annotated.png"
            in_memory = true
            crosshair = { color = [0, 255, 0], thickness = 1 }
            "#,
        )
        .unwrap();

        assert_eq!(config.library_path, PathBuf::from("vendor/textspotter.dll"));
        assert!(!config.display);
        assert!(config.in_memory);
        assert_eq!(config.output_path, Some(PathBuf::from("annotated.png")));
        assert_eq!(config.crosshair.color, [0, 255, 0]);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml("display = \"yes\"").is_err());
    }

    #[test]
    fn test_missing_file_mentions_path() {
        let err = Config::load(Some(Path::new("no/such/textspotter.toml"))).unwrap_err();
        assert!(format!("{:#}", err).contains("no/such/textspotter.toml"));
    }

    #[test]
    fn test_driver_options() {
        let config = Config {
            output_path: Some(PathBuf::from("out.png")),
            ..Default::default()
        };
        let options = config.driver_options(Mode::Scripted, true);
        assert_eq!(options.mode, Mode::Scripted);
        assert!(options.json);
        assert_eq!(options.output_path, Some(PathBuf::from("out.png")));
    }
}
