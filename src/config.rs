//! Configuration file handling for donut-term.
//!
//! Loads configuration from `~/.config/donut-term/config.toml` or a custom path,
//! and merges it with command-line overrides into validated [`Settings`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::pacer::{duration_from_millis, PacerConfig, DEFAULT_FRAME_MS, DEFAULT_SAFETY_MARGIN_MS};
use crate::scene::SceneParams;

/// Configuration file structure for donut-term.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub scene: SceneConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct SceneConfig {
    pub r1: Option<f64>,
    pub r2: Option<f64>,
    pub k2: Option<f64>,
    pub ratio: Option<f64>,
    pub wander: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct TimingConfig {
    pub frame_ms: Option<f64>,
    pub safety_margin_ms: Option<f64>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct DebugConfig {
    pub overlay: Option<bool>,
}

/// Values given on the command line; `None`/`false` defer to the config file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    pub r1: Option<f64>,
    pub r2: Option<f64>,
    pub k2: Option<f64>,
    pub ratio: Option<f64>,
    pub frame_ms: Option<f64>,
    pub wander: bool,
    pub debug: bool,
}

/// Fully resolved run settings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Settings {
    pub scene: SceneParams,
    pub pacer: PacerConfig,
}

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

impl Config {
    /// Load configuration from a file path.
    ///
    /// Without an explicit path the default location is used, and a missing
    /// file there simply yields the defaults. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::read(path)
            }
            None => {
                let path = default_path();
                if path.exists() {
                    Self::read(&path)
                } else {
                    log::debug!("no config file at {}, using defaults", path.display());
                    Ok(Config::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Merge settings: CLI args > config file > built-in defaults.
    pub fn resolve(&self, overrides: &Overrides) -> Result<Settings, ConfigError> {
        let defaults = SceneParams::default();

        let scene = SceneParams {
            r1: positive("r1", overrides.r1.or(self.scene.r1).unwrap_or(defaults.r1))?,
            r2: positive("r2", overrides.r2.or(self.scene.r2).unwrap_or(defaults.r2))?,
            k2: positive("k2", overrides.k2.or(self.scene.k2).unwrap_or(defaults.k2))?,
            ratio: positive(
                "ratio",
                overrides.ratio.or(self.scene.ratio).unwrap_or(defaults.ratio),
            )?,
            wander: overrides.wander || self.scene.wander.unwrap_or(defaults.wander),
        };

        if scene.k2 <= scene.r1 + scene.r2 {
            log::warn!(
                "k2 ({}) does not exceed r1 + r2 ({}); parts of the torus reach the viewer",
                scene.k2,
                scene.r1 + scene.r2
            );
        }

        let frame_ms = positive(
            "frame_ms",
            overrides
                .frame_ms
                .or(self.timing.frame_ms)
                .unwrap_or(DEFAULT_FRAME_MS),
        )?;
        let safety_margin_ms = self
            .timing
            .safety_margin_ms
            .unwrap_or(DEFAULT_SAFETY_MARGIN_MS);
        if !safety_margin_ms.is_finite() || safety_margin_ms < 0.0 {
            return Err(ConfigError::Invalid {
                key: "safety_margin_ms",
                message: format!("must be zero or greater, got {}", safety_margin_ms),
            });
        }

        let pacer = PacerConfig {
            target: duration_from_millis(frame_ms),
            safety_margin: duration_from_millis(safety_margin_ms),
            debug: overrides.debug || self.debug.overlay.unwrap_or(false),
        };

        Ok(Settings { scene, pacer })
    }
}

fn positive(key: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Invalid {
            key,
            message: format!("must be a positive number, got {}", value),
        })
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("donut-term").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/donut-term/config.toml")
        })
}

/// Contents written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# donut-term configuration

[scene]
# Tube radius
r1 = 1.0
# Distance from the torus centre to the tube centre
r2 = 2.0
# Distance from the viewer to the torus centre
k2 = 5.0
# Width/height correction for terminal cells
ratio = 2.0
# Let the torus drift around the screen
wander = false

[timing]
# Target frame duration in milliseconds (33.3 = ~30 FPS)
frame_ms = 33.3
# Slack subtracted from every sleep, in milliseconds
safety_margin_ms = 1.0

[debug]
# Show frame timing in the bottom rows
overlay = false
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = Config::default().resolve(&Overrides::default()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.pacer.target, Duration::from_micros(33_300));
    }

    #[test]
    fn test_load_explicit_file() {
        let file = write_config(
            r#"
[scene]
r1 = 0.5
wander = true

[timing]
frame_ms = 16.0

[debug]
overlay = true
"#,
        );
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.scene.r1, Some(0.5));
        assert_eq!(config.scene.r2, None);

        let settings = config.resolve(&Overrides::default()).unwrap();
        assert_eq!(settings.scene.r1, 0.5);
        assert_eq!(settings.scene.r2, 2.0);
        assert!(settings.scene.wander);
        assert_eq!(settings.pacer.target, Duration::from_millis(16));
        assert!(settings.pacer.debug);
    }

    #[test]
    fn test_default_config_text_parses() {
        let file = write_config(DEFAULT_CONFIG);
        let config = Config::load(Some(file.path())).unwrap();
        let settings = config.resolve(&Overrides::default()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        let file = write_config("");
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_cli_overrides_file() {
        let config = Config {
            scene: SceneConfig {
                k2: Some(8.0),
                ratio: Some(1.5),
                ..Default::default()
            },
            timing: TimingConfig {
                frame_ms: Some(50.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let overrides = Overrides {
            k2: Some(6.0),
            frame_ms: Some(20.0),
            debug: true,
            ..Default::default()
        };
        let settings = config.resolve(&overrides).unwrap();
        assert_eq!(settings.scene.k2, 6.0);
        assert_eq!(settings.scene.ratio, 1.5);
        assert_eq!(settings.pacer.target, Duration::from_millis(20));
        assert!(settings.pacer.debug);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let file = write_config("[scene]\nr1 = \"big\"\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let overrides = Overrides {
            r1: Some(0.0),
            ..Default::default()
        };
        let err = Config::default().resolve(&overrides).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "r1", .. }));

        let overrides = Overrides {
            frame_ms: Some(f64::NAN),
            ..Default::default()
        };
        let err = Config::default().resolve(&overrides).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "frame_ms", .. }));
    }

    #[test]
    fn test_rejects_negative_safety_margin() {
        let config = Config {
            timing: TimingConfig {
                safety_margin_ms: Some(-1.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = config.resolve(&Overrides::default()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "safety_margin_ms",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_safety_margin_allowed() {
        let config = Config {
            timing: TimingConfig {
                safety_margin_ms: Some(0.0),
                ..Default::default()
            },
            ..Default::default()
        };
        let settings = config.resolve(&Overrides::default()).unwrap();
        assert_eq!(settings.pacer.safety_margin, Duration::ZERO);
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        let path = default_path();
        assert!(path.ends_with("donut-term/config.toml"));
    }
}
