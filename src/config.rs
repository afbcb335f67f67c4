//! Survey configuration file support.
//!
//! All tunable constants of the model (camera, occulting body, grazing
//! geometry, marginal band, and the survey grid) live in an
//! `occulting.toml` file so that alternate setups are a config edit, not a
//! code edit. Every field is defaulted, so a missing file or an empty table
//! reproduces the canonical Moon + 450 Hz scenario.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use qtty::length::nominal::SolarRadiuses;
use qtty::length::{Kilometers, Parsecs};
use qtty::time::Days;

use crate::algorithms::LimbVelocitySource;
use crate::core::domain::{LimbVelocity, MarginalBand};
use crate::models::{Camera, OccultingBody};
use crate::services::SurveyGrid;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(String),

    #[error("Failed to parse config file: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Survey configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyConfig {
    #[serde(default)]
    pub camera: CameraSettings,
    #[serde(default)]
    pub body: BodySettings,
    #[serde(default)]
    pub limb: LimbSettings,
    #[serde(default)]
    pub band: BandSettings,
    #[serde(default)]
    pub grid: GridSettings,
}

/// Camera settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraSettings {
    #[serde(default = "default_camera_name")]
    pub name: String,
    #[serde(default = "default_frames_per_second")]
    pub frames_per_second: f64,
}

/// Occulting body settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodySettings {
    #[serde(default = "default_body_name")]
    pub name: String,
    #[serde(default = "default_body_radius_km")]
    pub radius_km: f64,
    #[serde(default = "default_body_distance_km")]
    pub distance_km: f64,
    #[serde(default = "default_sidereal_period_days")]
    pub sidereal_period_days: f64,
}

/// Grazing geometry settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimbSettings {
    /// Effective fraction of the mean motion at the contact point.
    #[serde(default = "default_grazing_factor")]
    pub grazing_factor: f64,
    /// Optional direct rate override, e.g. from an ephemeris.
    #[serde(default)]
    pub rate_arcsec_per_sec: Option<f64>,
}

/// Marginal band settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandSettings {
    #[serde(default = "default_min_frames")]
    pub min_frames: u64,
    #[serde(default = "default_max_frames")]
    pub max_frames: u64,
}

/// Grid sweep settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSettings {
    #[serde(default = "default_radius_min_rsun")]
    pub radius_min_rsun: f64,
    #[serde(default = "default_radius_max_rsun")]
    pub radius_max_rsun: f64,
    #[serde(default = "default_axis_steps")]
    pub radius_steps: usize,
    #[serde(default = "default_distance_min_pc")]
    pub distance_min_pc: f64,
    #[serde(default = "default_distance_max_pc")]
    pub distance_max_pc: f64,
    #[serde(default = "default_axis_steps")]
    pub distance_steps: usize,
}

fn default_camera_name() -> String {
    "450 Hz high-speed camera".to_string()
}

fn default_frames_per_second() -> f64 {
    450.0
}

fn default_body_name() -> String {
    "Moon".to_string()
}

fn default_body_radius_km() -> f64 {
    1_737.4
}

fn default_body_distance_km() -> f64 {
    384_472.0
}

fn default_sidereal_period_days() -> f64 {
    27.3
}

fn default_grazing_factor() -> f64 {
    1.0
}

fn default_min_frames() -> u64 {
    2
}

fn default_max_frames() -> u64 {
    3
}

fn default_radius_min_rsun() -> f64 {
    0.1
}

fn default_radius_max_rsun() -> f64 {
    30.0
}

fn default_distance_min_pc() -> f64 {
    1.0
}

fn default_distance_max_pc() -> f64 {
    100.0
}

fn default_axis_steps() -> usize {
    100
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            name: default_camera_name(),
            frames_per_second: default_frames_per_second(),
        }
    }
}

impl Default for BodySettings {
    fn default() -> Self {
        Self {
            name: default_body_name(),
            radius_km: default_body_radius_km(),
            distance_km: default_body_distance_km(),
            sidereal_period_days: default_sidereal_period_days(),
        }
    }
}

impl Default for LimbSettings {
    fn default() -> Self {
        Self {
            grazing_factor: default_grazing_factor(),
            rate_arcsec_per_sec: None,
        }
    }
}

impl Default for BandSettings {
    fn default() -> Self {
        Self {
            min_frames: default_min_frames(),
            max_frames: default_max_frames(),
        }
    }
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            radius_min_rsun: default_radius_min_rsun(),
            radius_max_rsun: default_radius_max_rsun(),
            radius_steps: default_axis_steps(),
            distance_min_pc: default_distance_min_pc(),
            distance_max_pc: default_distance_max_pc(),
            distance_steps: default_axis_steps(),
        }
    }
}

impl SurveyConfig {
    /// Load survey configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(SurveyConfig)` if successful
    /// * `Err(ConfigError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load survey configuration from the default location.
    ///
    /// Searches for `occulting.toml` in the current directory and its
    /// parent; falls back to built-in defaults when no file exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from("occulting.toml"),
            PathBuf::from("../occulting.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Build the configured camera.
    pub fn camera(&self) -> Camera {
        Camera::new(self.camera.name.clone(), self.camera.frames_per_second)
    }

    /// Build the configured occulting body.
    pub fn body(&self) -> OccultingBody {
        OccultingBody {
            name: self.body.name.clone(),
            radius: Kilometers::new(self.body.radius_km),
            distance: Kilometers::new(self.body.distance_km),
            sidereal_period: Days::new(self.body.sidereal_period_days),
        }
    }

    /// Build the limb-rate source: a direct override when configured,
    /// otherwise the body's mean motion scaled by the grazing factor.
    pub fn limb_velocity_source(&self) -> LimbVelocitySource {
        match self.limb.rate_arcsec_per_sec {
            Some(rate) => LimbVelocitySource::Direct(LimbVelocity::new(rate)),
            None => LimbVelocitySource::MeanOrbital {
                period: Days::new(self.body.sidereal_period_days),
                grazing_factor: self.limb.grazing_factor,
            },
        }
    }

    /// Build the configured marginal band.
    pub fn band(&self) -> Result<MarginalBand, ConfigError> {
        MarginalBand::new(self.band.min_frames, self.band.max_frames)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Build the configured survey grid.
    pub fn grid(&self) -> Result<SurveyGrid, ConfigError> {
        let grid = SurveyGrid {
            radius_min: SolarRadiuses::new(self.grid.radius_min_rsun),
            radius_max: SolarRadiuses::new(self.grid.radius_max_rsun),
            radius_steps: self.grid.radius_steps,
            distance_min: Parsecs::new(self.grid.distance_min_pc),
            distance_max: Parsecs::new(self.grid.distance_max_pc),
            distance_steps: self.grid.distance_steps,
        };
        grid.validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_reproduce_the_canonical_scenario() {
        let config = SurveyConfig::default();

        let camera = config.camera();
        assert_eq!(camera.frames_per_second, 450.0);

        let body = config.body();
        assert_eq!(body.name, "Moon");
        assert_eq!(body.radius.value(), 1_737.4);
        assert_eq!(body.distance.value(), 384_472.0);
        assert_eq!(body.sidereal_period.value(), 27.3);

        let band = config.band().unwrap();
        assert_eq!(band.min_frames(), 2);
        assert_eq!(band.max_frames(), 3);

        let grid = config.grid().unwrap();
        assert_eq!(grid.radius_steps, 100);
        assert_eq!(grid.distance_steps, 100);
    }

    #[test]
    fn empty_toml_parses_to_defaults() {
        let config: SurveyConfig = toml::from_str("").unwrap();
        assert_eq!(config.camera.frames_per_second, 450.0);
        assert_eq!(config.body.name, "Moon");
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let toml = r#"
[camera]
frames_per_second = 1000.0

[limb]
grazing_factor = 0.5
"#;
        let config: SurveyConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.camera.frames_per_second, 1000.0);
        assert_eq!(config.camera.name, "450 Hz high-speed camera");
        assert_eq!(config.limb.grazing_factor, 0.5);
        assert_eq!(config.body.sidereal_period_days, 27.3);
    }

    #[test]
    fn direct_rate_override_takes_precedence() {
        let toml = r#"
[limb]
rate_arcsec_per_sec = 0.55
grazing_factor = 0.2
"#;
        let config: SurveyConfig = toml::from_str(toml).unwrap();
        match config.limb_velocity_source() {
            LimbVelocitySource::Direct(rate) => {
                assert_relative_eq!(rate.value(), 0.55, max_relative = 1e-15)
            }
            other => panic!("expected a direct rate, got {:?}", other),
        }
    }

    #[test]
    fn config_round_trips_through_a_file() {
        let toml = r#"
[body]
name = "Phobos"
radius_km = 11.1
distance_km = 9376.0
sidereal_period_days = 0.32

[band]
min_frames = 3
max_frames = 5
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml.as_bytes()).unwrap();

        let config = SurveyConfig::from_file(file.path()).unwrap();
        assert_eq!(config.body().name, "Phobos");
        assert_eq!(config.band().unwrap().min_frames(), 3);
        // Unnamed sections keep their defaults.
        assert_eq!(config.camera().frames_per_second, 450.0);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = SurveyConfig::from_file("/nonexistent/occulting.toml");
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not valid toml [[").unwrap();
        let result = SurveyConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn invalid_band_surfaces_as_config_error() {
        let toml = r#"
[band]
min_frames = 1
max_frames = 3
"#;
        let config: SurveyConfig = toml::from_str(toml).unwrap();
        assert!(matches!(config.band(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn invalid_grid_surfaces_as_config_error() {
        let toml = r#"
[grid]
radius_min_rsun = 50.0
radius_max_rsun = 30.0
"#;
        let config: SurveyConfig = toml::from_str(toml).unwrap();
        assert!(matches!(config.grid(), Err(ConfigError::Invalid(_))));
    }
}
