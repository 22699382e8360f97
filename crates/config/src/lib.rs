//! Scenario manifests: an asteroid, an impact site, and run options.

use std::fs::File;
use std::path::{Path, PathBuf};

use impact_model::{AsteroidParams, GeoEnrichment, LocationParams};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One impact scenario parsed from a catalogue.
///
/// Asteroid and location stay as raw parameter blocks here; validation happens
/// when they are turned into model values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub asteroid: AsteroidParams,
    pub location: LocationParams,
    #[serde(default)]
    pub enrichment: Option<GeoEnrichment>,
    #[serde(default)]
    pub mitigation: Option<MitigationConfig>,
    #[serde(default)]
    pub enhance: bool,
    #[serde(default = "default_include_zones")]
    pub include_zones: bool,
}

/// Requested deflection for a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MitigationConfig {
    pub dv_mps: f64,
    #[serde(default)]
    pub method: Option<String>,
}

fn default_include_zones() -> bool {
    true
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("scenario '{0}' not found")]
    NotFound(String),
}

/// Load scenarios from a YAML list, a single TOML file, or a directory of TOML files.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    load_records(path)
}

/// Case-insensitive lookup by scenario name.
pub fn find_scenario<'a>(
    scenarios: &'a [ScenarioConfig],
    name: &str,
) -> Result<&'a ScenarioConfig, ConfigError> {
    scenarios
        .iter()
        .find(|scenario| scenario.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| ConfigError::NotFound(name.to_string()))
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        Ok(vec![toml::from_str(&contents)?])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();

    let mut records = Vec::with_capacity(entries.len());
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        records.push(toml::from_str(&contents)?);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
