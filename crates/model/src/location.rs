//! Impact site description and the enrichment merge applied before simulation.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, finite, non_negative, within};

/// Water depth assumed when enrichment marks a site as ocean without bathymetry.
pub const ENRICHED_OCEAN_DEPTH_M: f64 = 3_000.0;

/// Dominant terrain class at the impact site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerrainType {
    Ocean,
    Land,
    Urban,
    Rural,
    Mountain,
    Desert,
    Forest,
    Ice,
}

impl TerrainType {
    pub fn label(self) -> &'static str {
        match self {
            TerrainType::Ocean => "ocean",
            TerrainType::Land => "land",
            TerrainType::Urban => "urban",
            TerrainType::Rural => "rural",
            TerrainType::Mountain => "mountain",
            TerrainType::Desert => "desert",
            TerrainType::Forest => "forest",
            TerrainType::Ice => "ice",
        }
    }

    pub fn is_ocean(self) -> bool {
        matches!(self, TerrainType::Ocean)
    }
}

impl std::str::FromStr for TerrainType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ocean" => Ok(TerrainType::Ocean),
            "land" => Ok(TerrainType::Land),
            "urban" => Ok(TerrainType::Urban),
            "rural" => Ok(TerrainType::Rural),
            "mountain" => Ok(TerrainType::Mountain),
            "desert" => Ok(TerrainType::Desert),
            "forest" => Ok(TerrainType::Forest),
            "ice" => Ok(TerrainType::Ice),
            other => Err(format!("unknown terrain type '{other}'")),
        }
    }
}

/// Raw impact-site parameters as supplied by callers and scenario files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationParams {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    #[serde(default)]
    pub elevation_m: f64,
    pub terrain_type: TerrainType,
    #[serde(default)]
    pub water_depth_m: Option<f64>,
    #[serde(default)]
    pub population_density_per_km2: f64,
    #[serde(default)]
    pub infrastructure_density: f64,
    #[serde(default)]
    pub soil_type: Option<String>,
    #[serde(default)]
    pub bedrock_depth_m: Option<f64>,
}

/// Validated impact site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LocationParams", into = "LocationParams")]
pub struct ImpactLocation {
    latitude_deg: f64,
    longitude_deg: f64,
    elevation_m: f64,
    terrain_type: TerrainType,
    water_depth_m: Option<f64>,
    population_density_per_km2: f64,
    infrastructure_density: f64,
    soil_type: Option<String>,
    bedrock_depth_m: Option<f64>,
}

/// Site data supplied by an external geo-enrichment provider.
///
/// Every field is optional; present values replace the corresponding location field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoEnrichment {
    #[serde(default)]
    pub population_density_per_km2: Option<f64>,
    #[serde(default)]
    pub elevation_m: Option<f64>,
    #[serde(default)]
    pub terrain_type: Option<TerrainType>,
    #[serde(default)]
    pub soil_type: Option<String>,
}

impl ImpactLocation {
    pub fn new(params: LocationParams) -> Result<Self, ModelError> {
        let latitude_deg = within(
            "latitude_deg",
            "within [-90, 90]",
            params.latitude_deg,
            -90.0,
            90.0,
        )?;
        let longitude_deg = within(
            "longitude_deg",
            "within [-180, 180]",
            params.longitude_deg,
            -180.0,
            180.0,
        )?;
        let elevation_m = finite("elevation_m", params.elevation_m)?;
        let water_depth_m = params
            .water_depth_m
            .map(|d| non_negative("water_depth_m", d))
            .transpose()?;
        let population_density_per_km2 = non_negative(
            "population_density_per_km2",
            params.population_density_per_km2,
        )?;
        let infrastructure_density = within(
            "infrastructure_density",
            "within [0, 1]",
            params.infrastructure_density,
            0.0,
            1.0,
        )?;
        let bedrock_depth_m = params
            .bedrock_depth_m
            .map(|d| non_negative("bedrock_depth_m", d))
            .transpose()?;

        Ok(Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
            terrain_type: params.terrain_type,
            water_depth_m,
            population_density_per_km2,
            infrastructure_density,
            soil_type: params.soil_type,
            bedrock_depth_m,
        })
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn elevation_m(&self) -> f64 {
        self.elevation_m
    }

    pub fn terrain_type(&self) -> TerrainType {
        self.terrain_type
    }

    pub fn water_depth_m(&self) -> Option<f64> {
        self.water_depth_m
    }

    pub fn population_density_per_km2(&self) -> f64 {
        self.population_density_per_km2
    }

    pub fn infrastructure_density(&self) -> f64 {
        self.infrastructure_density
    }

    pub fn soil_type(&self) -> Option<&str> {
        self.soil_type.as_deref()
    }

    pub fn bedrock_depth_m(&self) -> Option<f64> {
        self.bedrock_depth_m
    }

    /// Merge enrichment data over this location and re-validate the result.
    pub fn enriched(&self, enrichment: &GeoEnrichment) -> Result<Self, ModelError> {
        let terrain_type = enrichment.terrain_type.unwrap_or(self.terrain_type);
        let water_depth_m = match (terrain_type, self.water_depth_m) {
            (TerrainType::Ocean, None) => Some(ENRICHED_OCEAN_DEPTH_M),
            (_, depth) => depth,
        };
        debug!(
            "enriching site ({:.4}, {:.4}): terrain {} -> {}",
            self.latitude_deg,
            self.longitude_deg,
            self.terrain_type.label(),
            terrain_type.label()
        );

        let mut params = LocationParams::from(self.clone());
        params.terrain_type = terrain_type;
        params.water_depth_m = water_depth_m;
        if let Some(density) = enrichment.population_density_per_km2 {
            params.population_density_per_km2 = density;
        }
        if let Some(elevation) = enrichment.elevation_m {
            params.elevation_m = elevation;
        }
        if let Some(soil) = &enrichment.soil_type {
            params.soil_type = Some(soil.clone());
        }
        Self::new(params)
    }
}

impl TryFrom<LocationParams> for ImpactLocation {
    type Error = ModelError;

    fn try_from(value: LocationParams) -> Result<Self, Self::Error> {
        ImpactLocation::new(value)
    }
}

impl From<ImpactLocation> for LocationParams {
    fn from(value: ImpactLocation) -> Self {
        Self {
            latitude_deg: value.latitude_deg,
            longitude_deg: value.longitude_deg,
            elevation_m: value.elevation_m,
            terrain_type: value.terrain_type,
            water_depth_m: value.water_depth_m,
            population_density_per_km2: value.population_density_per_km2,
            infrastructure_density: value.infrastructure_density,
            soil_type: value.soil_type,
            bedrock_depth_m: value.bedrock_depth_m,
        }
    }
}
