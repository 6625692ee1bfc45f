//! Application configuration loaded from environment variables.
//!
//! Everything has a sensible local-development default, so `cargo run` with
//! the committed `data/` directory works without any environment setup.

use std::env;
use std::path::PathBuf;

use crate::services::geodata::DataSource;
use crate::services::nearby::SearchRadii;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Local directory holding the GeoJSON collections
    pub data_dir: String,
    /// Optional HTTP base URL serving the collections; takes precedence
    /// over `data_dir` when set
    pub data_url: Option<String>,
    /// Per-category search radii
    pub radii: SearchRadii,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            data_dir: "data".to_string(),
            data_url: None,
            radii: SearchRadii::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = SearchRadii::default();

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            data_url: env::var("DATA_URL").ok().filter(|v| !v.trim().is_empty()),
            radii: SearchRadii {
                museums_km: radius_var("MUSEUM_RADIUS_KM", defaults.museums_km)?,
                attractions_km: radius_var("ATTRACTION_RADIUS_KM", defaults.attractions_km)?,
                restaurants_km: radius_var("RESTAURANT_RADIUS_KM", defaults.restaurants_km)?,
                cafes_km: radius_var("CAFE_RADIUS_KM", defaults.cafes_km)?,
            },
        })
    }

    /// Where to load the POI collections from.
    pub fn data_source(&self) -> DataSource {
        match &self.data_url {
            Some(url) => DataSource::BaseUrl(url.clone()),
            None => DataSource::Dir(PathBuf::from(&self.data_dir)),
        }
    }
}

/// Read an optional radius override, failing loudly on unparseable values
/// rather than silently falling back to the default.
fn radius_var(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::Invalid { var: name, value }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}
