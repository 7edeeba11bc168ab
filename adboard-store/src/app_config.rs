use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub search: SearchConfig,
    pub geocoding: GeocodingConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Directory holding one JSON document per storage key.
    pub data_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_radius_km")]
    pub default_radius_km: f64,
    pub min_radius_km: f64,
    pub max_radius_km: f64,
}

fn default_radius_km() -> f64 {
    25.0
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocodingConfig {
    pub base_url: String,
    /// Queries shorter than this skip the lookup entirely.
    pub min_query_len: usize,
    pub result_limit: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    /// Insert the demo listings when the billboard list is empty.
    pub demo_data: bool,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file
            // Default to 'development' env
            // Note that this file is _optional_
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of ADBOARD)
            // Eg.. `ADBOARD_DEBUG=1` would set the `debug` key
            .add_source(config::Environment::with_prefix("ADBOARD").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig {
                data_dir: "data".to_string(),
            },
            search: SearchConfig {
                default_radius_km: 25.0,
                min_radius_km: 5.0,
                max_radius_km: 100.0,
            },
            geocoding: GeocodingConfig {
                base_url: "https://nominatim.openstreetmap.org".to_string(),
                min_query_len: 3,
                result_limit: 5,
            },
            seed: SeedConfig { demo_data: true },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.search.default_radius_km, 25.0);
        assert!(config.search.min_radius_km < config.search.max_radius_km);
        assert_eq!(config.geocoding.min_query_len, 3);
        assert!(config.seed.demo_data);
    }
}
