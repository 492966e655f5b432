use chrono::NaiveDate;
use rail_core::StationStop;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { event_buffer: default_event_buffer() }
    }
}

fn default_event_buffer() -> usize { 256 }

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Used when RUST_LOG is not set
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_filter() }
    }
}

fn default_filter() -> String {
    "rail_engine=info,rail_booking=info,rail_inventory=info,rail_core=info".into()
}

/// Routes and trains to seed the in-memory catalog with
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
    #[serde(default)]
    pub trains: Vec<TrainConfig>,
    /// Journey dates to set up inventory for at startup
    #[serde(default)]
    pub dates: Vec<NaiveDate>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RouteConfig {
    pub name: String,
    pub stops: Vec<StationStop>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TrainConfig {
    pub number: u32,
    pub name: String,
    /// Name of an entry in `catalog.routes`
    pub route: String,
    pub confirmed: u32,
    pub rac: u32,
    pub waiting: u32,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Optional per-environment overrides, e.g. config/test.toml
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Never checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `RAIL_ENGINE__EVENT_BUFFER=64`
            .add_source(config::Environment::with_prefix("RAIL").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Parse a TOML document directly, without the file and environment layers
    pub fn from_toml(contents: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
