pub mod app_config;
pub mod bootstrap;

pub use app_config::Config;
pub use bootstrap::{bootstrap, seed_catalog, Engine};
