/// Environment-derived AWS settings.
pub mod config;
/// `playground.toml` agent configuration.
pub mod toml_config;
