use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use serde_aux::field_attributes::{deserialize_bool_from_anything, deserialize_number_from_string};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub path: String,
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub run_migrations: bool,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Reads settings from defaults, an optional `configuration` file in the
/// working directory and `TRIVIA_*` environment variables, in that order.
///
/// Nested keys use a double underscore: `TRIVIA_DATABASE__PATH=trivia.db`.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    with_defaults()?
        .add_source(File::with_name("configuration").required(false))
        .add_source(environment())
        .build()?
        .try_deserialize()
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("application.host", "0.0.0.0")?
        .set_default("application.port", 5000)?
        .set_default("database.path", "trivia.db")?
        .set_default("database.run_migrations", true)
}

fn environment() -> Environment {
    Environment::with_prefix("TRIVIA")
        .prefix_separator("_")
        .separator("__")
}
