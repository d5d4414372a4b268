//! Handles settings for the application. Configuration is read from
//! `settings.toml` (or the file given with `--config`) and from
//! `EXPENSES__*` environment variables, e.g. `EXPENSES__SERVER__PORT=8080`.
use std::time::Duration;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    #[default]
    Memory,
    Sqlite(String),
}

impl Database {
    pub fn url(&self) -> String {
        match self {
            Database::Memory => String::from("sqlite::memory:"),
            Database::Sqlite(path) => format!("sqlite:{path}?mode=rwc"),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub database: Database,
}

impl Server {
    pub fn options(&self) -> server::ServerOptions {
        server::ServerOptions {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new(path: &str) -> Result<Self, ConfigError> {
        with_defaults()?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("EXPENSES").separator("__"))
            .build()?
            .try_deserialize()
    }

    #[cfg(test)]
    fn from_toml(content: &str) -> Result<Self, ConfigError> {
        with_defaults()?
            .add_source(File::from_str(content, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("app.level", "info")?
        .set_default("server.port", 3000)?
        .set_default("server.request_timeout_secs", 30)
}
