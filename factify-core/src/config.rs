use config::{Config, File};
use serde::Deserialize;

use crate::error::FactifyError;

#[derive(Debug, Deserialize, Clone)]
pub struct FactifyConfig {
    pub service: ServiceConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl FactifyConfig {
    pub fn load(path: &str) -> Result<Self, FactifyError> {
        let s = Config::builder()
            .add_source(File::with_name(path))
            .build()?;
        Ok(s.try_deserialize()?)
    }
}
