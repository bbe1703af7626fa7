//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::theme::Theme;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    /// Key used to sign flash message cookies; at least 64 bytes.
    pub secret: String,
    #[serde(default)]
    pub theme: Theme,
}
