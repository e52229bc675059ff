//! Resolved runtime configuration.
//!
//! Settings are loaded exactly once at process start and passed to the
//! components that need them; there is no module-level cache. Sources are
//! layered: serde defaults, then an optional `kindred` config file, then
//! `KINDRED_*` environment variables.

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

/// Which allow-list the login check uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Any name present in the family dataset may log in.
    All,
    /// Only the single configured name may log in.
    Specific,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Whether the config endpoint requires a bearer token.
    pub require_auth: bool,
    pub auth_mode: AuthMode,
    /// The one allowed name in `specific` mode.
    pub specific_name: String,
    /// Display name of the family, also used as the tree title.
    pub family_name: String,
    /// Path of the JSON file holding the family dataset.
    pub data_file: PathBuf,
    /// Listen address for the HTTP server.
    pub bind: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            require_auth: false,
            auth_mode: AuthMode::Specific,
            specific_name: String::new(),
            family_name: "Surname".to_string(),
            data_file: PathBuf::from("config/family-data.json"),
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from file and environment over the defaults.
    /// Intended to be called once, at startup.
    pub fn load() -> Result<Self> {
        // Defaults mirror the Default impl above.
        let settings = Config::builder()
            .set_default("require_auth", false)?
            .set_default("auth_mode", "specific")?
            .set_default("specific_name", "")?
            .set_default("family_name", "Surname")?
            .set_default("data_file", "config/family-data.json")?
            .set_default("bind", "0.0.0.0:8080")?
            .add_source(File::with_name("kindred").required(false))
            // try_parsing so KINDRED_REQUIRE_AUTH=true becomes a bool
            .add_source(Environment::with_prefix("KINDRED").try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
