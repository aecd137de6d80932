use std::net::SocketAddr;
use std::path::PathBuf;

pub const SETTINGS_FILE_VAR: &str = "PARLEY_SETTINGS_FILE";
pub const CREDENTIALS_FILE_VAR: &str = "PARLEY_CREDENTIALS_FILE";
pub const FRONTEND_DIR_VAR: &str = "PARLEY_FRONTEND_DIR";
pub const BIND_ADDR_VAR: &str = "PARLEY_BIND_ADDR";

/// Process-level configuration. Everything about generation (region, model,
/// sampling) lives in the settings file instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub settings_file: PathBuf,
    pub credentials_file: PathBuf,
    pub frontend_dir: PathBuf,
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| "0.0.0.0:8000".to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|e| eyre::eyre!("invalid {BIND_ADDR_VAR} `{bind_addr}`: {e}"))?;

        Ok(Self {
            settings_file: lookup(SETTINGS_FILE_VAR)
                .unwrap_or_else(|| "data/settings.json".to_string())
                .into(),
            credentials_file: lookup(CREDENTIALS_FILE_VAR)
                .unwrap_or_else(|| ".credentials".to_string())
                .into(),
            frontend_dir: lookup(FRONTEND_DIR_VAR)
                .unwrap_or_else(|| "frontend".to_string())
                .into(),
            bind_addr,
        })
    }
}
