use dotenvy::dotenv;
use serde::Deserialize;

/// Server configuration, read from `CLIENTS_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Load the twelve fixture rows at startup.
    #[serde(default = "default_seed_fixture")]
    pub seed_fixture: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_seed_fixture() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            seed_fixture: default_seed_fixture(),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn load() -> Result<Self, envy::Error> {
        dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Build a config from explicit key/value pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed("CLIENTS_").from_iter(vars)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
