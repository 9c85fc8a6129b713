use std::net::{Ipv4Addr, SocketAddr};

const DEFAULT_HOST: Ipv4Addr = Ipv4Addr::LOCALHOST;
const DEFAULT_PORT: u16 = 3000;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is not in the correct format: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub addr: SocketAddr,
    /// Bearer token for the admin back office. No token means no writes.
    pub admin_token: Option<String>,
}

impl Config {
    /// Load from the process environment (after `.env` has been applied).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let host = match lookup("HOST") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "HOST", value })?,
            None => DEFAULT_HOST,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let admin_token = lookup("ADMIN_TOKEN").filter(|token| !token.is_empty());

        Ok(Config {
            database_url,
            addr: SocketAddr::from((host, port)),
            admin_token,
        })
    }
}
