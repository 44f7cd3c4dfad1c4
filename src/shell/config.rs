use std::env;
use std::net::{IpAddr, Ipv4Addr};

const DEFAULT_PORT: u16 = 8081;

/// Listener configuration, read from the environment. Unset variables fall
/// back to defaults; set-but-invalid values are rejected so a typo cannot
/// silently bind the wrong endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> anyhow::Result<Self> {
        let host = match host {
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("HOST is not a valid IP address: {raw}"))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match port {
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT is not a valid port number: {raw}"))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }
}
