use clap::Parser;
use std::net::{IpAddr, SocketAddr};

use crate::constants::OPEN_METEO_API_BASE;

/// Runtime settings, read from flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "stateless-weather", version, about = "Stateless weather API gateway")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "WEATHER_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "WEATHER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Base URL of the Open-Meteo API
    #[arg(long, env = "WEATHER_UPSTREAM_URL", default_value = OPEN_METEO_API_BASE)]
    pub upstream_url: String,
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
