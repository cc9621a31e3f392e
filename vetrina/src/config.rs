use std::{env, net::SocketAddr, time::Duration};

use anyhow::{anyhow, Result};
use vetrina_views::InfluxConfig;

pub const DEFAULT_LISTEN: &str = "0.0.0.0:3333";

/// Capacity of the record queue between handlers and the store worker.
pub const DEFAULT_RECORD_QUEUE: usize = 256;

/// Runtime settings, read once at startup from `VETRINA_*` variables.
/// Every variable is optional; the defaults point at a local InfluxDB.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen: SocketAddr,
    pub influx: InfluxConfig,
    pub record_queue: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let listen = env::var("VETRINA_LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_owned());
        let listen = listen
            .parse()
            .map_err(|err| anyhow!("VETRINA_LISTEN `{listen}` is not a socket address: {err}"))?;

        let mut influx = InfluxConfig::default();

        if let Ok(url) = env::var("VETRINA_INFLUX_URL") {
            influx.url = url;
        }

        if let Ok(database) = env::var("VETRINA_INFLUX_DB") {
            influx.database = database;
        }

        if let Ok(timeout) = env::var("VETRINA_INFLUX_TIMEOUT_MS") {
            let millis = timeout.parse().map_err(|err| {
                anyhow!("VETRINA_INFLUX_TIMEOUT_MS `{timeout}` is not a number: {err}")
            })?;
            influx.timeout = Duration::from_millis(millis);
        }

        let record_queue = match env::var("VETRINA_RECORD_QUEUE") {
            Ok(capacity) => capacity.parse().map_err(|err| {
                anyhow!("VETRINA_RECORD_QUEUE `{capacity}` is not a number: {err}")
            })?,
            Err(_) => DEFAULT_RECORD_QUEUE,
        };

        if record_queue == 0 {
            return Err(anyhow!("VETRINA_RECORD_QUEUE must be at least 1"));
        }

        Ok(Self {
            listen,
            influx,
            record_queue,
        })
    }
}
