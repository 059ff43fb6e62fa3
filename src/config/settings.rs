use crate::errors::ConfigError;
use std::{env, net::IpAddr, net::SocketAddr, str::FromStr, time::Duration};

/// Durations of the timed effects inside a level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GameTimings {
    /// Length of the simulated ad countdown, in one-second ticks.
    pub ad_seconds: u32,
    pub hint: Duration,
    pub notification: Duration,
}

impl Default for GameTimings {
    fn default() -> Self {
        Self {
            ad_seconds: 3,
            hint: Duration::from_secs(3),
            notification: Duration::from_secs(2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub static_path: String,
    pub max_connections: usize,
    pub debug: bool,
    pub timings: GameTimings,
}

impl Config {
    /// Reads the process environment. Call `dotenv` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = GameTimings::default();
        Ok(Self {
            host: parse_var(&lookup, "HOST", IpAddr::from([127, 0, 0, 1]))?,
            port: parse_var(&lookup, "PORT", 3000)?,
            static_path: lookup("STATIC_FILES_PATH").unwrap_or_else(|| "static".to_string()),
            max_connections: parse_var(&lookup, "MAX_CONNECTIONS", 64)?,
            debug: parse_var(&lookup, "DEBUG", false)?,
            timings: GameTimings {
                ad_seconds: parse_var(&lookup, "AD_SECONDS", defaults.ad_seconds)?,
                hint: Duration::from_secs(parse_var(
                    &lookup,
                    "HINT_SECONDS",
                    defaults.hint.as_secs(),
                )?),
                notification: Duration::from_secs(parse_var(
                    &lookup,
                    "NOTIFY_SECONDS",
                    defaults.notification.as_secs(),
                )?),
            },
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
