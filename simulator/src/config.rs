use std::env;
use std::error::Error;

use schema::DEFAULT_LANDING_INTERVAL;

/// Seeds the arrival generator so a session can be replayed
pub const SEED_VAR: &str = "AIRPORT_SEED";
/// Minimum number of minutes between two landings
pub const LANDING_INTERVAL_VAR: &str = "AIRPORT_LANDING_INTERVAL";

/// Runtime settings, read from the environment (and `.env`, if present)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub landing_interval: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            landing_interval: DEFAULT_LANDING_INTERVAL,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Box<dyn Error>> {
        let mut config = Self::default();

        if let Some(seed) = lookup(SEED_VAR) {
            config.seed = Some(
                seed.trim()
                    .parse()
                    .map_err(|e| format!("{SEED_VAR}={seed}: {e}"))?,
            );
        }

        if let Some(interval) = lookup(LANDING_INTERVAL_VAR) {
            config.landing_interval = interval
                .trim()
                .parse()
                .map_err(|e| format!("{LANDING_INTERVAL_VAR}={interval}: {e}"))?;
            if config.landing_interval == 0 {
                return Err(format!("{LANDING_INTERVAL_VAR} must be at least 1").into());
            }
        }

        Ok(config)
    }
}
