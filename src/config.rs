use std::env;

use derive_getters::Getters;

use crate::error::{Result, TrackerError};

pub const BASE_CURRENCY: &str = "TRY";

const DEFAULT_TEFAS_URL: &str = "https://www.tefas.gov.tr";
const DEFAULT_FX_URL: &str = "https://api.frankfurter.app";
const DEFAULT_LOOKBACK_DAYS: u64 = 14;
// A trailing week plus the day before it.
const MIN_LOOKBACK_DAYS: u64 = 8;
const MAX_LOOKBACK_DAYS: u64 = 3650;

#[derive(Clone, Debug, Getters)]
pub struct Config {
    tefas_url: String,
    fx_url: String,
    lookback_days: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tefas_url: DEFAULT_TEFAS_URL.to_string(),
            fx_url: DEFAULT_FX_URL.to_string(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
        }
    }
}

impl Config {
    /// Reads `TEFAS_API_URL`, `FX_API_URL` and `TEFAS_LOOKBACK_DAYS`, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let lookback_days = match lookup("TEFAS_LOOKBACK_DAYS") {
            Some(value) => value.trim().parse::<u64>().map_err(|_| {
                TrackerError::Config(format!("TEFAS_LOOKBACK_DAYS '{}' is not a number", value))
            })?,
            None => defaults.lookback_days,
        };

        if !(MIN_LOOKBACK_DAYS..=MAX_LOOKBACK_DAYS).contains(&lookback_days) {
            return Err(TrackerError::Config(format!(
                "TEFAS_LOOKBACK_DAYS must be between {} and {}, got {}",
                MIN_LOOKBACK_DAYS, MAX_LOOKBACK_DAYS, lookback_days
            )));
        }

        Ok(Self {
            tefas_url: lookup("TEFAS_API_URL").unwrap_or(defaults.tefas_url),
            fx_url: lookup("FX_API_URL").unwrap_or(defaults.fx_url),
            lookback_days,
        })
    }
}
