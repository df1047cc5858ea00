use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{anyhow, Context};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use spendwise_core::budget::AllowancePolicy;
use spendwise_core::constants::DEFAULT_DAILY_ALLOWANCE;
use spendwise_core::utils::time_utils::{parse_timezone, DEFAULT_REPORTING_TZ};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow!("Unknown log format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub timezone: Tz,
    pub allowance_policy: AllowancePolicy,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            timezone: DEFAULT_REPORTING_TZ,
            allowance_policy: AllowancePolicy::Fixed {
                per_day: DEFAULT_DAILY_ALLOWANCE,
            },
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr: SocketAddr = match std::env::var("SW_LISTEN_ADDR") {
            Ok(addr) => addr.parse().context("Invalid SW_LISTEN_ADDR")?,
            Err(_) => defaults.listen_addr,
        };
        let cors_allow = std::env::var("SW_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("SW_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let timezone = match std::env::var("SW_TIMEZONE") {
            Ok(name) => parse_timezone(&name).context("Invalid SW_TIMEZONE")?,
            Err(_) => defaults.timezone,
        };
        let log_format = match std::env::var("SW_LOG_FORMAT") {
            Ok(format) => format.parse()?,
            Err(_) => defaults.log_format,
        };

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            timezone,
            allowance_policy: allowance_policy_from_env()?,
            log_format,
        })
    }
}

fn allowance_policy_from_env() -> anyhow::Result<AllowancePolicy> {
    let mode = std::env::var("SW_ALLOWANCE_MODE").unwrap_or_else(|_| "fixed".into());
    match mode.trim().to_ascii_lowercase().as_str() {
        "fixed" => {
            let per_day = match std::env::var("SW_DAILY_ALLOWANCE") {
                Ok(value) => Decimal::from_str(value.trim())
                    .context("Invalid SW_DAILY_ALLOWANCE")?,
                Err(_) => DEFAULT_DAILY_ALLOWANCE,
            };
            Ok(AllowancePolicy::Fixed { per_day })
        }
        "derived" => Ok(AllowancePolicy::DerivedFromPreviousPeriod),
        other => Err(anyhow!(
            "Invalid SW_ALLOWANCE_MODE '{}', expected 'fixed' or 'derived'",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_default_policy_uses_reference_allowance() {
        let config = Config::default();
        assert_eq!(
            config.allowance_policy,
            AllowancePolicy::Fixed {
                per_day: DEFAULT_DAILY_ALLOWANCE
            }
        );
        assert_eq!(config.timezone, chrono_tz::UTC);
    }
}
