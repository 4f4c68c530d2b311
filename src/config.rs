use anyhow::{bail, Context};
use chrono::{FixedOffset, Offset, Utc};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub cors_extra_origins: Vec<String>,

    /// Offset applied to entry timestamps before taking their calendar date.
    pub utc_offset_minutes: i32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .context("PORT must be a number")?;

        let utc_offset_minutes: i32 = env::var("UTC_OFFSET_MINUTES")
            .unwrap_or_else(|_| "0".into())
            .parse()
            .context("UTC_OFFSET_MINUTES must be a number")?;
        check_offset(utc_offset_minutes)?;

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            cors_extra_origins: env::var("CORS_EXTRA_ORIGINS")
                .map(|extra| parse_origins(&extra))
                .unwrap_or_default(),
            utc_offset_minutes,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn utc_offset(&self) -> FixedOffset {
        // Range is checked in from_env; fall back to UTC for hand-built configs.
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            frontend_url: "http://localhost:3000".into(),
            cors_extra_origins: Vec::new(),
            utc_offset_minutes: 0,
        }
    }
}

fn check_offset(minutes: i32) -> anyhow::Result<()> {
    if !(-1439..=1439).contains(&minutes) {
        bail!("UTC_OFFSET_MINUTES must be within +/-1439, got {minutes}");
    }
    Ok(())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
