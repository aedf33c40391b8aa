use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct MapsConfig {
    pub api_key: String,
    pub ready_poll_interval: Duration,
    pub ready_max_attempts: u32,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub port: u16,
    pub display_utc_offset_minutes: i32,
    pub maps: MapsConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    ///
    /// The three service credentials are required but never enforced here:
    /// a missing one is logged and left empty, and the first remote call that
    /// needs it fails instead. Optional numeric settings fall back to their
    /// defaults when absent and are rejected when malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let supabase_url = required(&lookup, "SUPABASE_URL");
        let supabase_anon_key = required(&lookup, "SUPABASE_ANON_KEY");
        let api_key = required(&lookup, "GOOGLE_MAPS_API_KEY");

        info!(
            "Environment check: has_url={}, has_key={}, key_length={}",
            !supabase_url.is_empty(),
            !supabase_anon_key.is_empty(),
            supabase_anon_key.len()
        );

        let port = optional(&lookup, "PORT")
            .map(|v| v.parse::<u16>())
            .transpose()
            .context("PORT must be a valid u16 integer")?
            .unwrap_or(5000);

        let display_utc_offset_minutes = optional(&lookup, "DISPLAY_UTC_OFFSET_MINUTES")
            .map(|v| v.parse::<i32>())
            .transpose()
            .context("DISPLAY_UTC_OFFSET_MINUTES must be a valid i32 integer")?
            .unwrap_or(0);

        if display_utc_offset_minutes.unsigned_abs() >= 24 * 60 {
            anyhow::bail!(
                "DISPLAY_UTC_OFFSET_MINUTES must be within one day, got {display_utc_offset_minutes}"
            );
        }

        let ready_poll_ms = optional(&lookup, "MAPS_READY_POLL_MS")
            .map(|v| v.parse::<u64>())
            .transpose()
            .context("MAPS_READY_POLL_MS must be a valid u64 integer")?
            .unwrap_or(100);

        let ready_max_attempts = optional(&lookup, "MAPS_READY_MAX_ATTEMPTS")
            .map(|v| v.parse::<u32>())
            .transpose()
            .context("MAPS_READY_MAX_ATTEMPTS must be a valid u32 integer")?
            .unwrap_or(20);

        Ok(Self {
            supabase_url,
            supabase_anon_key,
            port,
            display_utc_offset_minutes,
            maps: MapsConfig {
                api_key,
                ready_poll_interval: Duration::from_millis(ready_poll_ms),
                ready_max_attempts,
            },
        })
    }

    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.supabase_url.is_empty() {
            missing.push("SUPABASE_URL");
        }
        if self.supabase_anon_key.is_empty() {
            missing.push("SUPABASE_ANON_KEY");
        }
        if self.maps.api_key.is_empty() {
            missing.push("GOOGLE_MAPS_API_KEY");
        }
        missing
    }
}

fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty())
}

fn required<F>(lookup: &F, key: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match optional(lookup, key) {
        Some(value) => value,
        None => {
            error!("❌ Missing environment variable: {key}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_credentials_are_logged_not_enforced() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.supabase_url, "");
        assert_eq!(config.port, 5000);
        assert_eq!(config.display_utc_offset_minutes, 0);
        assert_eq!(
            config.missing_keys(),
            vec!["SUPABASE_URL", "SUPABASE_ANON_KEY", "GOOGLE_MAPS_API_KEY"]
        );
    }

    #[test]
    fn reads_all_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("SUPABASE_URL", "https://example.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("GOOGLE_MAPS_API_KEY", "maps"),
            ("PORT", "8080"),
            ("DISPLAY_UTC_OFFSET_MINUTES", "480"),
            ("MAPS_READY_POLL_MS", "25"),
            ("MAPS_READY_MAX_ATTEMPTS", "3"),
        ]))
        .unwrap();

        assert!(config.missing_keys().is_empty());
        assert_eq!(config.port, 8080);
        assert_eq!(config.display_utc_offset_minutes, 480);
        assert_eq!(config.maps.ready_poll_interval, Duration::from_millis(25));
        assert_eq!(config.maps.ready_max_attempts, 3);
    }

    #[test]
    fn malformed_port_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert!(result.is_err());
    }

    #[test]
    fn offset_beyond_a_day_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("DISPLAY_UTC_OFFSET_MINUTES", "1440")]));
        assert!(result.is_err());
    }

    #[test]
    fn most_negative_offset_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[(
            "DISPLAY_UTC_OFFSET_MINUTES",
            "-2147483648",
        )]));
        assert!(result.is_err());

        let result = Config::from_lookup(lookup_from(&[("DISPLAY_UTC_OFFSET_MINUTES", "-1439")]));
        assert_eq!(result.unwrap().display_utc_offset_minutes, -1439);
    }
}
