//! Process configuration read from the environment at startup.

use std::{net::SocketAddr, path::PathBuf, time::Duration};

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_RESEND_URL: &str = "https://api.resend.com";
pub const DEFAULT_FROM: &str = "Contact Form <onboarding@resend.dev>";
pub const DEFAULT_TO: &str = "hello@dimario.dev";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{var} has an invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Where contact emails come from and go to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub from: String,
    pub to: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendSettings {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub dist_dir: PathBuf,
    pub resend: ResendSettings,
    pub mail: MailSettings,
    pub provider_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let api_key = get("RESEND_API_KEY").ok_or(ConfigError::Missing("RESEND_API_KEY"))?;

        let bind_raw = get("STUDIO_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::Invalid {
                var: "STUDIO_BIND_ADDR",
                value: bind_raw.clone(),
                reason: err.to_string(),
            })?;

        let dist_dir = get("STUDIO_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../web/dist"));

        let to: Vec<String> = get("CONTACT_TO")
            .unwrap_or_else(|| DEFAULT_TO.to_string())
            .split(',')
            .map(str::trim)
            .filter(|addr| !addr.is_empty())
            .map(str::to_string)
            .collect();
        if to.is_empty() {
            return Err(ConfigError::Missing("CONTACT_TO"));
        }

        let timeout_secs = match get("CONTACT_PROVIDER_TIMEOUT_SECS") {
            None => DEFAULT_PROVIDER_TIMEOUT_SECS,
            Some(raw) => {
                let parsed = raw.trim().parse::<u64>();
                match parsed {
                    Ok(secs) if secs > 0 => secs,
                    Ok(_) => {
                        return Err(ConfigError::Invalid {
                            var: "CONTACT_PROVIDER_TIMEOUT_SECS",
                            value: raw,
                            reason: "must be at least 1".to_string(),
                        })
                    }
                    Err(err) => {
                        return Err(ConfigError::Invalid {
                            var: "CONTACT_PROVIDER_TIMEOUT_SECS",
                            value: raw,
                            reason: err.to_string(),
                        })
                    }
                }
            }
        };

        Ok(Self {
            bind_addr,
            dist_dir,
            resend: ResendSettings {
                api_key,
                base_url: get("RESEND_API_URL")
                    .unwrap_or_else(|| DEFAULT_RESEND_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
            },
            mail: MailSettings {
                from: get("CONTACT_FROM").unwrap_or_else(|| DEFAULT_FROM.to_string()),
                to,
            },
            provider_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn defaults_fill_everything_but_the_key() {
        let config = ServerConfig::from_lookup(lookup(&[("RESEND_API_KEY", "re_test")])).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(config.resend.api_key, "re_test");
        assert_eq!(config.resend.base_url, DEFAULT_RESEND_URL);
        assert_eq!(config.mail.from, DEFAULT_FROM);
        assert_eq!(config.mail.to, vec![DEFAULT_TO.to_string()]);
        assert_eq!(config.provider_timeout, Duration::from_secs(10));
        assert!(config.dist_dir.ends_with("web/dist"));
    }

    #[test]
    fn missing_key_is_an_error() {
        let err = ServerConfig::from_lookup(lookup(&[("RESEND_API_KEY", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("RESEND_API_KEY"));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("RESEND_API_KEY", "re_live"),
            ("STUDIO_BIND_ADDR", "127.0.0.1:3000"),
            ("RESEND_API_URL", "http://localhost:9999/"),
            ("CONTACT_TO", "a@example.com, b@example.com,"),
            ("CONTACT_PROVIDER_TIMEOUT_SECS", "3"),
            ("STUDIO_DIST_DIR", "/srv/site"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.resend.base_url, "http://localhost:9999");
        assert_eq!(config.mail.to, vec!["a@example.com", "b@example.com"]);
        assert_eq!(config.provider_timeout, Duration::from_secs(3));
        assert_eq!(config.dist_dir, PathBuf::from("/srv/site"));
    }

    #[test]
    fn bad_values_name_the_variable() {
        let err = ServerConfig::from_lookup(lookup(&[
            ("RESEND_API_KEY", "k"),
            ("CONTACT_PROVIDER_TIMEOUT_SECS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "CONTACT_PROVIDER_TIMEOUT_SECS",
                ..
            }
        ));

        let err = ServerConfig::from_lookup(lookup(&[
            ("RESEND_API_KEY", "k"),
            ("STUDIO_BIND_ADDR", "nowhere"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("STUDIO_BIND_ADDR"));
    }
}
