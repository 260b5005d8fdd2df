use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";
pub const DEFAULT_FROM_EMAIL: &str = "noreply@nexark.io";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// How `/api/send-roadmap` delivers a roadmap once the request validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Log the request and report success.
    Log,
    /// Render the HTML roadmap and send it through SendGrid.
    Email,
}

#[derive(Debug, Clone)]
pub struct SendGridConfig {
    pub api_key: String,
    pub from_email: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: String,
    pub gemini_api_url: String,
    pub delivery: DeliveryMode,
    pub sendgrid: Option<SendGridConfig>,
    pub bind_address: String,
    pub frontend_url: Option<String>,
    pub sentry_dsn: Option<String>,
    pub http_timeout: Duration,
    pub rate_limit_max_requests: u32,
    pub rate_limit_window: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let gemini_api_key = get("GEMINI_API_KEY").ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;
        let gemini_api_url = get("GEMINI_API_URL").unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string());

        let delivery = match get("ROADMAP_DELIVERY").as_deref() {
            None | Some("log") => DeliveryMode::Log,
            Some("email") => DeliveryMode::Email,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "ROADMAP_DELIVERY",
                    value: other.to_string(),
                })
            }
        };

        let sendgrid = match get("SENDGRID_API_KEY") {
            Some(api_key) => Some(SendGridConfig {
                api_key,
                from_email: get("SENDGRID_FROM_EMAIL").unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string()),
            }),
            None => None,
        };
        if delivery == DeliveryMode::Email && sendgrid.is_none() {
            return Err(ConfigError::Missing("SENDGRID_API_KEY"));
        }

        Ok(Self {
            gemini_api_key,
            gemini_api_url,
            delivery,
            sendgrid,
            bind_address: get("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            frontend_url: get("FRONTEND_URL"),
            sentry_dsn: get("SENTRY_DSN"),
            http_timeout: Duration::from_secs(parse_number(&get, "HTTP_TIMEOUT_SECS", 15)?),
            rate_limit_max_requests: parse_number(&get, "RATE_LIMIT_MAX_REQUESTS", 5)? as u32,
            rate_limit_window: Duration::from_secs(parse_number(&get, "RATE_LIMIT_WINDOW_SECS", 60)?),
        })
    }
}

fn parse_number<G>(get: &G, name: &'static str, default: u64) -> Result<u64, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        None => Ok(default),
        Some(raw) => match raw.parse::<u64>() {
            Ok(n) if n > 0 && n <= u32::MAX as u64 => Ok(n),
            _ => Err(ConfigError::Invalid { name, value: raw }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn gemini_key_is_mandatory() {
        let err = config_from(&[]).unwrap_err();
        assert_eq!(err, ConfigError::Missing("GEMINI_API_KEY"));

        let err = config_from(&[("GEMINI_API_KEY", "   ")]).unwrap_err();
        assert_eq!(err, ConfigError::Missing("GEMINI_API_KEY"));
    }

    #[test]
    fn defaults_apply_when_only_the_key_is_set() {
        let config = config_from(&[("GEMINI_API_KEY", "k")]).unwrap();
        assert_eq!(config.gemini_api_url, DEFAULT_GEMINI_API_URL);
        assert_eq!(config.delivery, DeliveryMode::Log);
        assert!(config.sendgrid.is_none());
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.http_timeout, Duration::from_secs(15));
        assert_eq!(config.rate_limit_max_requests, 5);
        assert_eq!(config.rate_limit_window, Duration::from_secs(60));
    }

    #[test]
    fn email_delivery_requires_sendgrid_key() {
        let err = config_from(&[("GEMINI_API_KEY", "k"), ("ROADMAP_DELIVERY", "email")]).unwrap_err();
        assert_eq!(err, ConfigError::Missing("SENDGRID_API_KEY"));

        let config = config_from(&[
            ("GEMINI_API_KEY", "k"),
            ("ROADMAP_DELIVERY", "email"),
            ("SENDGRID_API_KEY", "sg"),
        ])
        .unwrap();
        assert_eq!(config.delivery, DeliveryMode::Email);
        let sendgrid = config.sendgrid.unwrap();
        assert_eq!(sendgrid.from_email, DEFAULT_FROM_EMAIL);
    }

    #[test]
    fn rejects_unknown_delivery_and_bad_numbers() {
        let err = config_from(&[("GEMINI_API_KEY", "k"), ("ROADMAP_DELIVERY", "carrier-pigeon")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "ROADMAP_DELIVERY", .. }));

        let err = config_from(&[("GEMINI_API_KEY", "k"), ("RATE_LIMIT_WINDOW_SECS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "RATE_LIMIT_WINDOW_SECS", .. }));

        let err = config_from(&[("GEMINI_API_KEY", "k"), ("HTTP_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "HTTP_TIMEOUT_SECS", .. }));
    }
}
