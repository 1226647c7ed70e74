use dotenv::dotenv;
use std::env;

pub const DEFAULT_PORT: u16 = 7000;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:7000";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub bind_addr: String,
    pub allowed_origins: Vec<String>,
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Where the client sends its requests
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            port: lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_PORT),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1".to_string()),
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_else(|| vec![DEFAULT_ALLOWED_ORIGIN.to_string()]),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            request_timeout_secs: lookup("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            api_base_url: lookup("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::default();
        assert_eq!(config.port, 7000);
        assert_eq!(config.bind_addr, "127.0.0.1");
        assert_eq!(config.allowed_origins, vec!["http://localhost:5173".to_string()]);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.api_base_url, "http://localhost:7000");
    }

    #[test]
    fn reads_overrides_and_splits_origins() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("PORT", "8080"),
            ("ALLOWED_ORIGINS", "http://localhost:5173, https://contacts.example.org,"),
            ("API_BASE_URL", "https://api.example.org"),
        ]);
        let config = Config::from_vars(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.allowed_origins,
            vec![
                "http://localhost:5173".to_string(),
                "https://contacts.example.org".to_string()
            ]
        );
        assert_eq!(config.api_base_url, "https://api.example.org");
    }

    #[test]
    fn unparsable_port_falls_back() {
        let config = Config::from_vars(|key| (key == "PORT").then(|| "seven".to_string()));
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
