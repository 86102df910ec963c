use std::env;

pub const ENDPOINT_VAR: &str = "API_MUSL_COM_ENDPOINT";
pub const API_KEY_VAR: &str = "API_KEY";

/// Settings read from the environment (after `dotenv`).
///
/// Upstream values are optional here so the server still starts without
/// them; `MuslClient` rejects each fetch until they are provided.
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub host: String,
    pub port: String,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT").unwrap_or_else(|| "8080".to_string()),
            endpoint: lookup(ENDPOINT_VAR),
            api_key: lookup(API_KEY_VAR),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Same rule `MuslClient` applies before each fetch.
    pub fn has_upstream_credentials(&self) -> bool {
        non_blank(self.endpoint.as_deref()).is_some() && non_blank(self.api_key.as_deref()).is_some()
    }
}

/// Returns the value if it holds anything other than whitespace.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
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
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.endpoint, None);
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn test_reads_all_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            (ENDPOINT_VAR, "https://api.example.com"),
            (API_KEY_VAR, "secret"),
        ]));

        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.endpoint.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_blank_values_are_not_credentials() {
        let config = Config::from_lookup(lookup_from(&[
            (ENDPOINT_VAR, "https://api.example.com"),
            (API_KEY_VAR, ""),
        ]));
        assert!(!config.has_upstream_credentials());

        let config = Config::from_lookup(lookup_from(&[
            (ENDPOINT_VAR, "  "),
            (API_KEY_VAR, "secret"),
        ]));
        assert!(!config.has_upstream_credentials());

        let config = Config::from_lookup(lookup_from(&[
            (ENDPOINT_VAR, "https://api.example.com"),
            (API_KEY_VAR, "secret"),
        ]));
        assert!(config.has_upstream_credentials());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("  \t")), None);
        assert_eq!(non_blank(Some(" key ")), Some("key"));
    }
}
