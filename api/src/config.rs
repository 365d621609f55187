use serde::Deserialize;
use serde::Serialize;
use std::env;

/// Connection settings for the Evolution API server.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct EvolutionConfig {
    base_url: String,
    global_api_key: Option<String>,
}

impl EvolutionConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8080";

    pub fn new(base_url: impl Into<String>, global_api_key: Option<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            global_api_key: global_api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    /// Reads the config from environment variables.
    ///
    /// # Environment Variables
    /// - `EVOLUTION_API_URL`: base url of the Evolution API server.
    ///   defaults to `http://localhost:8080`
    /// - `EVOLUTION_API_KEY`: global api key, needed for instance lookups.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("EVOLUTION_API_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

        Self::new(base_url.trim(), lookup("EVOLUTION_API_KEY"))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn global_api_key(&self) -> Option<&str> {
        self.global_api_key.as_deref()
    }
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn falls_back_to_localhost_when_unset() {
        let config = EvolutionConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.base_url(), "http://localhost:8080");
        assert_eq!(config.global_api_key(), None);
    }

    #[test]
    fn trims_trailing_slashes_from_base_url() {
        let config = EvolutionConfig::from_lookup(lookup_from(&[
            ("EVOLUTION_API_URL", "https://evo.example.com/api//"),
            ("EVOLUTION_API_KEY", "global-key"),
        ]));
        assert_eq!(config.base_url(), "https://evo.example.com/api");
        assert_eq!(config.global_api_key(), Some("global-key"));
    }

    #[test]
    fn blank_api_key_is_treated_as_missing() {
        let config = EvolutionConfig::new("http://evo:8080", Some("  ".to_string()));
        assert_eq!(config.global_api_key(), None);
    }
}
