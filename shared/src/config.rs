//! Backend location.
//!
//! The base URL is a single setting. An explicit override always wins;
//! otherwise the app talks to `/api` on its own origin, except during local
//! development where the backend runs on its own port.

/// Backend used when the page itself is served from localhost
pub const DEFAULT_LOCAL_API_URL: &str = "http://localhost:5000/api";

const LOCAL_HOSTNAMES: [&str; 2] = ["localhost", "127.0.0.1"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL including the `/api` prefix, without trailing slash
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL from the page location and an optional override
    pub fn resolve(origin: &str, hostname: &str, override_url: Option<&str>) -> Self {
        if let Some(url) = override_url.map(str::trim).filter(|url| !url.is_empty()) {
            return Self::new(url);
        }

        if LOCAL_HOSTNAMES.contains(&hostname) {
            Self::new(DEFAULT_LOCAL_API_URL)
        } else {
            Self::new(format!("{}/api", origin.trim_end_matches('/')))
        }
    }

    /// Server root, i.e. the base URL without its `/api` suffix
    pub fn server_root(&self) -> &str {
        self.base_url
            .strip_suffix("/api")
            .unwrap_or(&self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOCAL_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_outside_localhost() {
        let config = ApiConfig::resolve("https://financas.example.com", "financas.example.com", None);
        assert_eq!(config.base_url, "https://financas.example.com/api");
    }

    #[test]
    fn test_local_endpoint_on_localhost() {
        for host in ["localhost", "127.0.0.1"] {
            let origin = format!("http://{}:8080", host);
            let config = ApiConfig::resolve(&origin, host, None);
            assert_eq!(config.base_url, DEFAULT_LOCAL_API_URL);
        }
    }

    #[test]
    fn test_override_wins_and_is_normalized() {
        let config = ApiConfig::resolve("http://localhost:8080", "localhost", Some("https://api.example.org/api/"));
        assert_eq!(config.base_url, "https://api.example.org/api");

        // Blank overrides are ignored
        let config = ApiConfig::resolve("https://a.example", "a.example", Some("  "));
        assert_eq!(config.base_url, "https://a.example/api");
    }

    #[test]
    fn test_server_root_strips_api_suffix() {
        assert_eq!(ApiConfig::default().server_root(), "http://localhost:5000");
        assert_eq!(ApiConfig::new("http://x/backend").server_root(), "http://x/backend");
    }
}
