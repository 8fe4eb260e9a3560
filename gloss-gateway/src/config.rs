//! Gateway configuration, read from the environment.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Runtime settings for the gateway binary.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address the HTTP server binds to.
    pub listen_addr: String,
    /// Endpoint of the upstream explanation service.
    pub upstream_url: String,
    /// Origins permitted by the CORS layer. `["*"]` means any origin.
    pub allowed_origins: Vec<String>,
}

impl GatewayConfig {
    /// Read configuration from `GLOSS_LISTEN_ADDR`, `GLOSS_UPSTREAM_URL`
    /// and `GLOSS_ALLOWED_ORIGINS`, falling back to local defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let listen_addr = std::env::var("GLOSS_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8090".to_owned());
        let upstream_url = std::env::var("GLOSS_UPSTREAM_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8091/explain".to_owned());
        let allowed_origins = std::env::var("GLOSS_ALLOWED_ORIGINS")
            .map_or_else(|_| vec!["*".to_owned()], |raw| parse_origins(&raw));

        Self { listen_addr, upstream_url, allowed_origins }
    }

    /// Build the CORS layer for the configured origins.
    ///
    /// The fetch spec forbids a literal `*` together with credentials, so
    /// the wildcard default mirrors the request origin instead; an explicit
    /// origin list is sent verbatim. Methods and headers are mirrored in
    /// both cases, and credentials are always allowed.
    #[must_use]
    pub fn cors_layer(&self) -> CorsLayer {
        if self.allowed_origins.iter().any(|o| o == "*") {
            return CorsLayer::very_permissive();
        }

        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|o| HeaderValue::from_str(o).ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8090".to_owned(),
            upstream_url: "http://127.0.0.1:8091/explain".to_owned(),
            allowed_origins: vec!["*".to_owned()],
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    if origins.is_empty() {
        vec!["*".to_owned()]
    } else {
        origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_origins_splits_and_trims() {
        let origins = parse_origins("http://a.test, http://b.test ,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn parse_origins_empty_falls_back_to_wildcard() {
        assert_eq!(parse_origins("  , "), vec!["*"]);
    }

    #[test]
    fn default_config_allows_any_origin() {
        let config = GatewayConfig::default();
        assert_eq!(config.allowed_origins, vec!["*"]);
        // Must not panic: wildcard + credentials is only valid via mirroring.
        let _ = config.cors_layer();
    }

    #[test]
    fn explicit_origin_list_builds_a_layer() {
        let config = GatewayConfig {
            allowed_origins: vec!["http://app.test".to_owned()],
            ..GatewayConfig::default()
        };
        let _ = config.cors_layer();
    }
}
