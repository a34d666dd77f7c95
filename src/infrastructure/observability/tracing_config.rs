use crate::presentation::config::Environment;

/// How the tracing subscriber is set up at startup.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        let environment = std::env::var("APP_ENV")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        // Production logs go to a collector, so JSON is the default there;
        // elsewhere human-readable output wins.
        let json_format = match std::env::var("LOG_FORMAT") {
            Ok(v) => v.eq_ignore_ascii_case("json"),
            Err(_) => environment == Environment::Prod,
        };

        Self {
            environment,
            json_format,
        }
    }
}
