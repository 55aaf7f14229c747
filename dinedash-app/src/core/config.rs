use std::path::PathBuf;
use std::time::Duration;

/// Client configuration
///
/// # Environment variables
///
/// Every value can be overridden from the environment (a `.env` file is
/// loaded first by the binary):
///
/// | variable | default | meaning |
/// |----------|---------|---------|
/// | DINEDASH_BACKEND_URL | http://localhost:8001 | backend base URL (API under `/api`) |
/// | DINEDASH_ORIGIN_URL | http://localhost:3000 | origin sent with checkout requests |
/// | DINEDASH_DATA_DIR | ./.dinedash | local storage and logs |
/// | DINEDASH_REQUEST_TIMEOUT_SECS | 30 | HTTP timeout |
/// | DINEDASH_ORDER_POLL_SECS | 10 | order tracking / profile refresh interval |
/// | DINEDASH_PAYMENT_POLL_MS | 2000 | payment status interval |
/// | DINEDASH_PAYMENT_MAX_ATTEMPTS | 10 | payment status poll budget |
///
/// # Example
///
/// ```ignore
/// DINEDASH_BACKEND_URL=https://api.dinedash.in dinedash restaurants --search dosa
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: String,
    /// Origin the payment provider redirects back to
    pub origin_url: String,
    pub data_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub order_poll_interval: Duration,
    pub payment_poll_interval: Duration,
    pub payment_max_attempts: u32,
}

impl AppConfig {
    /// Load from process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup, missing or unparsable values use defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            backend_url: lookup("DINEDASH_BACKEND_URL")
                .unwrap_or_else(|| "http://localhost:8001".into()),
            origin_url: lookup("DINEDASH_ORIGIN_URL")
                .unwrap_or_else(|| "http://localhost:3000".into()),
            data_dir: lookup("DINEDASH_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./.dinedash")),
            request_timeout_secs: lookup("DINEDASH_REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            order_poll_interval: lookup("DINEDASH_ORDER_POLL_SECS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(Duration::from_secs(10)),
            payment_poll_interval: lookup("DINEDASH_PAYMENT_POLL_MS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(Duration::from_millis(2000)),
            payment_max_attempts: lookup("DINEDASH_PAYMENT_MAX_ATTEMPTS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Override backend URL and data directory
    ///
    /// Used by CLI flags and tests
    pub fn with_overrides(
        mut self,
        backend_url: Option<String>,
        data_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(url) = backend_url {
            self.backend_url = url;
        }
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    /// Local storage directory: {data_dir}/storage
    pub fn storage_dir(&self) -> PathBuf {
        self.data_dir.join("storage")
    }

    /// Log directory: {data_dir}/logs
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.backend_url, "http://localhost:8001");
        assert_eq!(config.order_poll_interval, Duration::from_secs(10));
        assert_eq!(config.payment_poll_interval, Duration::from_millis(2000));
        assert_eq!(config.payment_max_attempts, 10);
        assert_eq!(config.storage_dir(), PathBuf::from("./.dinedash/storage"));
    }

    #[test]
    fn test_lookup_overrides_and_bad_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("DINEDASH_BACKEND_URL", "https://api.example.com"),
            ("DINEDASH_PAYMENT_MAX_ATTEMPTS", "3"),
            ("DINEDASH_ORDER_POLL_SECS", "soon"),
        ]);
        let config = AppConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.backend_url, "https://api.example.com");
        assert_eq!(config.payment_max_attempts, 3);
        // unparsable falls back to the default
        assert_eq!(config.order_poll_interval, Duration::from_secs(10));
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default()
            .with_overrides(Some("http://backend:9000".into()), Some("/tmp/dd".into()));
        assert_eq!(config.backend_url, "http://backend:9000");
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/dd/logs"));
    }
}
