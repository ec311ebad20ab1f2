use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://quran-api.asrulmunir.workers.dev";

/// Connection settings for the Quran API, resolved from global flags and
/// their environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn from_global(global: &crate::Global) -> Self {
        Self::new(&global.api_base, global.timeout)
    }

    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
