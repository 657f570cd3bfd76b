use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://app.asana.com";
pub const DEFAULT_API_VERSION: &str = "api/1.0";
pub const DEFAULT_USER_AGENT: &str = "asana-progress-tauri";
pub const DEFAULT_COOLDOWN_MS: u64 = 400;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct AsanaConfig {
    pub base_url: String,
    pub api_version: String,
    pub token: String,
    pub user_agent: String,
    pub cooldown: Duration,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl AsanaConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            token: token.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cooldown: Duration::from_millis(DEFAULT_COOLDOWN_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    pub fn with_cooldown(mut self, duration: Duration) -> Self {
        self.cooldown = duration;
        self
    }

    pub fn with_timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    pub fn with_connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = duration;
        self
    }

    pub fn api_root(&self) -> String {
        format!(
            "{}/{}/",
            self.base_url.trim_end_matches('/'),
            self.api_version.trim_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::AsanaConfig;

    #[test]
    fn api_root_joins_base_and_version_with_single_slashes() {
        let config = AsanaConfig::new("token");
        assert_eq!(config.api_root(), "https://app.asana.com/api/1.0/");

        let custom = AsanaConfig::new("token")
            .with_base_url("http://127.0.0.1:8080/")
            .with_api_version("/api/1.0/");
        assert_eq!(custom.api_root(), "http://127.0.0.1:8080/api/1.0/");
    }
}
