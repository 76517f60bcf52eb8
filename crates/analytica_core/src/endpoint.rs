use url::{Host, Url};

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_ENV: &str = "NEXT_PUBLIC_BACKEND_URL";
/// Base URL used when [`BACKEND_URL_ENV`] is unset or empty.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

pub const HEALTH_PATH: &str = "/api/health";
pub const ANALYSIS_PATH: &str = "/api/paper-analysis";

/// Endpoints worth opening by hand when diagnosing a broken deployment.
pub const DIAGNOSTIC_PATHS: [&str; 3] = [
    HEALTH_PATH,
    "/api/corpus-overview",
    "/api/corpus-documents",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentKind {
    Development,
    Production,
}

/// Read-only backend location shared by the monitor and the submission client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    backend_base_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl EndpointConfig {
    /// Trailing slashes are dropped so joined paths never contain `//`.
    /// A blank value falls back to [`DEFAULT_BACKEND_URL`].
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let backend_base_url = if trimmed.is_empty() {
            DEFAULT_BACKEND_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { backend_base_url }
    }

    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(BACKEND_URL_ENV).ok())
    }

    pub fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.backend_base_url
    }

    /// Base URL for one call: a non-blank override wins over the configured value.
    pub fn resolve(&self, override_url: Option<&str>) -> EndpointConfig {
        match override_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self::new(url),
            None => self.clone(),
        }
    }

    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.backend_base_url, path)
    }

    pub fn health_url(&self) -> String {
        self.join(HEALTH_PATH)
    }

    pub fn analysis_url(&self) -> String {
        self.join(ANALYSIS_PATH)
    }

    pub fn diagnostic_links(&self) -> Vec<String> {
        DIAGNOSTIC_PATHS.iter().map(|path| self.join(path)).collect()
    }

    /// Loopback hosts are treated as a local development backend.
    pub fn deployment_kind(&self) -> DeploymentKind {
        let Ok(parsed) = Url::parse(&self.backend_base_url) else {
            return DeploymentKind::Production;
        };
        let local = match parsed.host() {
            Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
            Some(Host::Ipv4(addr)) => addr.is_loopback(),
            Some(Host::Ipv6(addr)) => addr.is_loopback(),
            None => false,
        };
        if local {
            DeploymentKind::Development
        } else {
            DeploymentKind::Production
        }
    }
}
