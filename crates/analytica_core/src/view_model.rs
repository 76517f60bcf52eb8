use crate::{ConnectionState, DeploymentKind};

/// What a status badge renders. The URL and error detail are only populated
/// while disconnected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub headline: String,
    pub connection: ConnectionState,
    pub backend_url: Option<String>,
    pub error: Option<String>,
    pub environment: Option<DeploymentKind>,
}

impl StatusView {
    pub fn is_development(&self) -> bool {
        self.environment == Some(DeploymentKind::Development)
    }
}
