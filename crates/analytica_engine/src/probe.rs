use std::time::Duration;

use analytica_core::{ConnectionState, DeploymentKind, EndpointConfig, HealthProbeOutcome};
use analytica_logging::{analytica_debug, analytica_info};
use tokio_util::sync::CancellationToken;

use crate::types::describe_error;

#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub connect_timeout: Duration,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// One liveness check against a health URL.
///
/// Implementations must return [`HealthProbeOutcome::timed_out`] once `cancel`
/// fires; the token belongs to this attempt only.
#[async_trait::async_trait]
pub trait HealthProber: Send + Sync {
    async fn probe(&self, url: &str, cancel: &CancellationToken) -> HealthProbeOutcome;
}

#[derive(Debug, Clone)]
pub struct ReqwestProber {
    client: reqwest::Client,
}

impl ReqwestProber {
    pub fn new(settings: ProbeSettings) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .build()?;
        Ok(Self { client })
    }

    async fn request(&self, url: &str) -> HealthProbeOutcome {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) if err.is_timeout() => return HealthProbeOutcome::timed_out(),
            Err(err) => return HealthProbeOutcome::transport(Some(describe_error(&err))),
        };

        let status = response.status();
        if !status.is_success() {
            return HealthProbeOutcome::http_error(status.as_u16(), status.canonical_reason());
        }

        // The body is informational; only the status decides health.
        match response.bytes().await {
            Ok(body) => match serde_json::from_slice::<serde_json::Value>(&body) {
                Ok(json) => analytica_debug!("Backend health check: {}", json),
                Err(err) => analytica_debug!("Health body is not JSON: {}", err),
            },
            Err(err) => analytica_debug!("Failed to read health body: {}", err),
        }
        HealthProbeOutcome::success(status.as_u16())
    }
}

#[async_trait::async_trait]
impl HealthProber for ReqwestProber {
    async fn probe(&self, url: &str, cancel: &CancellationToken) -> HealthProbeOutcome {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => HealthProbeOutcome::timed_out(),
            outcome = self.request(url) => outcome,
        }
    }
}

/// Runs one probe bounded by `timeout`.
///
/// A fresh token is created per call and cancelled by a timer task. The timer
/// is aborted once the probe settles; if the caller drops this future first,
/// the timer still fires but only cancels its own orphaned token.
pub async fn probe_with_timeout(
    prober: &dyn HealthProber,
    url: &str,
    timeout: Duration,
) -> HealthProbeOutcome {
    let cancel = CancellationToken::new();
    let timer = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            cancel.cancel();
        })
    };

    let outcome = tokio::select! {
        biased;
        outcome = prober.probe(url, &cancel) => outcome,
        _ = cancel.cancelled() => HealthProbeOutcome::timed_out(),
    };
    timer.abort();
    outcome
}

/// Result of a single on-demand health check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub outcome: HealthProbeOutcome,
    pub connection: ConnectionState,
    pub backend_url: String,
    pub environment: DeploymentKind,
}

/// Probes the backend once, outside of any monitor.
pub async fn check_health(
    prober: &dyn HealthProber,
    config: &EndpointConfig,
    timeout: Duration,
) -> HealthReport {
    let outcome = probe_with_timeout(prober, &config.health_url(), timeout).await;
    let connection = if outcome.ok {
        ConnectionState::Connected
    } else {
        ConnectionState::Disconnected
    };
    analytica_info!(
        "Health check against {}: {:?} {}",
        config.base_url(),
        connection,
        outcome.error_text()
    );
    HealthReport {
        outcome,
        connection,
        backend_url: config.base_url().to_string(),
        environment: config.deployment_kind(),
    }
}
