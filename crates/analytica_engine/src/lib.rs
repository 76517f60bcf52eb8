//! Analytica engine: backend probing, the health monitor task and the
//! submission client.
mod monitor;
mod probe;
mod submit;
mod types;

pub use monitor::{HealthMonitor, MonitorSettings};
pub use probe::{
    check_health, probe_with_timeout, HealthProber, HealthReport, ProbeSettings, ReqwestProber,
};
pub use submit::{SubmissionClient, SubmitSettings};
pub use types::{FailureKind, SubmissionError, SubmissionResult};
