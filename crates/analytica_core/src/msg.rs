use crate::HealthProbeOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Monitor run `run` was started against the given base URL.
    MonitorStarted { run: u64, backend_url: String },
    /// One probe of run `run` finished (success, HTTP error, timeout or
    /// transport failure).
    ProbeSettled {
        run: u64,
        outcome: HealthProbeOutcome,
    },
    /// Monitor was torn down.
    MonitorStopped,
}
