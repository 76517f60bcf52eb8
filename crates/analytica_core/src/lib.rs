//! Analytica core: pure connection state machine, endpoint resolution and
//! submission payload selection. No IO happens in this crate.
mod endpoint;
mod msg;
mod probe;
mod state;
mod submission;
mod update;
mod view_model;

pub use endpoint::{
    DeploymentKind, EndpointConfig, ANALYSIS_PATH, BACKEND_URL_ENV, DEFAULT_BACKEND_URL,
    DIAGNOSTIC_PATHS, HEALTH_PATH,
};
pub use msg::Msg;
pub use probe::{HealthProbeOutcome, GENERIC_TRANSPORT_MESSAGE, TIMEOUT_MESSAGE};
pub use state::{ConnectionState, MonitorState};
pub use submission::{
    Attachment, FilePayload, SubmissionRequest, DEFAULT_CONTENT_TYPE, FALLBACK_FILENAME,
    FILE_FIELD, SUMMARY_CONTENT_TYPE,
};
pub use update::update;
pub use view_model::StatusView;
