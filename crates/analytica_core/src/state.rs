use crate::view_model::StatusView;
use crate::EndpointConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Checking,
    Connected,
    Disconnected,
}

/// Snapshot published by the health monitor.
///
/// Only [`crate::update`] mutates it, so callers cannot force a state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonitorState {
    connection: ConnectionState,
    error: String,
    backend_url: String,
    active: bool,
    run: u64,
    probes_completed: u64,
}

impl MonitorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Identifier of the current or most recent monitor run.
    pub fn run(&self) -> u64 {
        self.run
    }

    pub fn probes_completed(&self) -> u64 {
        self.probes_completed
    }

    pub fn view(&self) -> StatusView {
        let headline = match self.connection {
            ConnectionState::Checking => "Checking backend...",
            ConnectionState::Connected => "Backend Connected",
            ConnectionState::Disconnected => "Backend Disconnected",
        };
        let disconnected = self.connection == ConnectionState::Disconnected;
        let environment = if self.backend_url.is_empty() {
            None
        } else {
            Some(EndpointConfig::new(self.backend_url.clone()).deployment_kind())
        };
        StatusView {
            headline: headline.to_string(),
            connection: self.connection,
            backend_url: disconnected.then(|| self.backend_url.clone()),
            error: (disconnected && !self.error.is_empty()).then(|| self.error.clone()),
            environment,
        }
    }

    pub(crate) fn begin(&mut self, run: u64, backend_url: String) {
        self.run = run;
        self.connection = ConnectionState::Checking;
        self.error.clear();
        self.backend_url = backend_url;
        self.active = true;
    }

    pub(crate) fn end(&mut self) {
        self.active = false;
    }

    pub(crate) fn settle(&mut self, connection: ConnectionState, error: String) {
        self.connection = connection;
        self.error = error;
        self.probes_completed += 1;
    }
}
