//! Health monitor: a background task that periodically probes the backend
//! and publishes the resulting [`MonitorState`].

use std::sync::Arc;
use std::time::Duration;

use analytica_core::{update, ConnectionState, EndpointConfig, MonitorState, Msg};
use analytica_logging::{analytica_debug, analytica_info, analytica_warn};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::probe::{probe_with_timeout, HealthProber};

#[derive(Debug, Clone)]
pub struct MonitorSettings {
    /// Period between probe starts. Must be non-zero.
    pub interval: Duration,
    /// Hard bound on a single probe.
    pub probe_timeout: Duration,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30),
            probe_timeout: Duration::from_secs(10),
        }
    }
}

struct RunningLoop {
    shutdown: CancellationToken,
    handle: JoinHandle<()>,
}

/// Keeps a best-effort view of backend reachability.
///
/// `start` and `stop` are the whole lifecycle. `start` spawns onto the
/// current tokio runtime. Dropping the monitor stops it.
pub struct HealthMonitor {
    config: EndpointConfig,
    prober: Arc<dyn HealthProber>,
    settings: MonitorSettings,
    state_tx: Arc<watch::Sender<MonitorState>>,
    running: Option<RunningLoop>,
    last_run: u64,
}

impl HealthMonitor {
    pub fn new(
        config: EndpointConfig,
        prober: Arc<dyn HealthProber>,
        settings: MonitorSettings,
    ) -> Self {
        let (state_tx, _) = watch::channel(MonitorState::new());
        Self {
            config,
            prober,
            settings,
            state_tx: Arc::new(state_tx),
            running: None,
            last_run: 0,
        }
    }

    /// Resets to `Checking`, probes immediately and then every interval.
    /// Restarts the loop if it is already running.
    ///
    /// Outside a tokio runtime nothing is spawned and the state stays
    /// untouched; a warning is logged instead.
    pub fn start(&mut self) {
        let Ok(runtime) = Handle::try_current() else {
            analytica_warn!(
                "Health monitor for {} not started: no tokio runtime",
                self.config.base_url()
            );
            return;
        };
        self.stop();

        self.last_run += 1;
        let run = self.last_run;
        let backend_url = self.config.base_url().to_string();
        apply(
            &self.state_tx,
            Msg::MonitorStarted {
                run,
                backend_url: backend_url.clone(),
            },
        );

        let shutdown = CancellationToken::new();
        let handle = runtime.spawn(run_monitor_loop(
            run,
            self.prober.clone(),
            self.config.health_url(),
            self.settings.clone(),
            self.state_tx.clone(),
            shutdown.clone(),
        ));
        self.running = Some(RunningLoop { shutdown, handle });

        analytica_info!(
            "Health monitor started for {} (every {:?}, timeout {:?})",
            backend_url,
            self.settings.interval,
            self.settings.probe_timeout
        );
    }

    /// Stops the loop. An in-flight probe is abandoned and its result never
    /// reaches the state.
    pub fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.shutdown.cancel();
            running.handle.abort();
            apply(&self.state_tx, Msg::MonitorStopped);
            analytica_info!("Health monitor stopped for {}", self.config.base_url());
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn state(&self) -> MonitorState {
        self.state_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<MonitorState> {
        self.state_tx.subscribe()
    }
}

impl Drop for HealthMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}

fn apply(state_tx: &watch::Sender<MonitorState>, msg: Msg) {
    state_tx.send_modify(|state| *state = update(std::mem::take(state), msg));
}

async fn run_monitor_loop(
    run: u64,
    prober: Arc<dyn HealthProber>,
    health_url: String,
    settings: MonitorSettings,
    state_tx: Arc<watch::Sender<MonitorState>>,
    shutdown: CancellationToken,
) {
    // The first tick completes immediately. Ticks that come due while a probe
    // is outstanding are delayed until it settles.
    let mut ticker = tokio::time::interval(settings.interval.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let outcome = tokio::select! {
            _ = shutdown.cancelled() => break,
            outcome = probe_with_timeout(prober.as_ref(), &health_url, settings.probe_timeout) => outcome,
        };
        if shutdown.is_cancelled() {
            break;
        }

        let previous = state_tx.borrow().connection();
        let error = outcome.error_text();
        // `update` ignores results tagged with an older run.
        apply(&state_tx, Msg::ProbeSettled { run, outcome });
        let current = state_tx.borrow().connection();

        if current != previous {
            match current {
                ConnectionState::Connected => {
                    analytica_info!("Backend reachable at {}", health_url)
                }
                ConnectionState::Disconnected => {
                    analytica_warn!("Backend unreachable at {}: {}", health_url, error)
                }
                ConnectionState::Checking => {}
            }
        } else {
            analytica_debug!("Health probe settled: {:?} {}", current, error);
        }
    }

    analytica_debug!("Health loop for {} shutting down", health_url);
}
