use analytica_core::{
    update, ConnectionState, DeploymentKind, HealthProbeOutcome, MonitorState, Msg,
    GENERIC_TRANSPORT_MESSAGE, TIMEOUT_MESSAGE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    analytica_logging::initialize_for_tests();
}

fn started(url: &str) -> MonitorState {
    update(
        MonitorState::new(),
        Msg::MonitorStarted {
            run: 1,
            backend_url: url.to_string(),
        },
    )
}

fn settled(outcome: HealthProbeOutcome) -> Msg {
    Msg::ProbeSettled { run: 1, outcome }
}

#[test]
fn initial_state_is_checking() {
    let state = MonitorState::new();
    assert_eq!(state.connection(), ConnectionState::Checking);
    assert!(!state.is_active());

    let state = started("http://127.0.0.1:5000");
    assert_eq!(state.connection(), ConnectionState::Checking);
    assert_eq!(state.backend_url(), "http://127.0.0.1:5000");
    assert!(state.is_active());
}

#[test]
fn success_connects_and_clears_error() {
    init_logging();
    let state = started("http://127.0.0.1:5000");
    let state = update(
        state,
        settled(HealthProbeOutcome::http_error(502, Some("Bad Gateway"))),
    );
    assert_eq!(state.error(), "HTTP 502: Bad Gateway");

    let state = update(state, settled(HealthProbeOutcome::success(200)));
    assert_eq!(state.connection(), ConnectionState::Connected);
    assert_eq!(state.error(), "");
    assert_eq!(state.probes_completed(), 2);
}

#[test]
fn failures_disconnect_with_distinct_messages() {
    let state = started("http://127.0.0.1:5000");

    let timed_out = update(state.clone(), settled(HealthProbeOutcome::timed_out()));
    assert_eq!(timed_out.connection(), ConnectionState::Disconnected);
    assert_eq!(timed_out.error(), TIMEOUT_MESSAGE);

    let refused = update(
        state.clone(),
        settled(HealthProbeOutcome::transport(Some("connection refused".into()))),
    );
    assert_eq!(refused.connection(), ConnectionState::Disconnected);
    assert_eq!(refused.error(), "connection refused");
    assert_ne!(refused.error(), timed_out.error());

    let silent = update(state, settled(HealthProbeOutcome::transport(None)));
    assert_eq!(silent.error(), GENERIC_TRANSPORT_MESSAGE);
}

#[test]
fn results_after_stop_are_discarded() {
    let state = started("http://127.0.0.1:5000");
    let stopped = update(state, Msg::MonitorStopped);
    let after = update(stopped.clone(), settled(HealthProbeOutcome::success(200)));
    assert_eq!(after, stopped);
    assert_eq!(after.connection(), ConnectionState::Checking);
}

#[test]
fn restart_resets_to_checking() {
    let state = started("http://127.0.0.1:5000");
    let state = update(state, settled(HealthProbeOutcome::timed_out()));
    let state = update(state, Msg::MonitorStopped);
    let state = update(
        state,
        Msg::MonitorStarted {
            run: 2,
            backend_url: "https://api.example.com".into(),
        },
    );
    assert_eq!(state.connection(), ConnectionState::Checking);
    assert_eq!(state.error(), "");
    assert_eq!(state.backend_url(), "https://api.example.com");
}

#[test]
fn view_shows_detail_only_when_disconnected() {
    let state = started("http://127.0.0.1:5000");
    let view = state.view();
    assert_eq!(view.headline, "Checking backend...");
    assert_eq!(view.backend_url, None);
    assert_eq!(view.environment, Some(DeploymentKind::Development));
    assert!(view.is_development());

    let down = update(
        state.clone(),
        settled(HealthProbeOutcome::http_error(
            503,
            Some("Service Unavailable"),
        )),
    );
    let view = down.view();
    assert_eq!(view.headline, "Backend Disconnected");
    assert_eq!(view.backend_url.as_deref(), Some("http://127.0.0.1:5000"));
    assert_eq!(view.error.as_deref(), Some("HTTP 503: Service Unavailable"));

    let up = update(down, settled(HealthProbeOutcome::success(200)));
    let view = up.view();
    assert_eq!(view.headline, "Backend Connected");
    assert_eq!(view.error, None);
}

#[test]
fn result_from_previous_run_is_dropped_after_restart() {
    let state = started("http://127.0.0.1:5000");
    let state = update(state, Msg::MonitorStopped);
    let state = update(
        state,
        Msg::MonitorStarted {
            run: 2,
            backend_url: "http://127.0.0.1:5000".into(),
        },
    );

    let late = update(
        state.clone(),
        Msg::ProbeSettled {
            run: 1,
            outcome: HealthProbeOutcome::success(200),
        },
    );
    assert_eq!(late, state);
    assert_eq!(late.connection(), ConnectionState::Checking);
    assert_eq!(late.probes_completed(), 0);

    let current = update(
        late,
        Msg::ProbeSettled {
            run: 2,
            outcome: HealthProbeOutcome::timed_out(),
        },
    );
    assert_eq!(current.connection(), ConnectionState::Disconnected);
    assert_eq!(current.run(), 2);
}

#[test]
fn status_without_reason_has_no_trailing_separator() {
    let outcome = HealthProbeOutcome::http_error(599, None);
    assert_eq!(outcome.error_text(), "HTTP 599");
    assert_eq!(HealthProbeOutcome::http_error(599, Some("")).error_text(), "HTTP 599");
}
