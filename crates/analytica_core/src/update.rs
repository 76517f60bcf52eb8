use crate::{ConnectionState, MonitorState, Msg};

/// Pure update function: applies a message to the monitor state.
pub fn update(mut state: MonitorState, msg: Msg) -> MonitorState {
    match msg {
        Msg::MonitorStarted { run, backend_url } => state.begin(run, backend_url),
        Msg::ProbeSettled { run, outcome } => {
            // Results that land after teardown, or that belong to an earlier
            // run, are dropped.
            if !state.is_active() || state.run() != run {
                return state;
            }
            let connection = if outcome.ok {
                ConnectionState::Connected
            } else {
                ConnectionState::Disconnected
            };
            state.settle(connection, outcome.error_text());
        }
        Msg::MonitorStopped => state.end(),
    }
    state
}
