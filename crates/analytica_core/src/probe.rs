/// Error text for a probe cancelled by its timeout.
pub const TIMEOUT_MESSAGE: &str = "Request timeout - backend may be sleeping";
/// Error text for a transport failure that carried no message of its own.
pub const GENERIC_TRANSPORT_MESSAGE: &str = "Failed to connect to backend";

/// Result of one health probe, consumed immediately by [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthProbeOutcome {
    pub ok: bool,
    pub status_code: Option<u16>,
    pub error_message: Option<String>,
    pub timed_out: bool,
}

impl HealthProbeOutcome {
    pub fn success(status_code: u16) -> Self {
        Self {
            ok: true,
            status_code: Some(status_code),
            error_message: None,
            timed_out: false,
        }
    }

    /// Non-2xx response; rendered as `HTTP <status>: <reason>`, or
    /// `HTTP <status>` when the status has no reason phrase.
    pub fn http_error(status_code: u16, reason: Option<&str>) -> Self {
        let error_message = match reason.map(str::trim).filter(|r| !r.is_empty()) {
            Some(reason) => format!("HTTP {status_code}: {reason}"),
            None => format!("HTTP {status_code}"),
        };
        Self {
            ok: false,
            status_code: Some(status_code),
            error_message: Some(error_message),
            timed_out: false,
        }
    }

    pub fn timed_out() -> Self {
        Self {
            ok: false,
            status_code: None,
            error_message: Some(TIMEOUT_MESSAGE.to_string()),
            timed_out: true,
        }
    }

    pub fn transport(message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_TRANSPORT_MESSAGE.to_string());
        Self {
            ok: false,
            status_code: None,
            error_message: Some(message),
            timed_out: false,
        }
    }

    /// Text shown next to the connection state; empty on success.
    pub fn error_text(&self) -> String {
        if self.ok {
            return String::new();
        }
        self.error_message
            .clone()
            .unwrap_or_else(|| GENERIC_TRANSPORT_MESSAGE.to_string())
    }
}
