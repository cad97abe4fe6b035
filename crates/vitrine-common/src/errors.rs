/// Generic attach-failure status used when the platform engine does not
/// surface a numeric code of its own (E_FAIL).
pub const ENGINE_ATTACH_FAILED: u32 = 0x8000_4005;

#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The embedded engine refused to attach to the window. `code` is the
    /// engine's own status when the platform reports one, else
    /// [`ENGINE_ATTACH_FAILED`]; `detail` keeps the engine's textual error.
    #[error("embedded engine refused to attach; status = {code:#010x}: {detail}")]
    EngineInit { code: u32, detail: String },

    #[error("an event is being dispatched; the control cannot be destroyed from inside a callback")]
    EventInFlight,

    #[error("webview error: {0}")]
    WebView(String),
}

impl ControlError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// The engine status code, for errors that carry one.
    pub fn engine_status(&self) -> Option<u32> {
        match self {
            Self::EngineInit { code, .. } => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display() {
        let err = ControlError::invalid_argument("window handle must be non-zero");
        assert_eq!(
            err.to_string(),
            "invalid argument: window handle must be non-zero"
        );
    }

    #[test]
    fn engine_init_display_carries_hex_status() {
        let err = ControlError::EngineInit {
            code: 0x8000_4005,
            detail: "webview2 runtime missing".into(),
        };
        let msg = err.to_string();
        assert!(
            msg.contains("status = 0x80004005"),
            "status code must be hexadecimal in the message, got: {msg}"
        );
        assert!(msg.contains("webview2 runtime missing"));
    }

    #[test]
    fn engine_init_status_is_recoverable() {
        let err = ControlError::EngineInit {
            code: 0x8007_0057,
            detail: "invalid window".into(),
        };
        assert_eq!(err.engine_status(), Some(0x8007_0057));
        assert_eq!(
            ControlError::invalid_argument("nope").engine_status(),
            None
        );
    }

    #[test]
    fn event_in_flight_display() {
        let msg = ControlError::EventInFlight.to_string();
        assert!(msg.contains("cannot be destroyed"));
    }

    #[test]
    fn webview_error_display() {
        let err = ControlError::WebView("script evaluation failed".into());
        assert_eq!(err.to_string(), "webview error: script evaluation failed");
    }
}
