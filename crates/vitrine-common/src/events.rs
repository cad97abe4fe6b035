//! The engine-facing event contract.
//!
//! The embedded engine raises three event kinds on its single-threaded loop:
//! a load request (which the sink must answer synchronously), an action-scheme
//! URL notification, and a load-finished notification. `EventSink` is the
//! bridge's side of that contract.

/// The native-domain answer to a load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadDecision {
    /// Let the navigation proceed.
    Allow,
    /// Cancel the navigation.
    Deny,
}

impl LoadDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

impl From<bool> for LoadDecision {
    fn from(allow: bool) -> Self {
        if allow {
            Self::Allow
        } else {
            Self::Deny
        }
    }
}

/// Receives the embedded engine's events.
///
/// Events are delivered strictly sequentially on the engine's single thread,
/// but a handler may re-enter the engine (e.g. a load-request handler that
/// triggers another navigation), so implementations must tolerate nested
/// delivery. Handler closures registered on the engine are `'static`, hence
/// the `Send + Sync` bound.
pub trait EventSink: Send + Sync {
    /// A navigation was requested. The returned decision is consumed
    /// synchronously by the engine.
    fn on_load_request(&self, url: &str) -> LoadDecision;

    /// An action-scheme URL was intercepted. Fire-and-forget.
    fn on_action_url(&self, url: &str);

    /// The document finished loading. Fire-and-forget.
    fn on_load_finished(&self);
}
