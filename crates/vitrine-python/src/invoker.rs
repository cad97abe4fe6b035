//! Event dispatch into Python.
//!
//! One invoker per control. The engine delivers events on its single thread;
//! each present callback is invoked under the runtime lock and its result is
//! translated back into the control signal the engine expects. A callback
//! that raises never propagates into the engine: the fault is reported to the
//! diagnostic sink and the event resolves with its neutral default, so the
//! engine loop is never left blocked.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use pyo3::prelude::*;
use tracing::warn;

use vitrine_common::{ControlError, EventSink, LoadDecision};

use crate::callable::CallableHandle;
use crate::callbacks::CallbackSet;
use crate::runtime::with_runtime_lock;

/// Permissive by default: a missing or faulting load-request callback must
/// not wedge the engine loop, so the navigation proceeds. Flip to `Deny` to
/// fail closed instead.
const LOAD_REQUEST_NEUTRAL: LoadDecision = LoadDecision::Allow;

/// Converts engine events into Python callback invocations.
///
/// The slot lock is held only long enough to clone the callable reference,
/// never across the call into Python, since a callback may re-enter the engine and
/// trigger a nested dispatch on this same thread before returning.
pub(crate) struct EventInvoker {
    callbacks: Mutex<Option<CallbackSet>>,
    detached: AtomicBool,
    in_flight: AtomicU32,
}

/// Scope marker for one dispatch; decrements on every exit path.
struct InFlight<'a>(&'a AtomicU32);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicU32) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl EventInvoker {
    pub(crate) fn new(callbacks: CallbackSet) -> Self {
        Self {
            callbacks: Mutex::new(Some(callbacks)),
            detached: AtomicBool::new(false),
            in_flight: AtomicU32::new(0),
        }
    }

    /// Whether a dispatch is currently on the stack.
    pub(crate) fn in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire) > 0
    }

    /// Drop the callback set, releasing every retained reference exactly
    /// once. Refused while a dispatch is on the stack. After detaching,
    /// events resolve to their neutral defaults without entering Python.
    pub(crate) fn detach(&self) -> Result<(), ControlError> {
        if self.in_flight() {
            return Err(ControlError::EventInFlight);
        }
        self.detached.store(true, Ordering::Release);
        *self.callbacks.lock().unwrap() = None;
        Ok(())
    }

    /// Fast path for the engine: absent or detached slots resolve without
    /// touching the interpreter. Load requests fire on every navigation
    /// attempt, so this stays an uncontended lock and an `Option` test.
    fn slot_present(&self, pick: impl Fn(&CallbackSet) -> &CallableHandle) -> bool {
        !self.detached.load(Ordering::Acquire)
            && self
                .callbacks
                .lock()
                .unwrap()
                .as_ref()
                .is_some_and(|set| pick(set).is_present())
    }

    /// Clone the slot's callable for one dispatch. The slot lock is released
    /// before this returns.
    fn snapshot(
        &self,
        py: Python<'_>,
        pick: impl Fn(&CallbackSet) -> &CallableHandle,
    ) -> Option<Py<PyAny>> {
        let guard = self.callbacks.lock().unwrap();
        guard.as_ref().and_then(|set| pick(set).for_dispatch(py))
    }
}

impl EventSink for EventInvoker {
    fn on_load_request(&self, url: &str) -> LoadDecision {
        if !self.slot_present(|set| &set.load_request) {
            return LOAD_REQUEST_NEUTRAL;
        }

        let _dispatch = InFlight::enter(&self.in_flight);
        with_runtime_lock(|py| {
            let Some(callback) = self.snapshot(py, |set| &set.load_request) else {
                return LOAD_REQUEST_NEUTRAL;
            };
            match callback.call1(py, (url,)) {
                Ok(result) => interpret_load_result(py, &result).unwrap_or_else(|err| {
                    warn!(url = %url, error = %err, "load-request result not interpretable; allowing");
                    LOAD_REQUEST_NEUTRAL
                }),
                Err(err) => {
                    warn!(url = %url, error = %err, "ignoring exception in load-request callback");
                    LOAD_REQUEST_NEUTRAL
                }
            }
        })
    }

    fn on_action_url(&self, url: &str) {
        if !self.slot_present(|set| &set.action_url) {
            return;
        }

        let _dispatch = InFlight::enter(&self.in_flight);
        with_runtime_lock(|py| {
            let Some(callback) = self.snapshot(py, |set| &set.action_url) else {
                return;
            };
            // Fire-and-forget: the result is ignored entirely.
            if let Err(err) = callback.call1(py, (url,)) {
                warn!(url = %url, error = %err, "ignoring exception in action-url callback");
            }
        })
    }

    fn on_load_finished(&self) {
        if !self.slot_present(|set| &set.load_finished) {
            return;
        }

        let _dispatch = InFlight::enter(&self.in_flight);
        with_runtime_lock(|py| {
            let Some(callback) = self.snapshot(py, |set| &set.load_finished) else {
                return;
            };
            if let Err(err) = callback.call0(py) {
                warn!(error = %err, "ignoring exception in load-finished callback");
            }
        })
    }
}

/// Translate a load-request callback's return value.
///
/// `None` is "no opinion" and allows; any other value decides by truthiness.
/// Truthiness evaluation itself may raise (a custom `__bool__`), which the
/// caller treats as a fault.
fn interpret_load_result(py: Python<'_>, result: &Py<PyAny>) -> PyResult<LoadDecision> {
    if result.is_none(py) {
        return Ok(LoadDecision::Allow);
    }
    Ok(result.bind(py).is_truthy()?.into())
}
