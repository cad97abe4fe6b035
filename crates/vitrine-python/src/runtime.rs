//! Runtime lock discipline for reentering Python from the engine thread.
//!
//! The engine's event loop is a native thread that did not originate inside
//! the interpreter, so the global execution lock must be acquired explicitly
//! before every callback invocation. Acquisition is scoped: the lock is
//! released on every exit path out of the closure, including unwinds, and it
//! nests: a callback that re-enters the engine and triggers another dispatch
//! on the same thread re-acquires without deadlocking.

use pyo3::prelude::*;

/// Run `f` with the interpreter's global execution lock held.
pub(crate) fn with_runtime_lock<R>(f: impl FnOnce(Python<'_>) -> R) -> R {
    Python::with_gil(f)
}
