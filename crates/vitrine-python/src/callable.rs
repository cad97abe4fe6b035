//! Counted references to Python callables.

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;

/// A counted reference to a Python callable, or the explicit absent sentinel.
///
/// The reference is taken at registration and released exactly once, when the
/// handle drops, however teardown is reached. An absent handle never enters
/// the interpreter; checking it is a plain `Option` test.
pub(crate) struct CallableHandle {
    target: Option<Py<PyAny>>,
}

impl CallableHandle {
    /// The absent sentinel.
    pub(crate) fn absent() -> Self {
        Self { target: None }
    }

    /// Check that `value` is registrable for `slot`: the absent sentinel
    /// (Python `None`, or an omitted optional argument) or a callable.
    /// Anything else is a `TypeError` naming the slot.
    pub(crate) fn check(slot: &str, value: Option<&Bound<'_, PyAny>>) -> PyResult<()> {
        match value {
            None => Ok(()),
            Some(v) if v.is_none() || v.is_callable() => Ok(()),
            Some(_) => Err(PyTypeError::new_err(format!("{slot} must be callable"))),
        }
    }

    /// Retain a reference to a value that [`check`](Self::check) accepted.
    pub(crate) fn retain(value: Option<&Bound<'_, PyAny>>) -> Self {
        match value {
            Some(v) if !v.is_none() => Self {
                target: Some(v.clone().unbind()),
            },
            _ => Self::absent(),
        }
    }

    /// Validate and retain in one step.
    pub(crate) fn register(slot: &str, value: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        Self::check(slot, value)?;
        Ok(Self::retain(value))
    }

    pub(crate) fn is_present(&self) -> bool {
        self.target.is_some()
    }

    /// Clone the underlying reference for one dispatch. The clone is a
    /// transient count, dropped when the dispatch completes; the registration
    /// reference is untouched.
    pub(crate) fn for_dispatch(&self, py: Python<'_>) -> Option<Py<PyAny>> {
        self.target.as_ref().map(|t| t.clone_ref(py))
    }
}
