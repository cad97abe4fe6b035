//! The per-control callback set.

use pyo3::prelude::*;

use crate::callable::CallableHandle;

/// The three callback slots of one control, one per event kind.
///
/// Slots are independent: each is checked and invoked on its own when its
/// event fires. The set lives exactly as long as the owning control.
pub(crate) struct CallbackSet {
    pub(crate) load_request: CallableHandle,
    pub(crate) action_url: CallableHandle,
    pub(crate) load_finished: CallableHandle,
}

impl CallbackSet {
    /// Validate all three values, then retain references.
    ///
    /// Validation runs to completion before the first reference is taken, so
    /// a failure cannot leave a partially-retained set.
    pub(crate) fn register(
        load_request: Option<&Bound<'_, PyAny>>,
        action_url: Option<&Bound<'_, PyAny>>,
        load_finished: Option<&Bound<'_, PyAny>>,
    ) -> PyResult<Self> {
        CallableHandle::check("on_load_request", load_request)?;
        CallableHandle::check("on_action_url", action_url)?;
        CallableHandle::check("on_load_finished", load_finished)?;

        Ok(Self {
            load_request: CallableHandle::retain(load_request),
            action_url: CallableHandle::retain(action_url),
            load_finished: CallableHandle::retain(load_finished),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyo3::exceptions::PyTypeError;

    #[test]
    fn all_sentinels_build_an_empty_set() {
        Python::with_gil(|py| {
            let none = py.None();
            let set = CallbackSet::register(Some(none.bind(py)), Some(none.bind(py)), None).unwrap();
            assert!(!set.load_request.is_present());
            assert!(!set.action_url.is_present());
            assert!(!set.load_finished.is_present());
        });
    }

    #[test]
    fn mixed_slots_register_independently() {
        Python::with_gil(|py| {
            let func = py.eval(c"lambda url: True", None, None).unwrap();
            let none = py.None();
            let set = CallbackSet::register(Some(&func), Some(none.bind(py)), None).unwrap();
            assert!(set.load_request.is_present());
            assert!(!set.action_url.is_present());
        });
    }

    #[test]
    fn invalid_slot_fails_the_whole_set() {
        Python::with_gil(|py| {
            let func = py.eval(c"lambda url: True", None, None).unwrap();
            let bad = py.eval(c"'not callable'", None, None).unwrap();
            let err = CallbackSet::register(Some(&func), Some(&bad), None).unwrap_err();
            assert!(err.is_instance_of::<PyTypeError>(py));
            assert!(err.to_string().contains("on_action_url must be callable"));
        });
    }

    #[test]
    fn failed_registration_retains_nothing() {
        Python::with_gil(|py| {
            let func = py.eval(c"lambda url: True", None, None).unwrap().unbind();
            let base = func.get_refcnt(py);

            // The first slot is valid, the last is not. The valid slot must
            // not be left holding a reference.
            let bad = py.eval(c"object()", None, None).unwrap();
            let result = CallbackSet::register(Some(func.bind(py)), Some(&bad), None);
            assert!(result.is_err());
            assert_eq!(func.get_refcnt(py), base);
        });
    }
}
