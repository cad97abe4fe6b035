//! The Python-facing browser control.
//!
//! One `BrowserControl` owns one embedded control and one callback set. The
//! constructor validates the callbacks, attaches the engine to the supplied
//! window handle, and registers the invoker as the control's exclusive event
//! sink. Destruction releases the control (detaching the engine from the
//! window) before the callback references.

use std::cell::RefCell;
use std::sync::Arc;

use pyo3::exceptions::{PyOSError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use tracing::debug;

use vitrine_common::{ControlError, EventSink};
use vitrine_webview::{ControlConfig, NativeControl, ParentWindow, WryControl};

use crate::callbacks::CallbackSet;
use crate::invoker::EventInvoker;

/// Map bridge errors to the host's error convention.
fn control_err(err: ControlError) -> PyErr {
    match err {
        ControlError::InvalidArgument(_) => PyValueError::new_err(err.to_string()),
        ControlError::EngineInit { .. } => PyOSError::new_err(err.to_string()),
        ControlError::EventInFlight | ControlError::WebView(_) => {
            PyRuntimeError::new_err(err.to_string())
        }
    }
}

/// An embedded browser surface inside a host window.
///
/// Lives on the engine's thread; events are delivered and resolved strictly
/// sequentially there. Field order matters for implicit teardown: the control
/// drops (and the engine detaches) before the invoker releases the callback
/// references.
#[pyclass(name = "BrowserControl", unsendable)]
pub struct BrowserControl {
    control: RefCell<Option<Box<dyn NativeControl>>>,
    invoker: Arc<EventInvoker>,
    window_handle: isize,
}

impl BrowserControl {
    pub(crate) fn assemble(
        control: Box<dyn NativeControl>,
        invoker: Arc<EventInvoker>,
        window_handle: isize,
    ) -> Self {
        Self {
            control: RefCell::new(Some(control)),
            invoker,
            window_handle,
        }
    }

    fn with_control<R>(
        &self,
        f: impl FnOnce(&dyn NativeControl) -> Result<R, ControlError>,
    ) -> PyResult<R> {
        let guard = self
            .control
            .try_borrow()
            .map_err(|_| PyRuntimeError::new_err("control is being torn down"))?;
        match guard.as_ref() {
            Some(control) => f(control.as_ref()).map_err(control_err),
            None => Err(PyRuntimeError::new_err("control already destroyed")),
        }
    }
}

#[pymethods]
impl BrowserControl {
    /// Attach an embedded browser to the window identified by
    /// `window_handle` and wire its events to the given callbacks.
    ///
    /// `on_load_request` and `on_action_url` must be supplied, though either
    /// may be `None` to decline the notification; `on_load_finished` may be
    /// omitted. Passing a non-callable raises `TypeError`; an engine attach
    /// failure raises `OSError` carrying the engine's status code.
    #[new]
    #[pyo3(signature = (window_handle, initial_url=None, user_agent=None, *, on_load_request, on_action_url, on_load_finished=None))]
    fn new(
        window_handle: isize,
        initial_url: Option<String>,
        user_agent: Option<String>,
        on_load_request: &Bound<'_, PyAny>,
        on_action_url: &Bound<'_, PyAny>,
        on_load_finished: Option<&Bound<'_, PyAny>>,
    ) -> PyResult<Self> {
        let callbacks =
            CallbackSet::register(Some(on_load_request), Some(on_action_url), on_load_finished)?;
        let invoker = Arc::new(EventInvoker::new(callbacks));

        let window = ParentWindow::from_handle(window_handle).map_err(control_err)?;
        let config = ControlConfig {
            initial_url,
            user_agent,
        };

        // On failure the invoker (and with it every callback reference taken
        // above) is dropped before this returns.
        let control =
            WryControl::attach(&window, &config, Arc::clone(&invoker) as Arc<dyn EventSink>)
                .map_err(control_err)?;

        debug!(window = window_handle, "browser control created");
        Ok(Self::assemble(Box::new(control), invoker, window_handle))
    }

    /// Load a URL in the control.
    fn navigate(&self, url: &str) -> PyResult<()> {
        self.with_control(|c| c.navigate(url))
    }

    /// Resize the control within the parent window.
    fn resize(&self, width: u32, height: u32) -> PyResult<()> {
        self.with_control(|c| c.resize(width, height))
    }

    /// Show the control and give it focus.
    fn activate(&self) -> PyResult<()> {
        self.with_control(|c| c.activate())
    }

    /// Hide the control.
    fn deactivate(&self) -> PyResult<()> {
        self.with_control(|c| c.deactivate())
    }

    /// Evaluate a script in the page context.
    fn run_script(&self, js: &str) -> PyResult<()> {
        self.with_control(|c| c.run_script(js))
    }

    /// Append markup as the last child of the element with `id`.
    fn add_element_at_end(&self, xml: &str, id: &str) -> PyResult<()> {
        self.with_control(|c| c.add_element_at_end(xml, id))
    }

    /// Insert markup immediately before the element with `id`.
    fn add_element_before(&self, xml: &str, id: &str) -> PyResult<()> {
        self.with_control(|c| c.add_element_before(xml, id))
    }

    /// Remove the element with `id`.
    fn remove_element(&self, id: &str) -> PyResult<()> {
        self.with_control(|c| c.remove_element(id))
    }

    /// Replace the element with `id` by the given markup.
    fn change_element(&self, id: &str, xml: &str) -> PyResult<()> {
        self.with_control(|c| c.change_element(id, xml))
    }

    /// Hide the element with `id`.
    fn hide_element(&self, id: &str) -> PyResult<()> {
        self.with_control(|c| c.hide_element(id))
    }

    /// Show a previously hidden element.
    fn show_element(&self, id: &str) -> PyResult<()> {
        self.with_control(|c| c.show_element(id))
    }

    /// Tear down the control: the engine detaches from the window first,
    /// then the callback references are released. Raises `RuntimeError` if an
    /// event is mid-dispatch or the control was already destroyed.
    fn destroy(&self) -> PyResult<()> {
        if self.invoker.in_flight() {
            return Err(control_err(ControlError::EventInFlight));
        }
        let control = self
            .control
            .try_borrow_mut()
            .map_err(|_| control_err(ControlError::EventInFlight))?
            .take()
            .ok_or_else(|| PyRuntimeError::new_err("control already destroyed"))?;
        drop(control);

        self.invoker.detach().map_err(control_err)?;
        debug!(window = self.window_handle, "browser control destroyed");
        Ok(())
    }

    fn __repr__(&self) -> String {
        format!("<BrowserControl on window {:#x}>", self.window_handle)
    }
}
