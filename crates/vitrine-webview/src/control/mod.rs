//! The embedded browser control capability.
//!
//! [`NativeControl`] is the surface the bridge drives; [`WryControl`] is the
//! production implementation backed by a wry child webview. Keeping the trait
//! between them lets the callback machinery be exercised without a display
//! server.

mod handlers;
mod wry_control;

pub use handlers::{is_action_url, ACTION_SCHEME};
pub use wry_control::WryControl;

use vitrine_common::Result;

use crate::dom;

/// An embedded browser surface attached to a host window.
///
/// One control per window attachment; destroying the control (dropping it)
/// tears down the engine's attachment. All operations are forwarded verbatim
/// to the engine.
pub trait NativeControl {
    /// Load a URL in the control.
    fn navigate(&self, url: &str) -> Result<()>;

    /// Resize the control within the parent window.
    fn resize(&self, width: u32, height: u32) -> Result<()>;

    /// Show the control and give it focus.
    fn activate(&self) -> Result<()>;

    /// Hide the control.
    fn deactivate(&self) -> Result<()>;

    /// Evaluate a script in the page context.
    fn run_script(&self, js: &str) -> Result<()>;

    // DOM element mutation, built on `run_script`.

    fn add_element_at_end(&self, xml: &str, id: &str) -> Result<()> {
        self.run_script(&dom::add_element_at_end(xml, id))
    }

    fn add_element_before(&self, xml: &str, id: &str) -> Result<()> {
        self.run_script(&dom::add_element_before(xml, id))
    }

    fn remove_element(&self, id: &str) -> Result<()> {
        self.run_script(&dom::remove_element(id))
    }

    fn change_element(&self, id: &str, xml: &str) -> Result<()> {
        self.run_script(&dom::change_element(id, xml))
    }

    fn hide_element(&self, id: &str) -> Result<()> {
        self.run_script(&dom::hide_element(id))
    }

    fn show_element(&self, id: &str) -> Result<()> {
        self.run_script(&dom::show_element(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every script handed to `run_script`.
    struct ScriptRecorder {
        scripts: Mutex<Vec<String>>,
    }

    impl NativeControl for ScriptRecorder {
        fn navigate(&self, _url: &str) -> Result<()> {
            Ok(())
        }
        fn resize(&self, _width: u32, _height: u32) -> Result<()> {
            Ok(())
        }
        fn activate(&self) -> Result<()> {
            Ok(())
        }
        fn deactivate(&self) -> Result<()> {
            Ok(())
        }
        fn run_script(&self, js: &str) -> Result<()> {
            self.scripts.lock().unwrap().push(js.to_string());
            Ok(())
        }
    }

    #[test]
    fn dom_operations_route_through_run_script() {
        let control = ScriptRecorder {
            scripts: Mutex::new(Vec::new()),
        };
        control.add_element_at_end("<li>a</li>", "list").unwrap();
        control.remove_element("list").unwrap();
        control.hide_element("list").unwrap();

        let scripts = control.scripts.lock().unwrap();
        assert_eq!(scripts.len(), 3);
        assert!(scripts[0].contains("insertAdjacentHTML"));
        assert!(scripts[1].contains("removeChild"));
        assert!(scripts[2].contains("display = 'none'"));
    }
}
