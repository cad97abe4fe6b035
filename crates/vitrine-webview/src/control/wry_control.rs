use std::sync::Arc;

use tracing::{debug, error};
use wry::{WebView, WebViewBuilder};

use vitrine_common::errors::ENGINE_ATTACH_FAILED;
use vitrine_common::{ControlError, EventSink, Result};

use crate::config::ControlConfig;
use crate::window::ParentWindow;

use super::NativeControl;

/// The production control: a wry child webview attached to the parent window.
///
/// The sink passed to [`attach`](WryControl::attach) becomes the exclusive
/// event receiver for this control. Dropping the control tears down the
/// engine's attachment to the window.
pub struct WryControl {
    webview: WebView,
    window_id: isize,
}

impl WryControl {
    /// Attach the embedded engine to `window` and wire its events to `sink`.
    ///
    /// Fails with `EngineInit` if the engine refuses the window; nothing is
    /// retained on that path.
    pub fn attach(
        window: &ParentWindow,
        config: &ControlConfig,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self> {
        let mut builder = WebViewBuilder::new().with_focused(false);

        if let Some(agent) = &config.user_agent {
            builder = builder.with_user_agent(agent);
        }

        builder = Self::attach_navigation_handler(builder, Arc::clone(&sink));
        builder = Self::attach_page_load_handler(builder, sink);

        if let Some(url) = &config.initial_url {
            builder = builder.with_url(url);
        } else {
            builder = builder.with_html("<html><body></body></html>");
        }

        let webview = builder
            .build_as_child(window)
            .map_err(|e| engine_init(window.raw_id(), e))?;

        debug!(
            window = window.raw_id(),
            url = config.initial_url.as_deref().unwrap_or("about:blank"),
            "embedded control attached"
        );

        Ok(Self {
            webview,
            window_id: window.raw_id(),
        })
    }
}

impl NativeControl for WryControl {
    fn navigate(&self, url: &str) -> Result<()> {
        self.webview.load_url(url).map_err(webview_err)
    }

    fn resize(&self, width: u32, height: u32) -> Result<()> {
        let bounds = wry::Rect {
            position: wry::dpi::LogicalPosition::new(0.0, 0.0).into(),
            size: wry::dpi::LogicalSize::new(width as f64, height as f64).into(),
        };
        self.webview.set_bounds(bounds).map_err(webview_err)
    }

    fn activate(&self) -> Result<()> {
        self.webview.set_visible(true).map_err(webview_err)?;
        self.webview.focus().map_err(webview_err)
    }

    fn deactivate(&self) -> Result<()> {
        self.webview.set_visible(false).map_err(webview_err)
    }

    fn run_script(&self, js: &str) -> Result<()> {
        self.webview.evaluate_script(js).map_err(webview_err)
    }
}

impl Drop for WryControl {
    fn drop(&mut self) {
        debug!(window = self.window_id, "embedded control detached");
    }
}

fn engine_init(window_id: isize, err: wry::Error) -> ControlError {
    error!(window = window_id, error = %err, "embedded engine failed to attach");
    ControlError::EngineInit {
        code: ENGINE_ATTACH_FAILED,
        detail: err.to_string(),
    }
}

fn webview_err(err: wry::Error) -> ControlError {
    ControlError::WebView(err.to_string())
}
