use std::sync::Arc;

use tracing::debug;
use wry::WebViewBuilder;

use vitrine_common::EventSink;

use super::wry_control::WryControl;

// =============================================================================
// ACTION URL CLASSIFICATION
// =============================================================================

/// Scheme reserved for host commands embedded in page content.
///
/// A navigation to `action:<command>` is never loaded; it is diverted to the
/// sink as a notification and the navigation is cancelled. This check runs on
/// every navigation attempt, so it stays a plain prefix comparison.
pub const ACTION_SCHEME: &str = "action:";

/// Check whether a URL carries the action scheme. Schemes are
/// case-insensitive per RFC 3986.
pub fn is_action_url(url: &str) -> bool {
    url.len() >= ACTION_SCHEME.len()
        && url.as_bytes()[..ACTION_SCHEME.len()].eq_ignore_ascii_case(ACTION_SCHEME.as_bytes())
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WryControl {
    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        sink: Arc<dyn EventSink>,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if is_action_url(&url) {
                debug!(url = %url, "action URL intercepted");
                sink.on_action_url(&url);
                return false;
            }

            let decision = sink.on_load_request(&url);
            debug!(url = %url, ?decision, "load request resolved");
            decision.is_allowed()
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        sink: Arc<dyn EventSink>,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| match event {
            wry::PageLoadEvent::Started => {
                debug!(url = %url, "page load started");
            }
            wry::PageLoadEvent::Finished => {
                debug!(url = %url, "page load finished");
                sink.on_load_finished();
            }
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
