//! Embedded browser control for Vitrine.
//!
//! Wraps the `wry` crate to provide:
//! - A child webview attached to a caller-supplied native window handle
//! - Synchronous event routing (load requests, action-scheme URLs, load
//!   completion) into an [`EventSink`](vitrine_common::EventSink)
//! - Passthrough operations: navigation, geometry, visibility, script
//!   evaluation, DOM element mutation

pub mod config;
pub mod control;
pub mod dom;
pub mod window;

pub use config::ControlConfig;
pub use control::{is_action_url, NativeControl, WryControl};
pub use window::ParentWindow;
