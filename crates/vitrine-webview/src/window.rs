//! Parent window wrapper.
//!
//! The host hands us a bare integer window handle (an HWND on Windows, an
//! NSView pointer on macOS, an X11 window id elsewhere). `ParentWindow`
//! validates it and exposes it through `raw_window_handle` so the engine can
//! attach a child webview to it.

use vitrine_common::{ControlError, Result};
use wry::raw_window_handle::{
    HandleError, HasWindowHandle, RawWindowHandle, WindowHandle,
};

/// A caller-supplied native window, identified by its raw handle.
///
/// The caller guarantees the window outlives any control attached to it; the
/// bridge never owns the window itself.
pub struct ParentWindow {
    raw: RawWindowHandle,
    id: isize,
}

impl ParentWindow {
    /// Wrap a raw integer window handle for the current platform.
    ///
    /// Fails with `InvalidArgument` if the handle is zero, the one value
    /// that is invalid on every platform. A non-zero but stale handle is
    /// caught later, by the engine attach itself.
    pub fn from_handle(handle: isize) -> Result<Self> {
        if handle == 0 {
            return Err(ControlError::invalid_argument(
                "window handle must be a valid native window reference",
            ));
        }
        Ok(Self {
            raw: raw_handle_for_platform(handle),
            id: handle,
        })
    }

    /// The raw integer handle, for diagnostics.
    pub fn raw_id(&self) -> isize {
        self.id
    }
}

impl HasWindowHandle for ParentWindow {
    fn window_handle(&self) -> std::result::Result<WindowHandle<'_>, HandleError> {
        // SAFETY: the raw handle was supplied by the host, which keeps the
        // window alive for the lifetime of the attached control.
        unsafe { Ok(WindowHandle::borrow_raw(self.raw)) }
    }
}

#[cfg(target_os = "windows")]
fn raw_handle_for_platform(handle: isize) -> RawWindowHandle {
    use std::num::NonZeroIsize;
    use wry::raw_window_handle::Win32WindowHandle;

    // Non-zero is checked in `from_handle`.
    let hwnd = NonZeroIsize::new(handle).expect("handle checked non-zero");
    RawWindowHandle::Win32(Win32WindowHandle::new(hwnd))
}

#[cfg(target_os = "macos")]
fn raw_handle_for_platform(handle: isize) -> RawWindowHandle {
    use std::ptr::NonNull;
    use wry::raw_window_handle::AppKitWindowHandle;

    let ns_view = NonNull::new(handle as *mut std::ffi::c_void)
        .expect("handle checked non-zero");
    RawWindowHandle::AppKit(AppKitWindowHandle::new(ns_view))
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn raw_handle_for_platform(handle: isize) -> RawWindowHandle {
    use wry::raw_window_handle::XlibWindowHandle;

    RawWindowHandle::Xlib(XlibWindowHandle::new(handle as std::os::raw::c_ulong))
}
