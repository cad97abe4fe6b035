//! Vitrine Python bindings via PyO3.

use pyo3::prelude::*;

mod bridge;
mod callable;
mod callbacks;
mod invoker;
mod runtime;

/// The native Rust module exposed to Python as `vitrine._native`.
#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<bridge::BrowserControl>()?;
    Ok(())
}
