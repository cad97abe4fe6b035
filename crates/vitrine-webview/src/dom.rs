//! DOM mutation snippets.
//!
//! The host mutates page content by element id (append, insert, replace,
//! remove, hide, show). Each operation is a small guarded script evaluated in
//! the page: missing elements are a no-op, and every caller-supplied string is
//! embedded as a JSON string literal so markup and ids can never escape the
//! script context.

/// Encode a string as a JavaScript string literal.
fn js_str(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

fn with_element(id: &str, body: &str) -> String {
    format!(
        "(function() {{\n  var elt = document.getElementById({id});\n  if (!elt) return;\n  {body}\n}})();",
        id = js_str(id),
        body = body,
    )
}

/// Append `xml` as the last child of the element with `id`.
pub fn add_element_at_end(xml: &str, id: &str) -> String {
    with_element(
        id,
        &format!("elt.insertAdjacentHTML('beforeend', {});", js_str(xml)),
    )
}

/// Insert `xml` immediately before the element with `id`.
pub fn add_element_before(xml: &str, id: &str) -> String {
    with_element(
        id,
        &format!("elt.insertAdjacentHTML('beforebegin', {});", js_str(xml)),
    )
}

/// Remove the element with `id` from the document.
pub fn remove_element(id: &str) -> String {
    with_element(id, "elt.parentNode.removeChild(elt);")
}

/// Replace the element with `id` by `xml`.
pub fn change_element(id: &str, xml: &str) -> String {
    with_element(id, &format!("elt.outerHTML = {};", js_str(xml)))
}

/// Hide the element with `id`.
pub fn hide_element(id: &str) -> String {
    with_element(id, "elt.style.display = 'none';")
}

/// Show a previously hidden element.
pub fn show_element(id: &str) -> String {
    with_element(id, "elt.style.display = '';")
}
