use wasm_bindgen::JsValue;

/// Renders a server timestamp in the browser's locale.
///
/// Unparseable input is shown as-is rather than as "Invalid Date".
pub(crate) fn format_created_at(created_at: &str) -> String {
    let created_at = created_at.trim();
    if created_at.is_empty() {
        return String::new();
    }

    let d = js_sys::Date::new(&JsValue::from_str(created_at));
    if d.get_time().is_nan() {
        return created_at.to_string();
    }

    d.to_locale_string("default", &JsValue::UNDEFINED).into()
}
