use web_sys::Window;

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is
/// unavailable.
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Current viewport width in CSS pixels.
pub fn viewport_width() -> u32 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .map(|width| width as u32)
        .unwrap_or(0)
}
