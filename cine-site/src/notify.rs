//! One-shot user-visible error notifications.
//!
//! Mirrors the mobile/desktop split of the UI: phones get a centered
//! toast, larger viewports a banner at the top of the page. Both are
//! plain DOM nodes that remove themselves after a short delay.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::dom;
use crate::state::device::DeviceClass;

const TOAST_DISMISS_MS: i32 = 2_000;
const BANNER_DISMISS_MS: i32 = 3_000;

/// Shows `message` through the channel appropriate for `device`.
pub fn error(device: DeviceClass, message: &str) {
    let (class, dismiss_ms) = match device {
        DeviceClass::Mobile => ("toast", TOAST_DISMISS_MS),
        DeviceClass::Tablet | DeviceClass::Desktop => ("message message-error", BANNER_DISMISS_MS),
    };
    if let Err(e) = show(class, message, dismiss_ms) {
        log::error!("Failed to display notification: {e:?}");
    }
}

fn show(class: &str, message: &str, dismiss_ms: i32) -> Result<(), JsValue> {
    let document = dom::window()
        .document()
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let Some(body) = document.body() else {
        return Ok(());
    };

    let node = document.create_element("div")?;
    node.set_class_name(class);
    node.set_text_content(Some(message));
    body.append_child(&node)?;

    let remove = {
        let node = node.clone();
        Closure::<dyn FnMut()>::new(move || node.remove())
    };
    dom::window().set_timeout_with_callback_and_timeout_and_arguments_0(
        remove.as_ref().unchecked_ref(),
        dismiss_ms,
    )?;
    // The closure must outlive the timer; one leaked removal callback
    // per notification is the cost.
    remove.forget();
    Ok(())
}
