use crate::core::{interpret_answer, PermissionError, PermissionResult};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// State of a motion consent request right after the user asked for it.
pub enum ConsentRequest {
    /// No `DeviceMotionEvent.requestPermission`; sensors need no consent.
    NotRequired,
    /// The prompt is showing; resolve with [`finish`].
    Pending(js_sys::Promise),
    Failed(PermissionError),
}

/// Start the consent prompt. Must run inside the click handler so the browser
/// still sees the user gesture.
pub fn begin() -> ConsentRequest {
    let Some(window) = web_sys::window() else {
        return ConsentRequest::NotRequired;
    };
    let ctor = match js_sys::Reflect::get(&window, &JsValue::from_str("DeviceMotionEvent")) {
        Ok(c) if !c.is_undefined() => c,
        _ => return ConsentRequest::NotRequired,
    };
    let request = match js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission")) {
        Ok(f) if f.is_function() => f.unchecked_into::<js_sys::Function>(),
        _ => return ConsentRequest::NotRequired,
    };
    match request.call0(&ctor) {
        Ok(value) => match value.dyn_into::<js_sys::Promise>() {
            Ok(promise) => ConsentRequest::Pending(promise),
            Err(v) => ConsentRequest::Failed(PermissionError::RequestFailed(format!(
                "requestPermission returned {:?}",
                v
            ))),
        },
        Err(e) => ConsentRequest::Failed(PermissionError::RequestFailed(format!("{:?}", e))),
    }
}

/// Wait for the prompt's answer.
pub async fn finish(promise: js_sys::Promise) -> PermissionResult {
    match JsFuture::from(promise).await {
        Ok(answer) => match answer.as_string() {
            Some(s) => interpret_answer(&s),
            None => Err(PermissionError::RequestFailed(format!(
                "unexpected answer {:?}",
                answer
            ))),
        },
        Err(e) => Err(PermissionError::RequestFailed(format!("{:?}", e))),
    }
}
