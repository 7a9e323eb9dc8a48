use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `setTimeout` registration that is cleared when dropped.
///
/// Dropping a `Timeout` from inside its own callback is not allowed; owners
/// replace a fired handle from the next caller instead.
pub struct Timeout {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(delay_ms: i32, callback: impl FnOnce() + 'static) -> Option<Self> {
        let window = web::window()?;
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(f) = callback.take() {
                f();
            }
        }) as Box<dyn FnMut()>);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms,
            )
            .map_err(|e| log::error!("setTimeout failed: {:?}", e))
            .ok()?;
        Some(Self {
            handle,
            _callback: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = web::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}
