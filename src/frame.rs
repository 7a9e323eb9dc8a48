use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Run `tick` on every animation frame for the lifetime of the page.
pub fn start_loop(mut tick: impl FnMut() + 'static) {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let slot_tick = slot.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        tick();
        if let Some(w) = web::window() {
            if let Some(cb) = slot_tick.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = slot.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}

/// Run `step` once per animation frame until it returns `false`.
///
/// Each frame registers a one-shot callback, so nothing is kept alive after
/// the animation finishes.
pub fn animate_until<F>(step: F)
where
    F: FnMut() -> bool + 'static,
{
    let Some(w) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(move || {
        let mut step = step;
        if step() {
            animate_until(step);
        }
    });
    _ = w.request_animation_frame(cb.unchecked_ref());
}
