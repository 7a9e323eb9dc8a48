use crate::core::trigger::FireOnce;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct ObserveOptions<'a> {
    pub threshold: f64,
    pub root_margin: Option<&'a str>,
}

/// Observe `targets` and call `on_enter` the first time each one intersects.
///
/// Every target is unobserved right after its first intersecting entry, and
/// later entries for it (including ones already queued in the same batch)
/// are skipped.
pub fn observe_once(
    targets: &[web::HtmlElement],
    opts: ObserveOptions<'_>,
    mut on_enter: impl FnMut(web::HtmlElement) + 'static,
) -> Option<web::IntersectionObserver> {
    if targets.is_empty() {
        return None;
    }
    let mut fired = FireOnce::<web::Element>::default();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if !fired.admit(target.clone(), entry.is_intersecting()) {
                    continue;
                }
                observer.unobserve(&target);
                if let Ok(el) = target.dyn_into::<web::HtmlElement>() {
                    on_enter(el);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(opts.threshold));
    if let Some(margin) = opts.root_margin {
        init.set_root_margin(margin);
    }
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::error!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    callback.forget();
    for t in targets {
        observer.observe(t);
    }
    Some(observer)
}
