use crate::dom;
use crate::page::Page;
use web_sys as web;

#[inline]
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

/// Call `on_dismiss` whenever Escape is pressed anywhere on the page.
pub fn wire_escape(page: &Page, mut on_dismiss: impl FnMut() + 'static) {
    dom::add_listener(page.document_target(), "keydown", move |ev: web::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            on_dismiss();
        }
    });
}
