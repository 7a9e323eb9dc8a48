use crate::constants::{
    ATTR_CATEGORY, ATTR_FILTER, CARD_SHOW_ANIMATION, CLASS_ACTIVE, CLASS_HIDDEN, FILTER_BUTTONS,
    PROJECT_CARDS,
};
use crate::core::filter::{visibility, FilterState};
use crate::dom;
use crate::page::Page;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Project filter buttons: exactly one is active, and cards outside its
/// category are hidden.
pub fn wire(page: &Page) {
    let buttons = Rc::new(page.query_all(FILTER_BUTTONS));
    let cards = Rc::new(page.query_all(PROJECT_CARDS));
    if buttons.is_empty() {
        return;
    }
    let state = Rc::new(RefCell::new(FilterState::default()));

    for (i, btn) in buttons.iter().enumerate() {
        let (buttons, cards, state) = (buttons.clone(), cards.clone(), state.clone());
        let filter = btn.get_attribute(ATTR_FILTER);
        dom::add_listener(btn.as_ref(), "click", move |_: web::Event| {
            state.borrow_mut().select(i);
            let st = *state.borrow();
            for (j, b) in buttons.iter().enumerate() {
                dom::set_class(b, CLASS_ACTIVE, st.is_active(j));
            }
            apply(&cards, filter.as_deref());
        });
    }
}

fn apply(cards: &[web::HtmlElement], filter: Option<&str>) {
    let categories: Vec<Option<String>> = cards
        .iter()
        .map(|c| c.get_attribute(ATTR_CATEGORY))
        .collect();
    let shown = visibility(filter, categories.iter().map(|c| c.as_deref()));
    for (card, visible) in cards.iter().zip(shown) {
        dom::set_class(card, CLASS_HIDDEN, !visible);
        if visible {
            dom::set_style(card, "animation", CARD_SHOW_ANIMATION);
        }
    }
    log::debug!("[filter] applied {:?}", filter);
}
