use crate::constants::{
    CARD_LIFT, CLASS_HOVER, CURSOR_DOT, CURSOR_HOVER_TARGETS, CURSOR_RING, PROJECT_CARDS,
    SKILL_ICON, SKILL_ICON_LIFT, SKILL_ITEMS, SOCIAL_LIFT, SOCIAL_LINKS,
};
use crate::core::cursor::CursorState;
use crate::dom;
use crate::frame;
use crate::page::Page;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Custom cursor: a dot and a trailing ring that chase the pointer every
/// frame, plus a `hover` marker over interactive elements.
pub fn wire_cursor(page: &Page) {
    let (Some(dot), Some(ring)) = (page.query(CURSOR_DOT), page.query(CURSOR_RING)) else {
        log::debug!("[cursor] no cursor elements, skipping");
        return;
    };
    let state = Rc::new(RefCell::new(CursorState::default()));

    let state_move = state.clone();
    dom::add_listener(page.document_target(), "mousemove", move |ev: web::MouseEvent| {
        state_move
            .borrow_mut()
            .set_pointer(ev.client_x() as f32, ev.client_y() as f32);
    });

    for el in page.query_all(CURSOR_HOVER_TARGETS) {
        let (d, r) = (dot.clone(), ring.clone());
        dom::add_listener(el.as_ref(), "mouseenter", move |_: web::Event| {
            dom::set_class(&d, CLASS_HOVER, true);
            dom::set_class(&r, CLASS_HOVER, true);
        });
        let (d, r) = (dot.clone(), ring.clone());
        dom::add_listener(el.as_ref(), "mouseleave", move |_: web::Event| {
            dom::set_class(&d, CLASS_HOVER, false);
            dom::set_class(&r, CLASS_HOVER, false);
        });
    }

    frame::start_loop(move || {
        let f = state.borrow_mut().tick();
        dom::set_style(&dot, "left", &format!("{}px", f.dot.x));
        dom::set_style(&dot, "top", &format!("{}px", f.dot.y));
        dom::set_style(&ring, "left", &format!("{}px", f.ring.x));
        dom::set_style(&ring, "top", &format!("{}px", f.ring.y));
    });
    log::debug!("[cursor] follower loop started");
}

fn wire_lift(el: &web::HtmlElement, target: web::HtmlElement, (enter, leave): (&'static str, &'static str)) {
    let t = target.clone();
    dom::add_listener(el.as_ref(), "mouseenter", move |_: web::Event| {
        dom::set_style(&t, "transform", enter);
    });
    dom::add_listener(el.as_ref(), "mouseleave", move |_: web::Event| {
        dom::set_style(&target, "transform", leave);
    });
}

/// Transform lifts on project cards, skill icons and social links.
pub fn wire_hover_lifts(page: &Page) {
    for card in page.query_all(PROJECT_CARDS) {
        wire_lift(&card, card.clone(), CARD_LIFT);
    }
    for item in page.query_all(SKILL_ITEMS) {
        if let Some(icon) = dom::query_in(&item, SKILL_ICON) {
            wire_lift(&item, icon, SKILL_ICON_LIFT);
        }
    }
    for link in page.query_all(SOCIAL_LINKS) {
        wire_lift(&link, link.clone(), SOCIAL_LIFT);
    }
}
