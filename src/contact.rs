//! Contact form submit mock. No request is made: the button cycles through
//! "sending" and "sent" on timers, then the form is cleared.

use crate::constants::{
    CHECK_SVG, CONTACT_FORM_ID, SPINNER_CSS, SPINNER_STYLE_ID, SPINNER_SVG, SUBMIT_BUTTON,
};
use crate::core::constants::CONTACT_SENT_BACKGROUND;
use crate::core::contact::{SubmitCycle, SubmitStage};
use crate::dom;
use crate::page::Page;
use crate::timer::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default)]
struct Pending {
    cycle: SubmitCycle,
    sent: Option<Timeout>,
    reset: Option<Timeout>,
}

#[derive(Clone)]
struct ContactForm {
    form: web::HtmlFormElement,
    button: web::HtmlButtonElement,
    pending: Rc<RefCell<Pending>>,
}

impl ContactForm {
    fn submit(&self) {
        let original = self.button.inner_html();
        if !self.pending.borrow_mut().cycle.begin(original) {
            log::debug!("[contact] submit ignored, cycle in flight");
            return;
        }
        log::info!("[contact] simulated submit (no request is sent)");
        self.enter(SubmitStage::Sending);
    }

    fn enter(&self, stage: SubmitStage) {
        match stage {
            SubmitStage::Sending => {
                self.show_label(SPINNER_SVG);
                self.button.set_disabled(true);
            }
            SubmitStage::Sent => {
                self.show_label(CHECK_SVG);
                dom::set_style(&self.button, "background", CONTACT_SENT_BACKGROUND);
            }
            SubmitStage::Idle => {
                if stage.clears_fields() {
                    self.form.reset();
                }
                self.restore_button();
            }
        }

        let Some(ms) = stage.hold_ms() else {
            return;
        };
        let this = self.clone();
        let Some(timer) = Timeout::new(ms, move || {
            let next = this.pending.borrow_mut().cycle.advance();
            this.enter(next);
        }) else {
            log::error!("[contact] could not schedule {:?} timer, resetting", stage);
            self.abandon();
            return;
        };
        // Each stage owns its own slot, so a running callback never drops itself.
        let mut p = self.pending.borrow_mut();
        match stage {
            SubmitStage::Sending => p.sent = Some(timer),
            SubmitStage::Sent => p.reset = Some(timer),
            SubmitStage::Idle => {}
        }
    }

    fn show_label(&self, icon: &str) {
        let p = self.pending.borrow();
        let text = p.cycle.button_text();
        self.button.set_inner_html(&format!("<span>{text}</span>{icon}"));
    }

    fn restore_button(&self) {
        let original = self.pending.borrow().cycle.button_text().to_string();
        self.button.set_inner_html(&original);
        dom::set_style(&self.button, "background", "");
        self.button.set_disabled(false);
    }

    /// Return to idle without touching timer slots; safe to call from inside a
    /// timer callback. Stale handles are replaced by the next submit.
    fn abandon(&self) {
        self.pending.borrow_mut().cycle.cancel();
        self.restore_button();
    }

    /// Drop pending timers and put the button back, leaving fields untouched.
    fn cancel(&self) {
        let (sent, reset) = {
            let mut p = self.pending.borrow_mut();
            if !p.cycle.in_flight() {
                return;
            }
            p.cycle.cancel();
            (p.sent.take(), p.reset.take())
        };
        drop((sent, reset));
        self.restore_button();
        log::debug!("[contact] pending submit cancelled");
    }
}

fn inject_spinner_style(document: &web::Document) {
    if document.get_element_by_id(SPINNER_STYLE_ID).is_some() {
        return;
    }
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(SPINNER_STYLE_ID);
    style.set_text_content(Some(SPINNER_CSS));
    if let Some(head) = document.head() {
        _ = head.append_child(&style);
    }
}

pub fn wire(page: &Page) {
    let Some(form) = page
        .document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::debug!("[contact] no #{CONTACT_FORM_ID}, skipping");
        return;
    };
    let Some(button) = form
        .query_selector(SUBMIT_BUTTON)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    else {
        log::debug!("[contact] form has no submit button, skipping");
        return;
    };
    inject_spinner_style(&page.document);

    let contact = ContactForm {
        form,
        button,
        pending: Rc::new(RefCell::new(Pending::default())),
    };

    let c = contact.clone();
    dom::add_listener(contact.form.as_ref(), "submit", move |ev: web::Event| {
        ev.prevent_default();
        c.submit();
    });

    dom::add_listener(page.window_target(), "pagehide", move |_: web::Event| {
        contact.cancel();
    });
}
