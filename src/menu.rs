use crate::constants::{CLASS_ACTIVE, NAV_LINKS, NAV_TOGGLE};
use crate::core::menu::MenuState;
use crate::dom;
use crate::events;
use crate::page::Page;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
struct MobileNav {
    state: Rc<RefCell<MenuState>>,
    toggle: web::HtmlElement,
    links: web::HtmlElement,
    page: Page,
}

impl MobileNav {
    fn render(&self) {
        let open = self.state.borrow().open;
        dom::set_class(&self.toggle, CLASS_ACTIVE, open);
        dom::set_class(&self.links, CLASS_ACTIVE, open);
        let overflow = self.state.borrow().body_overflow(self.page.viewport_width());
        dom::set_style(&self.page.body, "overflow", overflow);
    }

    fn toggle(&self) {
        let open = self.state.borrow_mut().toggle();
        log::debug!("[menu] open={}", open);
        self.render();
    }

    fn close(&self) {
        if !self.state.borrow().open {
            return;
        }
        self.state.borrow_mut().close();
        self.render();
    }
}

/// Mobile menu: the toggle flips it; a link click or Escape closes it.
pub fn wire(page: &Page) {
    let (Some(toggle), Some(links)) = (page.query(NAV_TOGGLE), page.query(NAV_LINKS)) else {
        log::debug!("[menu] no mobile nav, skipping");
        return;
    };
    let nav = MobileNav {
        state: Rc::new(RefCell::new(MenuState::default())),
        toggle,
        links,
        page: page.clone(),
    };

    let n = nav.clone();
    dom::add_listener(nav.toggle.as_ref(), "click", move |_: web::Event| n.toggle());

    for link in dom::query_all_in(&nav.links, "a") {
        let n = nav.clone();
        dom::add_listener(link.as_ref(), "click", move |_: web::Event| n.close());
    }

    events::wire_escape(page, move || nav.close());
}
