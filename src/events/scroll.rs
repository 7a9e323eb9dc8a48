use crate::constants::{
    CLASS_ACTIVE, CLASS_SCROLLED, HERO_SHAPES, IN_PAGE_ANCHORS, NAVBAR, NAV_LINK_ANCHORS, SECTIONS,
};
use crate::core::scroll::{
    active_sections, anchor_scroll_target, link_targets_section, navbar_scrolled,
    parallax_offset, SectionBounds,
};
use crate::dom;
use crate::page::Page;
use web_sys as web;

fn section_bounds(section: &web::HtmlElement) -> Option<SectionBounds> {
    let id = section.id();
    (!id.is_empty()).then(|| SectionBounds {
        id,
        top: section.offset_top() as f64,
        height: section.offset_height() as f64,
    })
}

/// Navbar `scrolled` class once the page leaves the top.
pub fn wire_navbar(page: &Page) {
    let Some(navbar) = page.query(NAVBAR) else {
        return;
    };
    let window = page.window.clone();
    dom::add_listener(page.window_target(), "scroll", move |_: web::Event| {
        dom::set_class(&navbar, CLASS_SCROLLED, navbar_scrolled(dom::scroll_y(&window)));
    });
}

/// Mark the nav link of the section under the scroll position as active.
pub fn wire_active_link(page: &Page) {
    let sections = page.query_all(SECTIONS);
    let links = page.query_all(NAV_LINK_ANCHORS);
    if sections.is_empty() || links.is_empty() {
        return;
    }
    let window = page.window.clone();
    dom::add_listener(page.window_target(), "scroll", move |_: web::Event| {
        // Layout can change after load, so bounds are re-read every event.
        let bounds: Vec<SectionBounds> = sections.iter().filter_map(section_bounds).collect();
        let active = active_sections(&bounds, dom::scroll_y(&window));
        for (section, on) in bounds.iter().zip(active) {
            for link in &links {
                let href = link.get_attribute("href").unwrap_or_default();
                if link_targets_section(&href, &section.id) {
                    dom::set_class(link, CLASS_ACTIVE, on);
                }
            }
        }
    });
}

/// Hero shapes drift at increasing speeds as the page scrolls.
pub fn wire_parallax(page: &Page) {
    let shapes = page.query_all(HERO_SHAPES);
    if shapes.is_empty() {
        return;
    }
    let window = page.window.clone();
    dom::add_listener(page.window_target(), "scroll", move |_: web::Event| {
        let y = dom::scroll_y(&window);
        for (i, shape) in shapes.iter().enumerate() {
            let dy = parallax_offset(y, i);
            dom::set_style(shape, "transform", &format!("translateY({dy}px)"));
        }
    });
}

/// Smooth scrolling for in-page `#anchor` links, clearing the fixed header.
pub fn wire_anchor_scroll(page: &Page) {
    for anchor in page.query_all(IN_PAGE_ANCHORS) {
        let page = page.clone();
        let a = anchor.clone();
        dom::add_listener(anchor.as_ref(), "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let Some(href) = a.get_attribute("href") else {
                return;
            };
            // A bare "#" is not a valid selector; query_selector errors are skipped.
            let Some(target) = page.document.query_selector(&href).ok().flatten() else {
                return;
            };
            let top = target.get_bounding_client_rect().top();
            let opts = web::ScrollToOptions::new();
            opts.set_top(anchor_scroll_target(top, page.scroll_y()));
            opts.set_behavior(web::ScrollBehavior::Smooth);
            page.window.scroll_to_with_scroll_to_options(&opts);
        });
    }
}
