//! One-shot effects that run when their target first scrolls into view.

use crate::constants::{
    ATTR_COUNT, ATTR_SRC, ATTR_WIDTH, FADE_HIDDEN_TRANSFORM, FADE_IN_TARGETS, FADE_SHOWN_TRANSFORM,
    FADE_TRANSITION, LAZY_IMAGES, PROGRESS_FILLS, SKILLS_SECTION, STATS_SECTION, STAT_NUMBERS,
};
use crate::core::constants::{
    COUNTER_VISIBLE_THRESHOLD, FADE_ROOT_MARGIN, FADE_VISIBLE_THRESHOLD, LAZY_IMAGE_ROOT_MARGIN,
    LAZY_IMAGE_VISIBLE_THRESHOLD, PROGRESS_VISIBLE_THRESHOLD,
};
use crate::core::counter::{parse_target, Counter};
use crate::dom;
use crate::frame;
use crate::observe::{observe_once, ObserveOptions};
use crate::page::Page;
use web_sys as web;

pub fn wire(page: &Page) {
    wire_counters(page);
    wire_progress_bars(page);
    wire_fade_ins(page);
    wire_lazy_images(page);
}

fn animate_counter(stat: web::HtmlElement) {
    let Some(target) = stat.get_attribute(ATTR_COUNT).as_deref().and_then(parse_target) else {
        log::debug!("[counter] missing or invalid {ATTR_COUNT}, skipping");
        return;
    };
    let mut counter = Counter::new(target);
    frame::animate_until(move || {
        let shown = counter.step();
        stat.set_text_content(Some(&shown.to_string()));
        !counter.is_done()
    });
}

fn wire_counters(page: &Page) {
    let Some(section) = page.query(STATS_SECTION) else {
        return;
    };
    let stats = page.query_all(STAT_NUMBERS);
    observe_once(
        &[section],
        ObserveOptions {
            threshold: COUNTER_VISIBLE_THRESHOLD,
            root_margin: None,
        },
        move |_| {
            for stat in &stats {
                animate_counter(stat.clone());
            }
        },
    );
}

fn wire_progress_bars(page: &Page) {
    let Some(section) = page.query(SKILLS_SECTION) else {
        return;
    };
    let bars = page.query_all(PROGRESS_FILLS);
    observe_once(
        &[section],
        ObserveOptions {
            threshold: PROGRESS_VISIBLE_THRESHOLD,
            root_margin: None,
        },
        move |_| {
            for bar in &bars {
                if let Some(w) = bar.get_attribute(ATTR_WIDTH) {
                    dom::set_style(bar, "width", &format!("{w}%"));
                }
            }
        },
    );
}

fn wire_fade_ins(page: &Page) {
    let targets = page.query_all(FADE_IN_TARGETS);
    for el in &targets {
        dom::set_style(el, "opacity", "0");
        dom::set_style(el, "transform", FADE_HIDDEN_TRANSFORM);
        dom::set_style(el, "transition", FADE_TRANSITION);
    }
    observe_once(
        &targets,
        ObserveOptions {
            threshold: FADE_VISIBLE_THRESHOLD,
            root_margin: Some(FADE_ROOT_MARGIN),
        },
        |el| {
            dom::set_style(&el, "opacity", "1");
            dom::set_style(&el, "transform", FADE_SHOWN_TRANSFORM);
        },
    );
}

fn wire_lazy_images(page: &Page) {
    let images = page.query_all(LAZY_IMAGES);
    observe_once(
        &images,
        ObserveOptions {
            threshold: LAZY_IMAGE_VISIBLE_THRESHOLD,
            root_margin: Some(LAZY_IMAGE_ROOT_MARGIN),
        },
        |img| {
            if let Some(src) = img.get_attribute(ATTR_SRC) {
                _ = img.set_attribute("src", &src);
                _ = img.remove_attribute(ATTR_SRC);
            }
        },
    );
}
