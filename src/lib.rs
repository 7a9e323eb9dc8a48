#![cfg(target_arch = "wasm32")]
use crate::constants::CLASS_LOADED;
use crate::page::Page;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod contact;
mod core;
mod dom;
mod events;
mod filter;
mod frame;
mod menu;
mod observe;
mod page;
mod reveal;
mod timer;

fn mark_loaded(page: &Page) {
    let body = page.body.clone();
    let mark = move || {
        dom::set_class(&body, CLASS_LOADED, true);
        log::info!("portfolio loaded");
    };
    if page.document.ready_state() == "loading" {
        let mut mark = Some(mark);
        dom::add_listener(page.document_target(), "DOMContentLoaded", move |_: web::Event| {
            if let Some(f) = mark.take() {
                f();
            }
        });
    } else {
        mark();
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let page = Page::from_window()?;

    events::wire_cursor(&page);
    events::wire_hover_lifts(&page);

    events::wire_navbar(&page);
    events::wire_active_link(&page);
    events::wire_parallax(&page);
    events::wire_anchor_scroll(&page);

    menu::wire(&page);
    filter::wire(&page);
    contact::wire(&page);
    reveal::wire(&page);

    mark_loaded(&page);
    Ok(())
}
