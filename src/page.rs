//! Handles to the host page, built once at startup and passed to every
//! effect's `wire` function instead of each effect reaching for globals.

use crate::dom;
use web_sys as web;

#[derive(Clone)]
pub struct Page {
    pub window: web::Window,
    pub document: web::Document,
    pub body: web::HtmlElement,
}

impl Page {
    pub fn from_window() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
        Ok(Self {
            window,
            document,
            body,
        })
    }

    #[inline]
    pub fn query(&self, selector: &str) -> Option<web::HtmlElement> {
        dom::query(&self.document, selector)
    }

    #[inline]
    pub fn query_all(&self, selector: &str) -> Vec<web::HtmlElement> {
        dom::query_all(&self.document, selector)
    }

    #[inline]
    pub fn scroll_y(&self) -> f64 {
        dom::scroll_y(&self.window)
    }

    #[inline]
    pub fn viewport_width(&self) -> f64 {
        dom::viewport_width(&self.window)
    }

    #[inline]
    pub fn window_target(&self) -> &web::EventTarget {
        self.window.as_ref()
    }

    #[inline]
    pub fn document_target(&self) -> &web::EventTarget {
        self.document.as_ref()
    }
}
