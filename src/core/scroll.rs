use super::constants::{
    ANCHOR_HEADER_OFFSET_PX, NAVBAR_SCROLLED_AFTER_PX, PARALLAX_BASE_SPEED, PARALLAX_SPEED_STEP,
    SECTION_ACTIVE_OFFSET_PX,
};

/// Layout of one `section[id]` as read from the DOM.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    /// Active while `scroll_y` is in `[top - offset, top - offset + height)`.
    #[inline]
    pub fn contains(&self, scroll_y: f64) -> bool {
        let start = self.top - SECTION_ACTIVE_OFFSET_PX;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// Active flag per section, in input order.
pub fn active_sections(sections: &[SectionBounds], scroll_y: f64) -> Vec<bool> {
    sections.iter().map(|s| s.contains(scroll_y)).collect()
}

#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_AFTER_PX
}

/// Vertical translation for the `index`-th parallax shape.
#[inline]
pub fn parallax_offset(scroll_y: f64, index: usize) -> f64 {
    scroll_y * (PARALLAX_BASE_SPEED + index as f64 * PARALLAX_SPEED_STEP)
}

/// Document-space scroll target for an anchor whose element sits at
/// `element_top` in viewport space, leaving room for the fixed header.
#[inline]
pub fn anchor_scroll_target(element_top: f64, page_y_offset: f64) -> f64 {
    element_top + page_y_offset - ANCHOR_HEADER_OFFSET_PX
}

/// Fragment id a nav link points at (`"#about"` and `"/index.html#about"` both
/// give `about`). Empty fragments yield `None`.
pub fn href_fragment(href: &str) -> Option<&str> {
    let (_, frag) = href.split_once('#')?;
    (!frag.is_empty()).then_some(frag)
}

/// Exact fragment match, so `#about` never lights up for `#about-me`.
#[inline]
pub fn link_targets_section(href: &str, section_id: &str) -> bool {
    href_fragment(href) == Some(section_id)
}
