use super::constants::MOBILE_BREAKPOINT_PX;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// `overflow` value for `<body>`: locked only while open on a mobile
    /// viewport, restored otherwise.
    pub fn body_overflow(&self, viewport_width: f64) -> &'static str {
        if self.open && is_mobile_viewport(viewport_width) {
            "hidden"
        } else {
            ""
        }
    }
}

#[inline]
pub fn is_mobile_viewport(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT_PX
}
