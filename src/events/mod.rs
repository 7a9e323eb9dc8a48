pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use keyboard::wire_escape;
pub use pointer::{wire_cursor, wire_hover_lifts};
pub use scroll::{wire_active_link, wire_anchor_scroll, wire_navbar, wire_parallax};
