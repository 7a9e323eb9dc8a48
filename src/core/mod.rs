pub mod constants;
pub mod contact;
pub mod counter;
pub mod cursor;
pub mod filter;
pub mod menu;
pub mod scroll;
pub mod trigger;
