//! Page-level layout components

mod layout;

pub use layout::{Layout, LAYOUT_FALLBACK};
