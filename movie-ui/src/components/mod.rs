//! Shared UI components

pub mod layouts;

pub use layouts::{Layout, LAYOUT_FALLBACK};
