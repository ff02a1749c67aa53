//! Display types for UI components
//!
//! Closed set of content shapes a view component can receive from its caller.
//! They keep components props-based, so the same view renders fixture data in
//! the static renderer and live data in an app.

use dioxus::prelude::*;

/// Nested content handed to a layout for a single render pass
///
/// `Absent` is the only shape treated as "no content". Empty text and empty
/// sequences are still content and render as-is.
#[derive(Clone, PartialEq, Default)]
pub enum RenderableContent {
    /// A single rendered subtree
    Node(Element),
    /// Sibling subtrees, rendered in order
    Nodes(Vec<Element>),
    /// Plain text
    Text(String),
    /// Unset or explicitly null
    #[default]
    Absent,
}

impl RenderableContent {
    /// Whether the layout will substitute its fallback for this content
    pub fn is_absent(&self) -> bool {
        matches!(self, RenderableContent::Absent)
    }
}

impl From<Element> for RenderableContent {
    fn from(node: Element) -> Self {
        RenderableContent::Node(node)
    }
}

impl From<Vec<Element>> for RenderableContent {
    fn from(nodes: Vec<Element>) -> Self {
        RenderableContent::Nodes(nodes)
    }
}

impl From<String> for RenderableContent {
    fn from(text: String) -> Self {
        RenderableContent::Text(text)
    }
}

impl From<&String> for RenderableContent {
    fn from(text: &String) -> Self {
        RenderableContent::Text(text.clone())
    }
}

impl From<&str> for RenderableContent {
    fn from(text: &str) -> Self {
        RenderableContent::Text(text.to_string())
    }
}

impl<T: Into<RenderableContent>> From<Option<T>> for RenderableContent {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

macro_rules! text_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RenderableContent {
                fn from(value: $ty) -> Self {
                    RenderableContent::Text(value.to_string())
                }
            }
        )*
    };
}

text_from_display!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64, bool, char);
