//! Page layout component

use crate::display_types::RenderableContent;
use dioxus::prelude::*;

/// Text rendered when a layout receives no content
pub const LAYOUT_FALLBACK: &str = "Layout";

/// Page-level wrapper (pure, props-based)
///
/// Renders `content` inside a single `main` element, or [`LAYOUT_FALLBACK`]
/// when the content is absent.
#[component]
pub fn Layout(
    /// Nested page content. Only an unset or `None` value falls back.
    #[props(default, into)]
    content: RenderableContent,
) -> Element {
    let body = match &content {
        RenderableContent::Absent => rsx! { "{LAYOUT_FALLBACK}" },
        RenderableContent::Text(text) => rsx! { "{text}" },
        RenderableContent::Node(node) => node.clone(),
        RenderableContent::Nodes(nodes) => rsx! {
            for node in nodes.iter() {
                {node.clone()}
            }
        },
    };

    rsx! {
        main { {body} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harness(make: fn() -> RenderableContent) -> Element {
        rsx! {
            Layout { content: make() }
        }
    }

    fn render_with(make: fn() -> RenderableContent) -> String {
        let mut dom = VirtualDom::new_with_props(harness, make);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn render_unset() -> String {
        fn app() -> Element {
            rsx! {
                Layout {}
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn wraps_text_content() {
        assert_eq!(render_with(|| "Hello".into()), "<main>Hello</main>");
    }

    #[test]
    fn unset_content_falls_back() {
        assert_eq!(render_unset(), "<main>Layout</main>");
    }

    #[test]
    fn null_content_falls_back() {
        assert_eq!(render_with(|| None::<&str>.into()), "<main>Layout</main>");
        assert_eq!(
            render_with(|| RenderableContent::Absent),
            "<main>Layout</main>"
        );
    }

    #[test]
    fn empty_text_is_not_replaced() {
        assert_eq!(render_with(|| "".into()), "<main></main>");
    }

    #[test]
    fn zero_is_not_replaced() {
        assert_eq!(render_with(|| 0.into()), "<main>0</main>");
        assert_eq!(render_with(|| false.into()), "<main>false</main>");
    }

    #[test]
    fn single_node_passes_through() {
        let html = render_with(|| {
            RenderableContent::from(rsx! {
                span { class: "title", "Dune" }
            })
        });
        assert_eq!(html, r#"<main><span class="title">Dune</span></main>"#);
    }

    #[test]
    fn siblings_keep_their_order() {
        let html = render_with(|| {
            RenderableContent::Nodes(vec![
                rsx! { p { "first" } },
                rsx! { p { "second" } },
                rsx! { p { "third" } },
            ])
        });
        assert_eq!(html, "<main><p>first</p><p>second</p><p>third</p></main>");
    }

    #[test]
    fn nested_fragment_is_unchanged() {
        let html = render_with(|| {
            RenderableContent::from(rsx! {
                h1 { "Now showing" }
                ul {
                    li { "Alien" }
                    li { "Heat" }
                }
            })
        });
        assert_eq!(
            html,
            "<main><h1>Now showing</h1><ul><li>Alien</li><li>Heat</li></ul></main>"
        );
    }

    #[test]
    fn empty_sequence_is_present() {
        assert_eq!(
            render_with(|| RenderableContent::Nodes(Vec::new())),
            "<main></main>"
        );
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(render_with(|| "<b>".into()), "<main>&#60;b&#62;</main>");
    }

    #[test]
    fn repeated_renders_match() {
        let make: fn() -> RenderableContent =
            || RenderableContent::Nodes(vec![rsx! { p { "a" } }, rsx! { p { "b" } }]);
        assert_eq!(render_with(make), render_with(make));
        assert_eq!(render_unset(), render_unset());
    }
}
