//! Static HTML rendering of the page layout

use std::io::Write;
use std::path::Path;

use dioxus::prelude::*;
use movie_ui::{Layout, RenderableContent};
use tracing::debug;

/// Content requested on the command line
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PageContent {
    #[default]
    Absent,
    Text(String),
    /// Each item becomes its own `p` element
    Items(Vec<String>),
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write page to {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

fn page(content: PageContent) -> Element {
    let content = match content {
        PageContent::Absent => RenderableContent::Absent,
        PageContent::Text(text) => RenderableContent::Text(text),
        PageContent::Items(items) => RenderableContent::Nodes(
            items
                .iter()
                .map(|item| rsx! { p { "{item}" } })
                .collect(),
        ),
    };

    rsx! {
        Layout { content }
    }
}

/// Render the layout around `content` to an HTML string
pub fn render_page(content: PageContent) -> String {
    let mut dom = VirtualDom::new_with_props(page, content);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Write rendered markup, newline-terminated, to `output` or stdout
pub fn write_page(html: &str, output: Option<&Path>) -> Result<(), RenderError> {
    match output {
        Some(path) => {
            debug!("Writing {} bytes to {}", html.len(), path.display());
            std::fs::File::create(path)
                .and_then(|mut file| write_html(&mut file, html))
                .map_err(|source| RenderError::Io {
                    target: path.display().to_string(),
                    source,
                })
        }
        None => write_html(&mut std::io::stdout().lock(), html).map_err(|source| {
            RenderError::Io {
                target: "stdout".to_string(),
                source,
            }
        }),
    }
}

fn write_html(writer: &mut impl Write, html: &str) -> std::io::Result<()> {
    writeln!(writer, "{html}")?;
    writer.flush()
}
