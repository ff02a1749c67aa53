mod render;

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use render::{render_page, write_page, PageContent};

/// movie-render: renders the page layout to static HTML.
#[derive(Parser, Debug)]
#[command(name = "movie-render")]
struct Args {
    /// Text to place inside the layout.
    #[arg(long, env = "MOVIE_RENDER_CONTENT", conflicts_with_all = ["item", "empty_items"])]
    content: Option<String>,

    /// Sibling items, each rendered as a paragraph. Repeatable.
    #[arg(long, conflicts_with = "empty_items")]
    item: Vec<String>,

    /// Pass an empty item list (still counts as content).
    #[arg(long)]
    empty_items: bool,

    /// Write the page to this file instead of stdout.
    #[arg(long, env = "MOVIE_RENDER_OUTPUT")]
    output: Option<PathBuf>,
}

impl Args {
    fn page_content(&self) -> PageContent {
        if let Some(text) = &self.content {
            PageContent::Text(text.clone())
        } else if !self.item.is_empty() || self.empty_items {
            PageContent::Items(self.item.clone())
        } else {
            PageContent::Absent
        }
    }
}

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout carries the rendered page
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    configure_logging();
    let args = Args::parse();

    let content = args.page_content();
    if content == PageContent::Absent {
        info!("No content given, rendering fallback");
    }

    let html = render_page(content);

    if let Err(e) = write_page(&html, args.output.as_deref()) {
        error!("{e}");
        std::process::exit(1);
    }

    if let Some(path) = &args.output {
        info!("Wrote page to {}", path.display());
    }
}
