//! Easel CLI
//!
//! Renders an HTML file styled by a CSS file to a PNG image.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::Parser;
use easel_render::css::{CSSParser, Stylesheet};
use easel_render::dom::print_tree;
use easel_render::html::HTMLParser;
use easel_render::{RenderConfig, render_document};
use owo_colors::OwoColorize;
use tracing::Level;

/// Easel - render a small HTML document with a stylesheet to an image
#[derive(Parser, Debug)]
#[command(name = "easel")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Render with the default 800x600 viewport
    easel --html page.html --css page.css

    # Custom viewport and output path
    easel --html page.html --css page.css -w 1024 -H 768 -o page.png

    # Inspect the parsed inputs and the box tree
    easel --html page.html --css page.css --print-tree --dump-layout
"#)]
struct Cli {
    /// Markup file to render
    #[arg(long, value_name = "FILE")]
    html: PathBuf,

    /// Stylesheet file (default: no rules)
    #[arg(long, value_name = "FILE")]
    css: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(short, long, default_value_t = 800)]
    width: u32,

    /// Viewport height in pixels
    #[arg(short = 'H', long, default_value_t = 600)]
    height: u32,

    /// Output image path; the format follows the extension
    #[arg(short, long, value_name = "FILE", default_value = "output.png")]
    out: PathBuf,

    /// Print the parsed markup tree and stylesheet
    #[arg(long)]
    print_tree: bool,

    /// Print the laid-out box tree as JSON
    #[arg(long)]
    dump_layout: bool,

    /// Log pipeline stages to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let html = read(&cli.html)?;
    let css = cli.css.as_deref().map(read).transpose()?.unwrap_or_default();

    let markup = HTMLParser::new(&html)
        .parse()
        .with_context(|| format!("parse markup '{}'", cli.html.display()))?;
    let stylesheet = CSSParser::new(&css)
        .parse_stylesheet()
        .context("parse stylesheet")?;

    if cli.print_tree {
        print_inputs(&print_tree(&markup), &stylesheet);
    }

    let config = RenderConfig::new(cli.width, cli.height);
    let rendered = render_document(markup, &stylesheet, &config);

    if cli.dump_layout {
        println!("{}", "=== Layout ===".bold());
        println!("{}", serde_json::to_string_pretty(&rendered.layout)?);
    }

    rendered
        .canvas
        .save(&cli.out)
        .with_context(|| format!("write image '{}'", cli.out.display()))?;
    println!("Saved to: {}", cli.out.display().green());
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read '{}'", path.display()))
}

fn print_inputs(markup: &str, stylesheet: &Stylesheet) {
    println!("{}", "=== Markup ===".bold());
    print!("{markup}");
    println!("\n{}", "=== Stylesheet ===".bold());
    print!("{stylesheet}");
}
