//! Plume CLI
//!
//! Moves CSS between stylesheets and inline `style` attributes.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use plume_common::is_remote;
use plume_document::{Document, ExtractOptions};
use plume_dom::NodeId;
use plume_html::print_tree;

/// Plume: inline stylesheet rules into `style` attributes, or extract them back out
#[derive(Parser, Debug)]
#[command(name = "plume")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Inline the CSS of a local page
    plume inline page.html -o inlined.html

    # Inline a remote page, fetching its linked stylesheets
    plume inline https://example.com

    # Move inline styles into a <style> element
    plume reverse email.html

    # Move inline styles into a separate file
    plume reverse email.html --external --css-output dist/styles.css

    # Show the parsed tree of inline HTML
    plume dump --html '<p class="a">Test</p>' --json
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Parse HTML string directly instead of file/URL
    #[arg(long, value_name = "HTML", global = true)]
    html: Option<String>,

    /// Write the resulting HTML to this file instead of stdout
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,

    /// Log pipeline details (equivalent to RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Move stylesheet rules into `style` attributes
    Inline {
        /// Path to HTML file, URL, or `-` for stdin
        #[arg(value_name = "FILE|URL|-")]
        input: Option<String>,
    },
    /// Move `style` attributes into a stylesheet
    Reverse {
        /// Path to HTML file, URL, or `-` for stdin
        #[arg(value_name = "FILE|URL|-")]
        input: Option<String>,

        /// Write the CSS to a separate file and link it from <head>
        #[arg(long)]
        external: bool,

        /// Where to write the CSS (default: the link href, next to the output)
        #[arg(long, value_name = "FILE", requires = "external")]
        css_output: Option<PathBuf>,

        /// The href of the injected stylesheet link
        #[arg(long, value_name = "HREF", default_value = "styles.css", requires = "external")]
        href: String,
    },
    /// Print the parsed document tree
    Dump {
        /// Path to HTML file, URL, or `-` for stdin
        #[arg(value_name = "FILE|URL|-")]
        input: Option<String>,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Inline { input } => {
            let mut doc = load_doc(&cli, input.as_deref())?;
            let preserved = doc.inline_css()?;
            write_html(cli.output.as_deref(), &doc.to_html())?;
            if preserved.trim().is_empty() {
                report("inlined", "all rules moved into style attributes");
            } else {
                report(
                    "inlined",
                    &format!("{} bytes of CSS kept in <style>", preserved.len()),
                );
            }
        }
        Command::Reverse {
            input,
            external,
            css_output,
            href,
        } => {
            let mut doc = load_doc(&cli, input.as_deref())?;
            if *external {
                let options = ExtractOptions {
                    stylesheet_href: href.clone(),
                };
                let css = doc.reverse_external(&options);
                write_html(cli.output.as_deref(), &doc.to_html())?;
                if css.trim().is_empty() {
                    report("extracted", "no CSS found; no stylesheet written");
                } else {
                    let path = css_output
                        .clone()
                        .unwrap_or_else(|| default_css_path(cli.output.as_deref(), href));
                    fs::write(&path, &css)
                        .with_context(|| format!("failed to write '{}'", path.display()))?;
                    report("extracted", &format!("CSS written to {}", path.display()));
                }
            } else {
                let css = doc.reverse_internal();
                write_html(cli.output.as_deref(), &doc.to_html())?;
                report(
                    "extracted",
                    &format!("{} bytes of CSS placed in <style>", css.len()),
                );
            }
        }
        Command::Dump { input, json } => {
            let doc = load_doc(&cli, input.as_deref())?;
            let tree = doc.tree();
            if *json {
                let text = serde_json::to_string_pretty(&tree.subtree(NodeId::ROOT))
                    .context("failed to encode tree as JSON")?;
                println!("{text}");
            } else {
                print_tree(tree, tree.root(), 0);
            }
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `warn`, or `debug` with `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

/// Load document from CLI arguments
fn load_doc(cli: &Cli, input: Option<&str>) -> Result<Document> {
    if let Some(ref html_string) = cli.html {
        return Ok(Document::parse(html_string));
    }
    let Some(input) = input else {
        anyhow::bail!("an input file, URL, `-` or --html is required");
    };

    if input == "-" {
        let mut html = String::new();
        let _ = io::stdin()
            .read_to_string(&mut html)
            .context("failed to read HTML from stdin")?;
        return Ok(Document::parse(&html));
    }

    if is_remote(input) {
        return Document::load(input).with_context(|| format!("failed to load '{input}'"));
    }

    let path = Path::new(input);
    log::debug!("reading {}", path.display());
    let html =
        fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    let doc = Document::parse(&html);
    Ok(match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => doc.with_base_dir(dir),
        _ => doc.with_base_dir("."),
    })
}

fn write_html(output: Option<&Path>, html: &str) -> Result<()> {
    if let Some(path) = output {
        fs::write(path, html).with_context(|| format!("failed to write '{}'", path.display()))
    } else {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(html.as_bytes())
            .and_then(|()| stdout.write_all(b"\n"))
            .context("failed to write HTML to stdout")
    }
}

/// The stylesheet goes where the link will find it: `href` relative to the
/// HTML output's directory.
fn default_css_path(output: Option<&Path>, href: &str) -> PathBuf {
    output
        .and_then(Path::parent)
        .map_or_else(|| PathBuf::from(href), |dir| dir.join(href))
}

fn report(label: &str, message: &str) {
    eprintln!("{} {message}", label.green().bold());
}
