//! Document loading and the style pipelines for plume.
//!
//! # Scope
//!
//! This crate provides:
//! - **Document Loading** - markup text or an `http(s)://` URL, parsed into a tree
//! - **Stylesheet Collection** - `<style>` text and `<link rel="stylesheet">` targets
//! - **Inlining** - stylesheet rules moved into `style` attributes, with
//!   the CSS that cannot be inlined kept in a `<style>` element
//! - **Extraction** - `style` attributes moved into a generated stylesheet,
//!   embedded in a `<style>` element or written out as a separate file
//!
//! # Not Implemented
//!
//! - `<base href>` handling; relative links resolve against the document URL
//! - `@import` following

/// Adding generated CSS to the document head.
pub mod head;
/// Collecting CSS from `<style>` and `<link>` elements.
pub mod stylesheets;

pub use plume_css as css;
pub use plume_dom as dom;
pub use plume_html as html;

use std::io;
use std::path::{Path, PathBuf};

use plume_common::warning::clear_warnings;
use plume_common::{FetchError, fetch_text, is_remote};
use plume_css::{apply_css, reverse_inline_styles};
use plume_dom::DomTree;
use plume_html::{parse_html, serialize};
use thiserror::Error;

/// Default file name used for the stylesheet link of [`reverse_css_external`].
pub const DEFAULT_STYLESHEET_HREF: &str = "styles.css";

/// Error type for document loading and stylesheet collection.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A document or linked stylesheet could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// A local stylesheet could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        /// The path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Options for the reverse pipeline's external-file variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// The `href` written into the injected `<link rel="stylesheet">`.
    pub stylesheet_href: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            stylesheet_href: DEFAULT_STYLESHEET_HREF.to_string(),
        }
    }
}

/// Result of [`reverse_css_external`]: the document and its stylesheet, separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalOutput {
    /// The serialized document, linking to the stylesheet.
    pub html: String,
    /// The stylesheet text. Empty when the document had no CSS.
    pub css: String,
}

/// A parsed document and where its relative references point.
#[derive(Debug, Clone)]
pub struct Document {
    tree: DomTree,
    base_url: Option<String>,
    base_dir: Option<PathBuf>,
}

impl Document {
    /// Parse markup text. Relative stylesheet links cannot be loaded until a
    /// base directory is set with [`Document::with_base_dir`].
    #[must_use]
    pub fn parse(html: &str) -> Self {
        clear_warnings();
        Self {
            tree: parse_html(html),
            base_url: None,
            base_dir: None,
        }
    }

    /// Load `input`: text starting with `http://` or `https://` is fetched
    /// and becomes the base URL; anything else is parsed as markup.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Fetch`] if the URL cannot be fetched.
    pub fn load(input: &str) -> Result<Self, DocumentError> {
        if !is_remote(input) {
            return Ok(Self::parse(input));
        }
        let html = fetch_text(input)?;
        let mut document = Self::parse(&html);
        document.base_url = Some(input.to_string());
        Ok(document)
    }

    /// Resolve relative stylesheet links against `dir` on the local filesystem.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// The URL the document was fetched from, if any.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// The directory local stylesheet links are read from, if any.
    #[must_use]
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// The document tree.
    #[must_use]
    pub const fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Mutable access to the document tree.
    pub const fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Take the document tree.
    #[must_use]
    pub fn into_tree(self) -> DomTree {
        self.tree
    }

    /// Serialize the document.
    #[must_use]
    pub fn to_html(&self) -> String {
        serialize(&self.tree)
    }

    /// Move the document's CSS into `style` attributes.
    ///
    /// Every `<style>` element is removed and every stylesheet link loaded.
    /// CSS that cannot be inlined is appended to `<head>` in a new `<style>`
    /// element and also returned.
    ///
    /// # Errors
    ///
    /// Fails if a linked stylesheet cannot be loaded.
    pub fn inline_css(&mut self) -> Result<String, DocumentError> {
        let css = stylesheets::collect_css(
            &mut self.tree,
            self.base_url.as_deref(),
            self.base_dir.as_deref(),
        )?;
        let preserved = apply_css(&mut self.tree, &css);
        if !preserved.trim().is_empty() {
            head::inject_style(&mut self.tree, &preserved);
        }
        Ok(preserved)
    }

    /// Move every `style` attribute into a stylesheet and return it.
    ///
    /// Existing `<style>` elements are removed and their CSS placed ahead of
    /// the generated rules, separated by a blank line. Nothing is injected.
    pub fn extract_css(&mut self) -> String {
        let existing = stylesheets::take_existing_css(&mut self.tree);
        let generated = reverse_inline_styles(&mut self.tree);
        [existing, generated]
            .into_iter()
            .filter(|css| !css.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// [`Document::extract_css`], then append the CSS to `<head>` in a
    /// `<style>` element when it is not blank.
    pub fn reverse_internal(&mut self) -> String {
        let css = self.extract_css();
        if !css.trim().is_empty() {
            head::inject_style(&mut self.tree, &css);
        }
        css
    }

    /// [`Document::extract_css`], then link `<head>` to the stylesheet at
    /// `options.stylesheet_href` when the CSS is not blank.
    pub fn reverse_external(&mut self, options: &ExtractOptions) -> String {
        let css = self.extract_css();
        if !css.trim().is_empty() {
            head::inject_link(&mut self.tree, &options.stylesheet_href);
        }
        css
    }
}

/// Inline the CSS of `input` (markup or URL) and return the resulting markup.
///
/// # Errors
///
/// Fails if the document or a linked stylesheet cannot be fetched.
pub fn inline_css(input: &str) -> Result<String, DocumentError> {
    let mut document = Document::load(input)?;
    let _ = document.inline_css()?;
    Ok(document.to_html())
}

/// Inline the CSS of `input` (markup or URL) and return the resulting tree.
///
/// # Errors
///
/// Fails if the document or a linked stylesheet cannot be fetched.
pub fn inline_css_to_dom(input: &str) -> Result<DomTree, DocumentError> {
    let mut document = Document::load(input)?;
    let _ = document.inline_css()?;
    Ok(document.into_tree())
}

/// Move the inline styles of `input` (markup or URL) into a `<style>`
/// element and return the resulting tree.
///
/// # Errors
///
/// Fails if the document cannot be fetched.
pub fn reverse_css(input: &str) -> Result<DomTree, DocumentError> {
    let mut document = Document::load(input)?;
    let _ = document.reverse_internal();
    Ok(document.into_tree())
}

/// Move the inline styles of `input` (markup or URL) into a `<style>`
/// element and return the resulting markup.
///
/// # Errors
///
/// Fails if the document cannot be fetched.
pub fn reverse_css_internal(input: &str) -> Result<String, DocumentError> {
    let mut document = Document::load(input)?;
    let _ = document.reverse_internal();
    Ok(document.to_html())
}

/// Move the inline styles of `input` (markup or URL) into a separate
/// stylesheet, linked from `<head>` as `options.stylesheet_href`.
///
/// # Errors
///
/// Fails if the document cannot be fetched.
pub fn reverse_css_external(
    input: &str,
    options: &ExtractOptions,
) -> Result<ExternalOutput, DocumentError> {
    let mut document = Document::load(input)?;
    let css = document.reverse_external(options);
    Ok(ExternalOutput {
        html: document.to_html(),
        css,
    })
}
