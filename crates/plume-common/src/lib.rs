//! Common utilities for plume.
//!
//! This crate provides shared infrastructure used by the other crates:
//! - **Fetching** - blocking HTTP GET for remote documents and stylesheets
//! - **URL resolution** - resolving stylesheet hrefs against a document URL
//! - **Warning System** - deduplicated warnings for unsupported input

pub mod net;
pub mod url;
pub mod warning;

pub use net::{FetchError, fetch_text, is_remote};
