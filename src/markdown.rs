//! Markdown inline link handling.
//!
//! This module locates `[text](url)` links with a prefix pattern plus an
//! explicit parenthesis depth counter, so URLs containing balanced
//! parentheses are kept whole, and rewrites text to keep only the link text.

mod links;

pub use links::{Link, find_links, has_links, strip_links};
