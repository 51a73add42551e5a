//! Strip Markdown inline hyperlinks, keeping only their text.

mod commands;
mod config;
mod editor;
mod markdown;
mod selection;

pub use commands::{Outcome, Scope, remove_from_file, remove_from_selection};
pub use config::Config;
pub use editor::{Editor, FileEditor, StreamEditor, read_document};
pub use markdown::{Link, find_links, has_links, strip_links};
pub use selection::{LineRange, replace_selection, selection_text};
