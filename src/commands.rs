//! Link removal commands over a document or a selection.

use std::fmt;

use crate::editor::Editor;
use crate::markdown::strip_links;
use crate::selection::{LineRange, replace_selection, selection_text};

/// Part of the document a command acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    File,
    Selection,
}

/// Result of a link removal command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Links were stripped and the document was updated.
    Removed(Scope),
    /// No links to strip; the document is untouched.
    NothingFound(Scope),
    /// Selection was empty or outside the document.
    NoSelection,
}

impl Outcome {
    /// Returns user facing notice for this outcome.
    pub fn message(self) -> &'static str {
        match self {
            Self::Removed(Scope::File) => "Hyperlinks removed from file",
            Self::Removed(Scope::Selection) => "Hyperlinks removed from selection",
            Self::NothingFound(Scope::File) => "No hyperlinks found in the file",
            Self::NothingFound(Scope::Selection) => "No hyperlinks found in the selection",
            Self::NoSelection => "No text selected to remove hyperlinks from",
        }
    }

    /// Returns true when the document text changed.
    pub fn changed(self) -> bool {
        matches!(self, Self::Removed(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Strips links from the whole document.
///
/// Replaces the document only when stripping changed it, then notifies the
/// user either way.
pub fn remove_from_file<E: Editor + ?Sized>(editor: &mut E) -> Outcome {
    let updated = strip_links(editor.text());

    let outcome = if updated != editor.text() {
        editor.set_text(updated);
        Outcome::Removed(Scope::File)
    } else {
        Outcome::NothingFound(Scope::File)
    };

    editor.notify(outcome.message());
    outcome
}

/// Strips links from the selected lines only.
///
/// Text outside the selection is never touched, so a link spanning the
/// selection boundary is left as is.
///
/// # Arguments
///
/// * `editor`: Document to edit
/// * `range`: Selected lines
///
/// # Returns
///
/// Outcome of the command, already notified to the user
pub fn remove_from_selection<E: Editor + ?Sized>(editor: &mut E, range: LineRange) -> Outcome {
    let updated = match selection_text(&*editor, range) {
        Some(selection) if !selection.is_empty() => {
            let updated = strip_links(selection);
            (updated != selection).then_some(updated)
        }
        _ => {
            log::debug!("Lines {} select nothing", range);
            editor.notify(Outcome::NoSelection.message());
            return Outcome::NoSelection;
        }
    };

    let outcome = match updated {
        Some(updated) => {
            let replaced = replace_selection(editor, range, &updated);
            debug_assert!(replaced, "Selection was checked before stripping");
            Outcome::Removed(Scope::Selection)
        }
        None => Outcome::NothingFound(Scope::Selection),
    };

    editor.notify(outcome.message());
    outcome
}
