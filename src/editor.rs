//! Document access for link removal commands.
//!
//! The [`Editor`] trait is the host capability commands work against: read
//! the document, replace it, and show the user a short notice. The command
//! line front end provides a file backed editor and a stream backed one.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Host document the link removal commands operate on.
pub trait Editor {
    /// Returns full document text.
    fn text(&self) -> &str;

    /// Replaces full document text.
    fn set_text(&mut self, text: String);

    /// Shows a transient message to the user.
    fn notify(&mut self, message: &str);

    /// Flushes document text to its backing store.
    ///
    /// # Errors
    ///
    /// Returns error if writing fails
    fn save(&mut self) -> Result<()>;
}

/// Reads a document from disk as UTF-8 text.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid UTF-8
pub fn read_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Editor over a file on disk, saved back in place.
///
/// Notices are printed to standard error.
#[derive(Debug)]
pub struct FileEditor {
    path: PathBuf,
    text: String,
    modified: bool,
    quiet: bool,
}

impl FileEditor {
    /// Opens file for editing.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid UTF-8
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let text = read_document(&path)?;

        Ok(Self {
            path,
            text,
            modified: false,
            quiet: false,
        })
    }

    /// Suppresses notices when `quiet` is true.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Returns path of the file being edited.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true when text changed since opening or the last save.
    pub fn is_modified(&self) -> bool {
        self.modified
    }
}

impl Editor for FileEditor {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        if text != self.text {
            self.text = text;
            self.modified = true;
        }
    }

    fn notify(&mut self, message: &str) {
        if !self.quiet {
            eprintln!("{}: {}", self.path.display(), message);
        }
    }

    fn save(&mut self) -> Result<()> {
        if !self.modified {
            log::debug!("{} unchanged, not writing", self.path.display());
            return Ok(());
        }

        fs::write(&self.path, &self.text)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        self.modified = false;

        Ok(())
    }
}

/// Editor over text held in memory, saved by writing it to an output stream.
///
/// Used for standard input to standard output filtering. Saving always
/// writes the full text, changed or not.
#[derive(Debug)]
pub struct StreamEditor<W: Write> {
    text: String,
    output: W,
    quiet: bool,
}

impl StreamEditor<io::Stdout> {
    /// Reads standard input to the end and targets standard output.
    ///
    /// # Errors
    ///
    /// Returns error if standard input cannot be read or is not valid UTF-8
    pub fn from_stdin() -> Result<Self> {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read standard input")?;

        Ok(Self::new(text, io::stdout()))
    }
}

impl<W: Write> StreamEditor<W> {
    /// Creates editor over `text`, saving to `output`.
    pub fn new(text: String, output: W) -> Self {
        Self {
            text,
            output,
            quiet: false,
        }
    }

    /// Suppresses notices when `quiet` is true.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Consumes editor, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<W: Write> Editor for StreamEditor<W> {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
    }

    fn notify(&mut self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn save(&mut self) -> Result<()> {
        self.output
            .write_all(self.text.as_bytes())
            .context("Failed to write output")?;
        self.output.flush().context("Failed to flush output")
    }
}
