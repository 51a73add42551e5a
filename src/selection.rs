//! Line based selections within a document.

use anyhow::{Context, Result, bail};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::editor::Editor;

/// Inclusive, 1-based range of document lines.
///
/// Stands in for an editor selection on the command line. Parses from
/// `START:END` or a single line number `N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    start: usize,
    end: usize,
}

impl LineRange {
    /// Creates line range from first and last line numbers.
    ///
    /// # Errors
    ///
    /// Returns error if either bound is zero or `start` is after `end`.
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start == 0 || end == 0 {
            bail!("Line numbers start at 1, got {}:{}", start, end);
        }
        if start > end {
            bail!("Line range is inverted: {}:{}", start, end);
        }

        Ok(Self { start, end })
    }

    /// Returns first selected line number.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns last selected line number.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Calculates byte offsets of the selected lines.
    ///
    /// The range covers whole lines including their terminators. An `end`
    /// past the last line is clamped to the end of the text.
    ///
    /// # Arguments
    ///
    /// * `text`: Document text
    ///
    /// # Returns
    ///
    /// Byte range of the selection, or None when `start` is past the last line
    pub fn byte_range(&self, text: &str) -> Option<Range<usize>> {
        let mut offset = 0;
        let mut begin = None;

        for (index, line) in text.split_inclusive('\n').enumerate() {
            let number = index + 1;
            if number == self.start {
                begin = Some(offset);
            }
            offset += line.len();
            if number == self.end {
                break;
            }
        }

        begin.map(|begin| begin..offset)
    }
}

impl FromStr for LineRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .with_context(|| format!("Invalid line number: {:?}", part))
        };

        match s.split_once(':') {
            Some((start, end)) => Self::new(parse(start)?, parse(end)?),
            None => {
                let line = parse(s)?;
                Self::new(line, line)
            }
        }
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// Returns the selected text, or None when the range selects nothing.
pub fn selection_text<E: Editor + ?Sized>(editor: &E, range: LineRange) -> Option<&str> {
    let bytes = range.byte_range(editor.text())?;
    Some(&editor.text()[bytes])
}

/// Replaces the selected lines with `replacement`.
///
/// # Returns
///
/// False when the range selects nothing and the document was left alone
pub fn replace_selection<E: Editor + ?Sized>(
    editor: &mut E,
    range: LineRange,
    replacement: &str,
) -> bool {
    let Some(bytes) = range.byte_range(editor.text()) else {
        return false;
    };

    let mut text = editor.text().to_string();
    text.replace_range(bytes, replacement);
    editor.set_text(text);

    true
}
