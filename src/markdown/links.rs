//! Inline link detection and stripping.

use fancy_regex::{Regex, RegexBuilder};
use std::ops::Range;
use std::sync::LazyLock;

/// Matches the `[display](` prefix of an inline link.
///
/// Pattern breakdown:
/// - `\[` - opening bracket
/// - `((?:[^\]\\]|\\.|\](?!\())*?)` - capture group: display text (non-greedy),
///   made of plain characters, backslash escapes of any character, or a `]`
///   NOT followed by an opening paren
/// - `\]\(` - closing bracket immediately followed by the URL opening paren
///
/// The URL body is not part of the pattern. Balanced parentheses cannot be
/// expressed as a regular expression, so [`closing_paren`] counts them.
///
/// The lookahead forces the backtracking engine, which spends about one
/// backtrack per display text byte. The limit is lifted so a stray `[`
/// far ahead of the next `](` cannot abort the scan.
static LINK_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"(?s)\[((?:[^\]\\]|\\.|\](?!\())*?)\]\(")
        .backtrack_limit(usize::MAX)
        .build()
        .expect("LINK_PREFIX: hardcoded regex is valid")
});

/// Inline Markdown link found in a source text.
///
/// Holds byte ranges into the text it was found in. All ranges lie on
/// character boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<'a> {
    source: &'a str,
    span: Range<usize>,
    text: Range<usize>,
    url: Range<usize>,
}

impl<'a> Link<'a> {
    /// Full link syntax, from `[` through the closing `)`.
    pub fn as_str(&self) -> &'a str {
        &self.source[self.span.clone()]
    }

    /// Display text between the brackets, escapes left as written.
    pub fn text(&self) -> &'a str {
        &self.source[self.text.clone()]
    }

    /// URL body between the outer parentheses.
    pub fn url(&self) -> &'a str {
        &self.source[self.url.clone()]
    }

    /// Byte range of the full link syntax in the source text.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

/// Finds every inline link that [`strip_links`] would replace.
///
/// Scans left to right for `[display](` prefixes. After each prefix the
/// search resumes right behind its opening paren, so a candidate never hides
/// the ones that start inside its URL. Candidates whose URL never closes are
/// skipped, as are candidates starting inside an already accepted link
/// (a link written inside another link's URL disappears with the outer one).
///
/// # Arguments
///
/// * `text`: Markdown text to scan
///
/// # Returns
///
/// Accepted links in source order, non-overlapping
pub fn find_links(text: &str) -> Vec<Link<'_>> {
    let mut links: Vec<Link<'_>> = Vec::new();
    let mut candidates = 0usize;
    let mut pos = 0;

    while pos < text.len() {
        let captures = match LINK_PREFIX.captures_from_pos(text, pos) {
            Ok(Some(captures)) => captures,
            Ok(None) => break,
            Err(e) => {
                // Skip the `[` the engine gave up on and keep scanning
                log::warn!("Link scan failed at byte {pos}: {e}");
                match next_bracket(text, pos) {
                    Some(next) => {
                        pos = next + 1;
                        continue;
                    }
                    None => break,
                }
            }
        };

        let (Some(prefix), Some(display)) = (captures.get(0), captures.get(1)) else {
            break;
        };
        candidates += 1;
        pos = prefix.end();

        let Some(close) = closing_paren(text, prefix.end()) else {
            log::trace!("Unbalanced link at byte {}, left as is", prefix.start());
            continue;
        };

        if links
            .last()
            .is_some_and(|last| prefix.start() < last.span.end)
        {
            continue;
        }

        links.push(Link {
            source: text,
            span: prefix.start()..close + 1,
            text: display.start()..display.end(),
            url: prefix.end()..close,
        });
    }

    log::debug!(
        "Found {} links among {} candidates in {} bytes",
        links.len(),
        candidates,
        text.len()
    );

    links
}

/// Returns true when `text` contains at least one strippable link.
pub fn has_links(text: &str) -> bool {
    !find_links(text).is_empty()
}

/// Replaces every inline Markdown link with its display text.
///
/// `[text](url)` becomes `text`. URLs may contain balanced parentheses, as in
/// `[Rust](https://en.wikipedia.org/wiki/Rust_(programming_language))`.
/// Bracketed text without a following `(` and links whose URL never closes
/// are left untouched. Never fails: text without links comes back unchanged.
///
/// # Arguments
///
/// * `text`: Markdown text
///
/// # Returns
///
/// Text with each link replaced by its display text
pub fn strip_links(text: &str) -> String {
    let links = find_links(text);
    if links.is_empty() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;

    for link in &links {
        result.push_str(&text[cursor..link.span.start]);
        result.push_str(link.text());
        cursor = link.span.end;
    }
    result.push_str(&text[cursor..]);

    result
}

/// Returns byte offset of the first `[` at or after `pos`.
fn next_bracket(text: &str, pos: usize) -> Option<usize> {
    text.as_bytes()[pos..]
        .iter()
        .position(|&byte| byte == b'[')
        .map(|offset| pos + offset)
}

/// Finds the paren closing a URL body that starts at byte `start`.
///
/// Depth starts at 1 for the opening paren already consumed. Parens are
/// ASCII, so scanning bytes never splits a UTF-8 sequence.
fn closing_paren(text: &str, start: usize) -> Option<usize> {
    let mut depth = 1usize;

    for (offset, byte) in text.as_bytes()[start..].iter().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }

    None
}
