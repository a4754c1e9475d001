//! Line insertion at a marker.

use crate::error::{Error, MarkerRole, Result};
use crate::marker::Marker;
use crate::patcher::{Location, Patched};

/// Inserts `line` immediately before the first line that `marker` matches.
///
/// The document is split into lines at `\n`, `\r\n`, a lone `\r`, and the
/// other Unicode line boundaries (`\x0b`, `\x0c`, `\x1c`..`\x1e`, NEL, LS,
/// PS). Lines are rejoined with `\n`, so any other ending comes back as LF,
/// and the output always ends with a single newline.
///
/// # Errors
/// - `Error::InvalidLine` if `line` contains a line break.
/// - `Error::MarkerNotFound` if no line matches. An empty document has no
///   lines and never matches.
///
/// # Example
/// ```
/// use patch_core::{Marker, insert_line_before};
///
/// let patched = insert_line_before("a\nb V001 c\nd\n", &Marker::literal("V001"), "MARK").unwrap();
/// assert_eq!(patched.content, "a\nMARK\nb V001 c\nd\n");
/// ```
pub fn insert_line_before(text: &str, marker: &Marker, line: &str) -> Result<Patched> {
    if line.contains(is_line_break) {
        return Err(Error::InvalidLine {
            line: line.to_string(),
        });
    }

    let mut lines = split_lines(text);
    let index = lines
        .iter()
        .position(|l| marker.matches_line(l))
        .ok_or_else(|| Error::not_found(MarkerRole::Line, marker))?;

    tracing::debug!(%marker, index, "line marker matched");
    lines.insert(index, line);

    let mut content = lines.join("\n");
    content.push('\n');

    Ok(Patched {
        content,
        location: Location::Line(index),
    })
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split at every line boundary, `\r\n` counting as one. A trailing
/// boundary does not produce an empty last line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
