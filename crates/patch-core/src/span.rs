//! Span replacement between two markers.

use std::ops::Range;

use crate::error::{Error, MarkerRole, Result};
use crate::marker::Marker;
use crate::patcher::{Location, Patched};

/// Where a replaced span stops relative to the end marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EndBound {
    /// Stop at the first byte of the end marker; the marker is kept.
    #[default]
    Exclusive,
    /// Stop after the end marker; the marker is replaced too.
    Inclusive,
}

/// Finds the byte range a span replacement would overwrite.
///
/// The start marker's first match opens the span. The end marker is searched
/// from that same position, so an end match that precedes the start marker
/// never counts.
pub fn locate_span(
    text: &str,
    start: &Marker,
    end: &Marker,
    bound: EndBound,
) -> Result<Range<usize>> {
    let open = start
        .find(text)
        .ok_or_else(|| Error::not_found(MarkerRole::Start, start))?;
    let close = end
        .find_from(text, open.start)
        .ok_or_else(|| Error::not_found(MarkerRole::End, end))?;

    let stop = match bound {
        EndBound::Exclusive => close.start,
        EndBound::Inclusive => close.end,
    };
    tracing::debug!(%start, %end, from = open.start, to = stop, "span located");
    Ok(open.start..stop)
}

/// Replaces the span between `start` and `end` with `replacement`.
///
/// Every byte outside the span is preserved, including whitespace and line
/// endings. `replacement` is inserted verbatim; regex markers do not expand
/// capture groups into it.
///
/// # Errors
/// Returns `Error::MarkerNotFound` with role `Start` or `End` when either
/// marker cannot be located.
pub fn replace_span(
    text: &str,
    start: &Marker,
    end: &Marker,
    replacement: &str,
    bound: EndBound,
) -> Result<Patched> {
    let span = locate_span(text, start, end, bound)?;

    let mut content =
        String::with_capacity(text.len() - (span.end - span.start) + replacement.len());
    content.push_str(&text[..span.start]);
    content.push_str(replacement);
    content.push_str(&text[span.end..]);

    Ok(Patched {
        content,
        location: Location::Span(span),
    })
}
