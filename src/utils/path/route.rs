//! URL processing utilities.
//!
//! - Link type detection (external vs internal vs in-page anchor)
//! - Path/fragment splitting

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a URL into path and fragment parts
///
/// Returns `(path, fragment)`; fragment is empty when there is no `#`.
#[inline]
pub fn split_path_fragment(url: &str) -> (&str, &str) {
    url.split_once('#').unwrap_or((url, ""))
}

/// In-page section id targeted by a link such as `#about` or `/#about`.
///
/// Returns `None` for links without a fragment or with an empty one.
pub fn section_id(url: &str) -> Option<&str> {
    let (_, fragment) = split_path_fragment(url);
    (!fragment.is_empty()).then_some(fragment)
}
