//! Generic-URI string splitting.
//!
//! Pure slicing of `scheme://netloc/path;params?query#fragment` with no
//! decoding or normalization. Components are returned verbatim; callers
//! decide how far to interpret them.

/// Raw component slices produced by [`split_url`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawParts<'a> {
    pub scheme: Option<&'a str>,
    pub netloc: &'a str,
    pub path: &'a str,
    pub query: &'a str,
    pub fragment: &'a str,
}

/// Splits a URL string into its top-level components.
///
/// Split order: scheme, `//` authority, fragment, query. The authority ends
/// at the first `/`, `?`, or `#`; the fragment starts at the first `#` of
/// what remains; the query at the first `?` before that fragment.
pub(crate) fn split_url(url: &str) -> RawParts<'_> {
    let (scheme, rest) = split_scheme(url);

    let (netloc, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after
                .find(['/', '?', '#'])
                .unwrap_or(after.len());
            (&after[..end], &after[end..])
        }
        None => ("", rest),
    };

    let (rest, fragment) = match rest.split_once('#') {
        Some((before, frag)) => (before, frag),
        None => (rest, ""),
    };

    let (path, query) = match rest.split_once('?') {
        Some((before, query)) => (before, query),
        None => (rest, ""),
    };

    RawParts {
        scheme,
        netloc,
        path,
        query,
        fragment,
    }
}

/// Splits legacy `;key=value` parameters off the last path segment.
///
/// The `;` must sit in the final segment; a semicolon in an earlier segment
/// is ordinary path text.
pub(crate) fn split_params(path: &str) -> (&str, &str) {
    let search_from = path.rfind('/').unwrap_or(0);
    match path[search_from..].find(';') {
        Some(offset) => {
            let i = search_from + offset;
            (&path[..i], &path[i + 1..])
        }
        None => (path, ""),
    }
}

fn split_scheme(url: &str) -> (Option<&str>, &str) {
    if let Some(pos) = url.find(':') {
        let candidate = &url[..pos];
        if is_scheme(candidate) {
            return (Some(candidate), &url[pos + 1..]);
        }
    }
    (None, url)
}

/// A scheme is one ASCII letter followed by letters, digits, `+`, `-`, `.`.
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
