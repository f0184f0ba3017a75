//! URL decoding for request paths.
//!
//! Two separate policies exist because routing and value extraction want
//! different things from the same raw path:
//!
//! - [`decode_for_routing`] normalises escapes so that `/f%C3%B6%C3%B6` can match
//!   the pattern `/föö`, but keeps an encoded separator (`%2F`) encoded so it
//!   never introduces a new segment boundary.
//! - [`decode_for_path_params`] is applied to a single captured value handed back
//!   to callers. It decodes everything, including `%2F`, and leaves a literal `+`
//!   alone.
//!
//! Invalid UTF-8 produced by decoding is replaced with U+FFFD rather than
//! rejected; a path that cannot be decoded cleanly should simply fail to match.

use std::borrow::Cow;

/// Decode a whole request path before it is tokenized for matching.
///
/// - `%2F` / `%2f` stays encoded (normalised to lower case `%2f`)
/// - a bare `+` becomes a space, an encoded `%2B` becomes a literal `+`
/// - every other escape is decoded
///
/// ```
/// use segrouter::decode::decode_for_routing;
///
/// assert_eq!(decode_for_routing("/hello/foo%2Fbar/there"), "/hello/foo%2fbar/there");
/// assert_eq!(decode_for_routing("/foo%2Bbar/a+space"), "/foo+bar/a space");
/// ```
#[must_use]
pub fn decode_for_routing(path: &str) -> String {
    if !path.contains(['%', '+']) {
        return path.to_string();
    }
    let spaced = path.replace('+', " ");
    let protected = protect_encoded_separators(&spaced);
    lossy_decode(&protected).into_owned()
}

/// Decode a single captured named or splat value for the caller.
///
/// ```
/// use segrouter::decode::decode_for_path_params;
///
/// assert_eq!(decode_for_path_params("foo%2Fbar"), "foo/bar");
/// assert_eq!(decode_for_path_params("bob+ross"), "bob+ross");
/// ```
#[must_use]
pub fn decode_for_path_params(value: &str) -> String {
    if !value.contains('%') {
        return value.to_string();
    }
    lossy_decode(value).into_owned()
}

/// Re-escape the `%` of every `%2F` so that a single decoding pass yields `%2f`.
fn protect_encoded_separators(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 8);
    let mut rest = path;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let is_separator = tail
            .as_bytes()
            .get(1..3)
            .is_some_and(|hex| hex.eq_ignore_ascii_case(b"2f"));
        // `%`, `2` and `f` are ASCII, so these offsets are char boundaries.
        if is_separator {
            out.push_str("%252f");
            rest = &tail[3..];
        } else {
            out.push('%');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

fn lossy_decode(input: &str) -> Cow<'_, str> {
    match urlencoding::decode_binary(input.as_bytes()) {
        Cow::Borrowed(_) => Cow::Borrowed(input),
        Cow::Owned(bytes) => Cow::Owned(String::from_utf8_lossy(&bytes).into_owned()),
    }
}
