//! Label escaping for the two DOT contexts labels are interpolated into.

use std::borrow::Cow;

/// Escapes text placed inside an HTML-like label (`<...>`).
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entity references.
#[must_use]
pub fn html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escapes text placed inside a double-quoted DOT identifier.
///
/// Backslashes are doubled first so a trailing `\` cannot swallow the
/// closing quote, then `"` becomes `\"`.
#[must_use]
pub fn quoted(text: &str) -> Cow<'_, str> {
    if text.contains(['"', '\\']) {
        Cow::Owned(text.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        Cow::Borrowed(text)
    }
}
