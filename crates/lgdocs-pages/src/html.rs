//! HTML escaping for template output.

use minijinja::value::Value;
use minijinja::{AutoEscape, Error, ErrorKind, Output, State};

/// Escape text for HTML element content and double-quoted attributes.
///
/// ```
/// use lgdocs_pages::escape_html;
///
/// assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
/// assert_eq!(escape_html("/docs/intro"), "/docs/intro");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Template formatter that escapes strings with [`escape_html`].
///
/// Unlike the default formatter it leaves `/` alone, so URLs stay readable in
/// the generated markup.
pub(crate) fn format_value(out: &mut Output<'_>, state: &State<'_, '_>, value: &Value) -> Result<(), Error> {
    if matches!(state.auto_escape(), AutoEscape::Html)
        && !value.is_safe()
        && let Some(s) = value.as_str()
    {
        return out
            .write_str(&escape_html(s))
            .map_err(|_| Error::new(ErrorKind::WriteFailure, "failed to write template output"));
    }
    minijinja::escape_formatter(out, state, value)
}
