/// Output contexts for substituted values.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// Plain HTML pages: every value is copied as it is.
    Html,
    /// XML feeds: titles and dates are entity-escaped, ids and bodies are not.
    Feed,
}

/// Appends `text` to `out` with `< > ' & "` replaced by entities.
///
/// The apostrophe becomes `&#39` with no closing semicolon. Pages generated
/// by earlier releases look like that and are kept byte-identical.
pub fn escape_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
