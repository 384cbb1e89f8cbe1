use std::str::Lines;

use lazy_static::lazy_static;
use markdown::Options;
use regex::Regex;

use crate::content::html_filters::{add_heading_ids, smarten};
use crate::error::{Error, Result};

/// Output of the markdown converter: the rendered HTML body and the raw
/// front-matter pairs in document order. Keys may repeat.
#[derive(Debug)]
pub struct MarkdownDoc {
    pub body: String,
    pub metadata: Vec<(String, String)>,
}

impl MarkdownDoc {
    /// Example of a document
    /// ```text
    /// id: hello
    /// title: Hello, world
    /// date: 2022-05-01 14:30
    ///
    /// First paragraph of the post.
    /// ```
    /// The same lines may also be fenced by `---`.
    ///
    /// Headings in the body get slugged `id` attributes and the prose gets
    /// typographic quotes, dashes and ellipses.
    pub fn convert(raw: &[u8]) -> Result<MarkdownDoc> {
        let text = std::str::from_utf8(raw).map_err(|e| Error::Conversion(e.to_string()))?;
        let (metadata, body_md) = split_metadata(text);

        let body = match markdown::to_html_with_options(body_md, &Options::gfm()) {
            Ok(x) => x,
            Err(e) => return Err(Error::Conversion(e.reason.to_string())),
        };

        let body = smarten(&add_heading_ids(&body));

        Ok(MarkdownDoc { body, metadata })
    }
}

/// Splits `text` into its metadata pairs and the remaining markdown.
fn split_metadata(text: &str) -> (Vec<(String, String)>, &str) {
    let mut lines = text.lines();
    let first = match lines.clone().next() {
        None => return (vec![], text),
        Some(line) => line,
    };

    if first.trim_end() == "---" {
        lines.next();
        let (metadata, rest) = collect_pairs(lines, true);
        return (metadata, rest.map_or("", |line| remainder(text, line)));
    }

    if extract_key_val(first).is_none() {
        return (vec![], text);
    }

    let (metadata, rest) = collect_pairs(lines, false);
    (metadata, rest.map_or("", |line| remainder(text, line)))
}

/// Reads `key: value` lines until the end of the block. Returns the pairs and
/// the first line of the body, if any.
fn collect_pairs(mut lines: Lines<'_>, fenced: bool) -> (Vec<(String, String)>, Option<&str>) {
    let mut metadata: Vec<(String, String)> = vec![];

    while let Some(line) = lines.next() {
        if fenced && (line.trim_end() == "---" || line.trim_end() == "...") {
            return (metadata, lines.next());
        }
        if line.trim().is_empty() {
            if fenced {
                continue;
            }
            return (metadata, lines.next());
        }

        if line.starts_with(' ') || line.starts_with('\t') {
            // Continuation of the previous value
            if let Some((_, value)) = metadata.last_mut() {
                let more = line.trim();
                if !value.is_empty() {
                    value.push(' ');
                }
                value.push_str(more);
                continue;
            }
        }

        match extract_key_val(line) {
            Some((key, val)) => metadata.push((key.to_string(), val.to_string())),
            None => return (metadata, Some(line)),
        }
    }

    (metadata, None)
}

/// The rest of `text` starting at `line`, which must be a slice of it.
fn remainder<'a>(text: &'a str, line: &'a str) -> &'a str {
    let offset = line.as_ptr() as usize - text.as_ptr() as usize;
    &text[offset..]
}

fn extract_key_val(line: &str) -> Option<(&str, &str)> {
    lazy_static! {
        static ref META_REGEX: Regex = Regex::new(r"^(?P<key>[A-Za-z0-9_][A-Za-z0-9_-]*)[ \t]*:(?P<value>.*)$").unwrap();
    }

    META_REGEX.captures(line).and_then(|cap| {
        let key = cap.name("key").map(|key| key.as_str());
        let val = cap.name("value").map(|val| val.as_str().trim());
        match (key, val) {
            (Some(key), Some(val)) => Some((key, val)),
            _ => None,
        }
    })
}
