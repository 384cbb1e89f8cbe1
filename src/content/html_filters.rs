//! Rewrites applied to the HTML coming out of the markdown converter.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref HEADING_REGEX: Regex = Regex::new(r"(?s)<h(?P<level>[1-6])>(?P<inner>.*?)</h[1-6]>").unwrap();
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref ENTITY_REGEX: Regex = Regex::new(r"^&#?[A-Za-z0-9]+;").unwrap();
}

/// Gives every heading an `id` slugged from its text. Repeated slugs get a
/// `-1`, `-2`, ... suffix.
pub fn add_heading_ids(html: &str) -> String {
    let mut seen: HashMap<String, usize> = HashMap::new();

    HEADING_REGEX
        .replace_all(html, |cap: &Captures| {
            let level = &cap["level"];
            let inner = &cap["inner"];
            let slug = slugify(&heading_text(inner));
            if slug.is_empty() {
                return cap[0].to_string();
            }

            let count = seen.entry(slug.clone()).or_insert(0);
            let id = match *count {
                0 => slug,
                n => format!("{}-{}", slug, n),
            };
            *count += 1;
            format!("<h{} id=\"{}\">{}</h{}>", level, id, inner, level)
        })
        .into_owned()
}

fn heading_text(inner: &str) -> String {
    let text = TAG_REGEX.replace_all(inner, "");
    text.split('&')
        .enumerate()
        .map(|(i, part)| match (i, part.find(';')) {
            // Drop the entity name, keep what follows it
            (0, _) | (_, None) => part,
            (_, Some(end)) => &part[end + 1..],
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercases, turns runs of other characters into one hyphen and trims
/// hyphens at both ends.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut prev_hyphen = true;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
            prev_hyphen = false;
        } else if !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

const LEFT_DOUBLE: &str = "&#8220;";
const RIGHT_DOUBLE: &str = "&#8221;";
const LEFT_SINGLE: &str = "&#8216;";
const RIGHT_SINGLE: &str = "&#8217;";

const DASHES: [(&str, &str, char); 3] = [
    ("---", "&#8212;", '\u{2014}'),
    ("--", "&#8211;", '\u{2013}'),
    ("...", "&#8230;", '\u{2026}'),
];

/// Curly quotes, en and em dashes and ellipses as numeric entities. Markup
/// and the contents of `code` and `pre` elements are left alone.
pub fn smarten(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut verbatim = 0usize;
    let mut prev: Option<char> = None;
    let mut rest = html;

    while !rest.is_empty() {
        if rest.starts_with('<') {
            let end = rest.find('>').map_or(rest.len(), |i| i + 1);
            let tag = &rest[..end];
            match tag_name(tag) {
                ("code" | "pre", false) => verbatim += 1,
                ("code" | "pre", true) => verbatim = verbatim.saturating_sub(1),
                _ => {}
            }
            out.push_str(tag);
            rest = &rest[end..];
            continue;
        }

        let end = rest.find('<').unwrap_or(rest.len());
        let text = &rest[..end];
        if verbatim > 0 {
            out.push_str(text);
            prev = text.chars().last().or(prev);
        } else {
            smarten_text(text, &mut prev, &mut out);
        }
        rest = &rest[end..];
    }

    out
}

fn tag_name(tag: &str) -> (&str, bool) {
    let inner = &tag[1..];
    let closing = inner.starts_with('/');
    let inner = inner.trim_start_matches('/');
    let end = inner.find(|c: char| !c.is_ascii_alphanumeric()).unwrap_or(inner.len());
    (&inner[..end], closing)
}

fn smarten_text(text: &str, prev: &mut Option<char>, out: &mut String) {
    let mut rest = text;

    'scan: while let Some(ch) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix("&quot;") {
            let opening = opens(*prev);
            out.push_str(if opening { LEFT_DOUBLE } else { RIGHT_DOUBLE });
            *prev = Some(if opening { '\u{201C}' } else { '\u{201D}' });
            rest = after;
            continue;
        }
        if ch == '&' {
            let end = ENTITY_REGEX.find(rest).map_or(1, |m| m.end());
            out.push_str(&rest[..end]);
            *prev = Some(';');
            rest = &rest[end..];
            continue;
        }
        if ch == '\'' {
            let opening = opens(*prev);
            out.push_str(if opening { LEFT_SINGLE } else { RIGHT_SINGLE });
            *prev = Some(if opening { '\u{2018}' } else { '\u{2019}' });
            rest = &rest[1..];
            continue;
        }
        for (pattern, entity, glyph) in DASHES {
            if let Some(after) = rest.strip_prefix(pattern) {
                out.push_str(entity);
                *prev = Some(glyph);
                rest = after;
                continue 'scan;
            }
        }

        out.push(ch);
        *prev = Some(ch);
        rest = &rest[ch.len_utf8()..];
    }
}

/// A quote opens at the start of the text or after space, an opening
/// bracket, a dash or another opening quote.
fn opens(prev: Option<char>) -> bool {
    match prev {
        None => true,
        Some(c) => c.is_whitespace()
            || matches!(c, '(' | '[' | '{' | '-' | '\u{2013}' | '\u{2014}' | '\u{201C}' | '\u{2018}'),
    }
}
