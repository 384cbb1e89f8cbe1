use crate::error::{Error, Result};
use crate::post::Post;
use crate::view::escape::{escape_text, RenderMode};

const OPEN: &str = "${";
const CLOSE: char = '}';

/// The post fields a template can refer to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Placeholder {
    Id,
    Title,
    Date,
    DateFeed,
    Body,
}

impl Placeholder {
    fn from_name(name: &str) -> Option<Placeholder> {
        match name {
            "id" => Some(Placeholder::Id),
            "title" => Some(Placeholder::Title),
            "date" | "datefmt" => Some(Placeholder::Date),
            "daterss" => Some(Placeholder::DateFeed),
            "body" => Some(Placeholder::Body),
            _ => None,
        }
    }

    fn write(&self, out: &mut String, post: &Post, mode: RenderMode) {
        let (value, raw) = match self {
            Placeholder::Id => (post.id.as_str(), true),
            Placeholder::Body => (post.body.as_str(), true),
            Placeholder::Title => (post.title.as_str(), false),
            Placeholder::Date => (post.date_display.as_str(), false),
            Placeholder::DateFeed => (post.date_feed.as_deref().unwrap_or(""), false),
        };

        if raw || mode == RenderMode::Html {
            out.push_str(value);
        } else {
            escape_text(out, value);
        }
    }
}

/// Renders one `item` fragment for `post`, replacing every `${name}`.
///
/// Unknown names render as nothing. A `${` without a later `}` fails the
/// whole item, so nothing of it reaches the output.
pub fn render_item(item: &str, post: &Post, mode: RenderMode) -> Result<String> {
    let mut out = String::with_capacity(item.len() + post.body.len());
    let mut rest = item;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            return Err(Error::MissingClosingBracket);
        };

        if let Some(placeholder) = Placeholder::from_name(&after_open[..end]) {
            placeholder.write(&mut out, post, mode);
        }
        rest = &after_open[end + 1..];
    }
    out.push_str(rest);

    Ok(out)
}
