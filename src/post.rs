use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use spdlog::debug;

use crate::content::content_file::ContentFile;
use crate::content::front_matter::{Field, FrontMatter};
use crate::content::markdown_doc::MarkdownDoc;
use crate::error::{Error, Result};
use crate::text_utils::{format_date_time, parse_date_time, FEED_DATE_FORMAT, INPUT_DATE_FORMAT};

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub file_name: PathBuf,
    pub id: String,
    pub title: String,
    pub date: NaiveDateTime,
    pub date_display: String,
    /// Only set when building for a feed.
    pub date_feed: Option<String>,
    pub body: String,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "id={}, date={}, title={}", self.id, self.date, self.title)
    }
}

/// How strictly post identifiers are checked when they are read.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IdPolicy {
    /// Every character must be an ASCII lowercase letter.
    LowercaseOnly,
    Any,
}

/// Rejects an id at its first character outside `a-z`. The empty id passes.
pub fn validate_id(id: &str) -> Result<()> {
    for c in id.chars() {
        if !c.is_ascii_lowercase() {
            return Err(Error::InvalidId(id.to_string()));
        }
    }
    Ok(())
}

/// Turns source documents into validated [`Post`]s.
pub struct PostBuilder<'a> {
    pub date_format: &'a str,
    pub id_policy: IdPolicy,
    pub feed_dates: bool,
}

impl PostBuilder<'_> {
    pub fn build_file(&self, file_path: &Path) -> Result<Post> {
        let content_file = ContentFile::from_file(file_path.to_path_buf())?;
        self.build(&content_file)
            .map_err(|e| e.in_post(&content_file.file_path))
    }

    pub fn build(&self, content_file: &ContentFile) -> Result<Post> {
        let doc = MarkdownDoc::convert(&content_file.raw_content)?;
        if doc.body.is_empty() {
            return Err(Error::MissingBody);
        }

        let mut front_matter = FrontMatter::default();
        for (key, value) in doc.metadata.iter() {
            let Some(field) = Field::from_key(key) else {
                continue;
            };
            if field == Field::Id && self.id_policy == IdPolicy::LowercaseOnly && !front_matter.contains(field) {
                validate_id(value)?;
            }
            if !front_matter.capture(field, value) {
                debug!("{}: ignoring repeated '{}' metadata", content_file.file_path.display(), field);
            }
        }

        if let Some(missing) = [Field::Id, Field::Title, Field::Date]
            .into_iter()
            .find(|f| !front_matter.contains(*f))
        {
            return Err(Error::MissingMetadata(missing.name()));
        }
        let id = front_matter.take(Field::Id).unwrap_or_default();
        let title = front_matter.take(Field::Title).unwrap_or_default();
        let date = front_matter.take(Field::Date).unwrap_or_default();

        let date = parse_date_time(&date, INPUT_DATE_FORMAT)?;
        let date_display = format_date_time(&date, self.date_format)?;
        let date_feed = match self.feed_dates {
            true => Some(format_date_time(&date, FEED_DATE_FORMAT)?),
            false => None,
        };

        Ok(Post {
            file_name: content_file.file_path.clone(),
            id,
            title,
            date,
            date_display,
            date_feed,
            body: doc.body,
        })
    }
}
