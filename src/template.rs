use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// The three fragments of a page. `header` and `footer` are written as they
/// are, `item` is rendered once per post.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub header: String,
    pub item: String,
    pub footer: String,
}

impl Template {
    /// Reads `header`, `item` and `footer` from `template_dir`. Placeholders
    /// are not checked here; a broken one fails when it is rendered.
    pub fn load(template_dir: &Path) -> Result<Template> {
        Ok(Template {
            header: read_fragment(template_dir, "header")?,
            item: read_fragment(template_dir, "item")?,
            footer: read_fragment(template_dir, "footer")?,
        })
    }
}

fn read_fragment(template_dir: &Path, name: &str) -> Result<String> {
    let path = template_dir.join(name);
    fs::read_to_string(&path).map_err(|e| Error::io(path, e))
}
