use std::io::Write;

use crate::error::Result;
use crate::post::Post;
use crate::template::Template;
use crate::view::escape::RenderMode;
use crate::view::placeholder::render_item;

/// Assembles a page: the header, one rendered item per post in the given
/// order, then the footer.
pub struct PageRenderer<'a> {
    pub template: &'a Template,
    pub mode: RenderMode,
}

impl PageRenderer<'_> {
    pub fn render<W: Write + ?Sized>(&self, posts: &[Post], sink: &mut W) -> Result<()> {
        sink.write_all(self.template.header.as_bytes())?;
        for post in posts {
            let item = render_item(&self.template.item, post, self.mode)
                .map_err(|e| e.in_post(&post.file_name))?;
            sink.write_all(item.as_bytes())?;
        }
        sink.write_all(self.template.footer.as_bytes())?;
        sink.flush()?;
        Ok(())
    }
}
