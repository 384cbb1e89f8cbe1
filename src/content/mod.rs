pub mod content_file;
pub mod front_matter;
pub mod html_filters;
pub mod markdown_doc;
