pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod logger;
pub mod post;
pub mod post_check;
pub mod post_list;
pub mod template;
pub mod text_utils;
pub mod view;
mod test_data;
