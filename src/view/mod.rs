pub mod escape;
pub mod page_renderer;
pub mod placeholder;
