//! Markdown renderers for WeCom group robots.
//!
//! WeCom markdown supports headings, quotes, `[label](url)` links and
//! `<font color="info|comment|warning">` tags; the renderers only use those.
//! Each renderer returns `None` when the event should not be announced.

mod merge_request;
mod pipeline;

pub use merge_request::render_merge_request;
pub use pipeline::render_pipeline;
