//! Tree serialization
//!
//! - `config` - document shell configuration
//! - `html` - collapsible HTML document renderer
//! - `text` - indented console listing

mod config;
mod html;
mod text;

pub use config::RenderConfig;
pub use html::{escape_html, HtmlRenderer};
pub use text::render_text;
