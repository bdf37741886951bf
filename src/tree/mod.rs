//! Product-structure tree building
//!
//! - `node` - the in-memory tree node
//! - `filter` - documentation-row classification
//! - `config` - walker configuration
//! - `walker` - the buffering depth-first walker

mod config;
mod filter;
mod node;
mod walker;

pub use config::WalkerConfig;
pub use filter::{DocumentFilter, DOCUMENT_MARKERS};
pub use node::ArticleNode;
pub use walker::StructureWalker;
