//! Bomview - collapsible HTML view of a PLM product structure
//!
//! Walks the bill-of-materials tree of an article through a [`PlmSession`],
//! optionally dropping documentation rows, and renders the result as a
//! static HTML document whose assemblies expand and collapse in the
//! browser.

pub mod connect;
pub mod output;
pub mod prompt;
pub mod report;
pub mod session;
pub mod snapshot;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use connect::{connect, CancelToken, Clock, ConnectError, Retry, SystemClock};
pub use output::{render_text, HtmlRenderer, RenderConfig};
pub use session::{ArticleGuard, ArticleId, LoginStatus, PlmSession, SessionError};
pub use snapshot::{SnapshotError, SnapshotSession};
pub use tree::{ArticleNode, DocumentFilter, StructureWalker, WalkerConfig, DOCUMENT_MARKERS};
