//! StructureWalker - builds the product-structure tree from a PLM session
//!
//! The external session exposes a single cursor context per nesting level,
//! so every level is buffered completely before any child level is opened;
//! interleaving reads with nested opens would invalidate the read pointer.
//! Traversal uses an explicit frame stack instead of native recursion, so
//! arbitrarily deep structures cannot overflow the call stack, and the
//! open/close discipline of the cursors stays strictly LIFO.

use tracing::{debug, warn};

use crate::session::{ArticleId, PlmSession, SessionError};

use super::config::WalkerConfig;
use super::filter::DocumentFilter;
use super::node::ArticleNode;

/// One structure row, read while the cursor was positioned on it.
struct BufferedRow {
    id: ArticleId,
    designation: String,
    name: String,
    quantity: String,
    remark: Option<String>,
}

/// One open structure level: the node being assembled and the rows still
/// waiting to be processed.
struct Frame {
    node: ArticleNode,
    rows: std::vec::IntoIter<BufferedRow>,
}

/// Walks an article's structure depth-first and assembles an [`ArticleNode`]
/// tree.
pub struct StructureWalker {
    config: WalkerConfig,
    filter: DocumentFilter,
}

impl StructureWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            filter: DocumentFilter::default(),
        }
    }

    /// Replace the default documentation filter.
    pub fn with_filter(mut self, filter: DocumentFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Build the full tree rooted at `id`.
    ///
    /// The root node carries the given designation and name with quantity
    /// `"1"`. Failures below the root are local: a branch that cannot be
    /// read stays in the tree as a leaf, and siblings that were already
    /// buffered are unaffected.
    pub fn walk<S: PlmSession>(
        &self,
        session: &mut S,
        id: ArticleId,
        designation: impl Into<String>,
        name: impl Into<String>,
    ) -> ArticleNode {
        let root = ArticleNode::new(designation, name, "1");
        debug!(id, designation = %root.designation, "building structure tree");
        self.walk_from(session, id, root)
    }

    fn walk_from<S: PlmSession>(
        &self,
        session: &mut S,
        id: ArticleId,
        root: ArticleNode,
    ) -> ArticleNode {
        if id <= 0 {
            return root;
        }
        let Some(rows) = self.open_and_buffer(session, id) else {
            return root;
        };
        let mut stack = vec![Frame { node: root, rows }];

        // Each iteration either descends into the next buffered row of the
        // innermost level or, once that level is exhausted, closes its
        // cursor and folds the finished node into its parent.
        loop {
            let frame = stack
                .last_mut()
                .expect("stack is non-empty until the root is folded");
            if let Some(row) = frame.rows.next() {
                let mut child = ArticleNode::new(row.designation, row.name, row.quantity);
                child.remark = row.remark;
                if row.id > 0 {
                    match self.open_and_buffer(session, row.id) {
                        Some(child_rows) => stack.push(Frame {
                            node: child,
                            rows: child_rows,
                        }),
                        // Branch failure is local: keep the child as a leaf.
                        None => frame.node.children.push(child),
                    }
                } else {
                    frame.node.children.push(child);
                }
            } else {
                if let Err(err) = session.close_structure() {
                    warn!(error = %err, "failed to close structure cursor");
                }
                let finished = stack.pop().expect("popped the frame just inspected");
                match stack.last_mut() {
                    Some(parent) => parent.node.children.push(finished.node),
                    None => return finished.node,
                }
            }
        }
    }

    /// Open the structure cursor for `id` and buffer every retained row.
    ///
    /// Returns `None` when the cursor could not be opened at all; the
    /// caller then treats the article as a leaf. On a mid-read failure the
    /// rows buffered so far are kept and the level ends early.
    fn open_and_buffer<S: PlmSession>(
        &self,
        session: &mut S,
        id: ArticleId,
    ) -> Option<std::vec::IntoIter<BufferedRow>> {
        if let Err(err) = session.open_structure(id) {
            warn!(id, error = %err, "failed to open structure, treating as leaf");
            return None;
        }
        Some(self.buffer_level(session, id).into_iter())
    }

    /// Read every retained row of the open cursor. On any mid-level failure
    /// the rows buffered so far are kept and the rest of the level is lost.
    fn buffer_level<S: PlmSession>(&self, session: &mut S, id: ArticleId) -> Vec<BufferedRow> {
        let mut rows = Vec::new();
        if let Err(err) = session.cursor_first() {
            warn!(id, error = %err, "failed to position structure cursor");
            return rows;
        }
        loop {
            match session.cursor_eof() {
                Ok(true) => break,
                Ok(false) => {}
                Err(err) => {
                    warn!(id, error = %err, "structure cursor lost, keeping buffered rows");
                    break;
                }
            }
            match self.read_row(session) {
                Ok(Some(row)) => {
                    debug!(
                        parent = id,
                        child = row.id,
                        designation = %row.designation,
                        quantity = %row.quantity,
                        "buffered structure row"
                    );
                    rows.push(row);
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(id, error = %err, "failed to read structure row, keeping buffered rows");
                    break;
                }
            }
            if let Err(err) = session.cursor_next() {
                warn!(id, error = %err, "failed to advance structure cursor");
                break;
            }
        }
        rows
    }

    /// Read the current cursor row; `None` means it was filtered out.
    ///
    /// The remark must be fetched here, while the cursor is still on the
    /// row: the accessor reads the current cursor position.
    fn read_row<S: PlmSession>(
        &self,
        session: &mut S,
    ) -> Result<Option<BufferedRow>, SessionError> {
        let designation = session.row_designation()?;
        if !self.config.include_documentation && self.filter.is_documentation(&designation) {
            debug!(%designation, "skipping documentation row");
            return Ok(None);
        }
        let id = session.row_article_id()?;
        let name = session.row_name()?;
        let quantity = session.row_quantity()?;
        let remark = if ArticleNode::has_zero_quantity(&quantity) {
            // Best effort: a zero-quantity row without a remark is still a row.
            match session.row_remark() {
                Ok(remark) => Some(remark),
                Err(err) => {
                    warn!(id, error = %err, "remark fetch failed");
                    None
                }
            }
        } else {
            None
        };
        Ok(Some(BufferedRow {
            id,
            designation,
            name,
            quantity,
            remark,
        }))
    }
}
