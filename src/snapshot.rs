//! Snapshot-backed PLM session
//!
//! The proprietary PLM client cannot be linked from here, so the binary runs
//! against a *structure snapshot*: a JSON export of the article catalog. The
//! format is one object per article keyed by id, plus the id of the article
//! selected when the export was taken:
//!
//! ```json
//! {
//!   "root": 100,
//!   "articles": {
//!     "100": {
//!       "designation": "АБВГ.123456.001",
//!       "name": "Изделие",
//!       "rows": [
//!         { "id": 101, "designation": "АБВГ.123456.101", "name": "Кронштейн",
//!           "quantity": "4 шт", "remark": "" }
//!       ]
//!     }
//!   }
//! }
//! ```
//!
//! [`SnapshotSession`] reproduces the vendor API's statefulness (login
//! gating, one open article, a stack of structure cursors), which also makes
//! it an honest test double for the walker.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::session::{ArticleId, LoginStatus, PlmSession, SessionError};

#[derive(Debug, Deserialize)]
struct Snapshot {
    root: ArticleId,
    articles: HashMap<ArticleId, ArticleRecord>,
}

#[derive(Debug, Deserialize)]
struct ArticleRecord {
    designation: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    rows: Vec<RowRecord>,
}

#[derive(Debug, Deserialize)]
struct RowRecord {
    id: ArticleId,
    designation: String,
    #[serde(default)]
    name: String,
    quantity: String,
    #[serde(default)]
    remark: String,
}

/// One open structure level: which article it belongs to and the cursor
/// position within its rows (`position == rows.len()` is EOF).
struct Cursor {
    article: ArticleId,
    position: usize,
}

/// In-memory [`PlmSession`] over a structure snapshot.
pub struct SnapshotSession {
    snapshot: Snapshot,
    logged_in: bool,
    open_article: Option<ArticleId>,
    cursors: Vec<Cursor>,
}

impl SnapshotSession {
    /// Load a snapshot from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let file = File::open(path).map_err(|source| SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            SnapshotError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(Self::new(snapshot))
    }

    /// Parse a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            logged_in: false,
            open_article: None,
            cursors: Vec::new(),
        }
    }

    fn require_login(&self) -> Result<(), SessionError> {
        if self.logged_in {
            Ok(())
        } else {
            Err(SessionError::NotConnected)
        }
    }

    fn article(&self, id: ArticleId) -> Result<&ArticleRecord, SessionError> {
        self.snapshot
            .articles
            .get(&id)
            .ok_or(SessionError::UnknownArticle(id))
    }

    fn cursor(&self) -> Result<&Cursor, SessionError> {
        self.cursors.last().ok_or(SessionError::NoOpenCursor)
    }

    fn cursor_mut(&mut self) -> Result<&mut Cursor, SessionError> {
        self.cursors.last_mut().ok_or(SessionError::NoOpenCursor)
    }

    fn current_row(&self) -> Result<&RowRecord, SessionError> {
        let cursor = self.cursor()?;
        let rows = &self.article(cursor.article)?.rows;
        rows.get(cursor.position).ok_or(SessionError::NoCurrentRow)
    }
}

/// Errors loading a snapshot file.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("cannot read snapshot {path}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid snapshot {path}")]
    Parse {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PlmSession for SnapshotSession {
    fn login(&mut self) -> Result<LoginStatus, SessionError> {
        self.logged_in = true;
        Ok(LoginStatus::Ready)
    }

    fn selected_article(&mut self) -> Result<ArticleId, SessionError> {
        self.require_login()?;
        Ok(self.snapshot.root)
    }

    fn open_article(&mut self, id: ArticleId) -> Result<(), SessionError> {
        self.require_login()?;
        self.article(id)?;
        self.open_article = Some(id);
        Ok(())
    }

    fn close_article(&mut self) -> Result<(), SessionError> {
        self.require_login()?;
        self.open_article
            .take()
            .map(|_| ())
            .ok_or(SessionError::NoOpenArticle)
    }

    fn article_designation(&mut self) -> Result<String, SessionError> {
        self.require_login()?;
        let id = self.open_article.ok_or(SessionError::NoOpenArticle)?;
        Ok(self.article(id)?.designation.clone())
    }

    fn article_name(&mut self) -> Result<String, SessionError> {
        self.require_login()?;
        let id = self.open_article.ok_or(SessionError::NoOpenArticle)?;
        Ok(self.article(id)?.name.clone())
    }

    fn open_structure(&mut self, id: ArticleId) -> Result<(), SessionError> {
        self.require_login()?;
        self.article(id)?;
        self.cursors.push(Cursor {
            article: id,
            position: 0,
        });
        Ok(())
    }

    fn close_structure(&mut self) -> Result<(), SessionError> {
        self.require_login()?;
        self.cursors
            .pop()
            .map(|_| ())
            .ok_or(SessionError::NoOpenCursor)
    }

    fn cursor_first(&mut self) -> Result<(), SessionError> {
        self.require_login()?;
        self.cursor_mut()?.position = 0;
        Ok(())
    }

    fn cursor_eof(&mut self) -> Result<bool, SessionError> {
        self.require_login()?;
        let cursor = self.cursor()?;
        let rows = &self.article(cursor.article)?.rows;
        Ok(cursor.position >= rows.len())
    }

    fn cursor_next(&mut self) -> Result<(), SessionError> {
        self.require_login()?;
        self.cursor_mut()?.position += 1;
        Ok(())
    }

    fn row_article_id(&mut self) -> Result<ArticleId, SessionError> {
        self.require_login()?;
        Ok(self.current_row()?.id)
    }

    fn row_designation(&mut self) -> Result<String, SessionError> {
        self.require_login()?;
        Ok(self.current_row()?.designation.clone())
    }

    fn row_name(&mut self) -> Result<String, SessionError> {
        self.require_login()?;
        Ok(self.current_row()?.name.clone())
    }

    fn row_quantity(&mut self) -> Result<String, SessionError> {
        self.require_login()?;
        Ok(self.current_row()?.quantity.clone())
    }

    fn row_remark(&mut self) -> Result<String, SessionError> {
        self.require_login()?;
        Ok(self.current_row()?.remark.clone())
    }
}
