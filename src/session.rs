//! PLM session interface
//!
//! The proprietary product-structure API is reached through the
//! [`PlmSession`] trait. The session is a single stateful resource: at most
//! one article may be open at a time, and structure cursors nest strictly
//! (the cursor opened last must be closed first). Callers are expected to
//! keep that discipline; implementations may enforce it.

use thiserror::Error;

/// Numeric article identifier.
///
/// Positive ids reference real catalog entries. Ids ≤ 0 appear in structure
/// rows for terminal or unresolvable references and must never be opened.
pub type ArticleId = i64;

/// Outcome of a login attempt that did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStatus {
    /// The session is established and ready for use.
    Ready,
    /// The client is not reachable yet; try again later.
    NotReady,
}

/// Errors surfaced by a PLM session implementation.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session is not logged in")]
    NotConnected,
    #[error("no article is selected in the PLM client")]
    NoSelection,
    #[error("unknown article id {0}")]
    UnknownArticle(ArticleId),
    #[error("no article is open")]
    NoOpenArticle,
    #[error("no structure cursor is open")]
    NoOpenCursor,
    #[error("structure cursor is not positioned on a row")]
    NoCurrentRow,
    #[error("remark is unavailable for the current row")]
    RemarkUnavailable,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Stateful session with the external product-structure system.
///
/// Mirrors the vendor API surface: scoped article metadata access, scoped
/// structure cursors, and per-row field accessors that read whatever row
/// the innermost cursor is currently positioned on.
pub trait PlmSession {
    /// Attempt to establish the session. Polled by [`crate::connect`].
    fn login(&mut self) -> Result<LoginStatus, SessionError>;

    /// Id of the article currently selected in the client UI.
    fn selected_article(&mut self) -> Result<ArticleId, SessionError>;

    fn open_article(&mut self, id: ArticleId) -> Result<(), SessionError>;
    fn close_article(&mut self) -> Result<(), SessionError>;
    fn article_designation(&mut self) -> Result<String, SessionError>;
    fn article_name(&mut self) -> Result<String, SessionError>;

    /// Open a structure cursor over the immediate children of `id`.
    ///
    /// Cursors nest: opening while another cursor is open pushes a level,
    /// and [`close_structure`](Self::close_structure) pops the innermost one.
    fn open_structure(&mut self, id: ArticleId) -> Result<(), SessionError>;
    fn close_structure(&mut self) -> Result<(), SessionError>;

    /// Position the innermost cursor on its first row.
    fn cursor_first(&mut self) -> Result<(), SessionError>;
    /// True once the innermost cursor has moved past its last row.
    fn cursor_eof(&mut self) -> Result<bool, SessionError>;
    /// Advance the innermost cursor by one row.
    fn cursor_next(&mut self) -> Result<(), SessionError>;

    fn row_article_id(&mut self) -> Result<ArticleId, SessionError>;
    fn row_designation(&mut self) -> Result<String, SessionError>;
    fn row_name(&mut self) -> Result<String, SessionError>;
    fn row_quantity(&mut self) -> Result<String, SessionError>;
    fn row_remark(&mut self) -> Result<String, SessionError>;
}

/// Scoped open-article handle.
///
/// Opens the article on construction and closes it when dropped, so the
/// article is released on every exit path, including early `?` returns.
pub struct ArticleGuard<'a, S: PlmSession + ?Sized> {
    session: &'a mut S,
}

impl<'a, S: PlmSession + ?Sized> ArticleGuard<'a, S> {
    pub fn open(session: &'a mut S, id: ArticleId) -> Result<Self, SessionError> {
        session.open_article(id)?;
        Ok(Self { session })
    }

    pub fn designation(&mut self) -> Result<String, SessionError> {
        self.session.article_designation()
    }

    pub fn name(&mut self) -> Result<String, SessionError> {
        self.session.article_name()
    }
}

impl<S: PlmSession + ?Sized> Drop for ArticleGuard<'_, S> {
    fn drop(&mut self) {
        if let Err(err) = self.session.close_article() {
            tracing::warn!(error = %err, "failed to close article");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal session that only tracks the open/close article pairing.
    #[derive(Default)]
    struct ArticleOnly {
        open: Option<ArticleId>,
        closes: usize,
    }

    impl PlmSession for ArticleOnly {
        fn login(&mut self) -> Result<LoginStatus, SessionError> {
            Ok(LoginStatus::Ready)
        }
        fn selected_article(&mut self) -> Result<ArticleId, SessionError> {
            Err(SessionError::NoSelection)
        }
        fn open_article(&mut self, id: ArticleId) -> Result<(), SessionError> {
            self.open = Some(id);
            Ok(())
        }
        fn close_article(&mut self) -> Result<(), SessionError> {
            if self.open.take().is_none() {
                return Err(SessionError::NoOpenArticle);
            }
            self.closes += 1;
            Ok(())
        }
        fn article_designation(&mut self) -> Result<String, SessionError> {
            match self.open {
                Some(id) => Ok(format!("ART-{id}")),
                None => Err(SessionError::NoOpenArticle),
            }
        }
        fn article_name(&mut self) -> Result<String, SessionError> {
            Ok(String::new())
        }
        fn open_structure(&mut self, _id: ArticleId) -> Result<(), SessionError> {
            unreachable!()
        }
        fn close_structure(&mut self) -> Result<(), SessionError> {
            unreachable!()
        }
        fn cursor_first(&mut self) -> Result<(), SessionError> {
            unreachable!()
        }
        fn cursor_eof(&mut self) -> Result<bool, SessionError> {
            unreachable!()
        }
        fn cursor_next(&mut self) -> Result<(), SessionError> {
            unreachable!()
        }
        fn row_article_id(&mut self) -> Result<ArticleId, SessionError> {
            unreachable!()
        }
        fn row_designation(&mut self) -> Result<String, SessionError> {
            unreachable!()
        }
        fn row_name(&mut self) -> Result<String, SessionError> {
            unreachable!()
        }
        fn row_quantity(&mut self) -> Result<String, SessionError> {
            unreachable!()
        }
        fn row_remark(&mut self) -> Result<String, SessionError> {
            unreachable!()
        }
    }

    #[test]
    fn guard_closes_on_drop() {
        let mut session = ArticleOnly::default();
        {
            let mut guard = ArticleGuard::open(&mut session, 7).expect("open");
            assert_eq!(guard.designation().expect("designation"), "ART-7");
        }
        assert_eq!(session.closes, 1);
        assert!(session.open.is_none());
    }

    #[test]
    fn guard_closes_on_early_return() {
        fn read_name(session: &mut ArticleOnly) -> Result<String, SessionError> {
            let mut guard = ArticleGuard::open(session, 7)?;
            let _ = guard.designation()?;
            Err(SessionError::NoCurrentRow)
        }

        let mut session = ArticleOnly::default();
        assert!(read_name(&mut session).is_err());
        assert_eq!(session.closes, 1);
    }
}
