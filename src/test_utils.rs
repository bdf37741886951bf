//! Test utilities for session-level assertions.
//!
//! This module is only compiled for tests and the `test-utils` feature.

use crate::session::{ArticleId, LoginStatus, PlmSession, SessionError};

/// Session calls the walker's resource discipline is judged by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallEvent {
    OpenStructure(ArticleId),
    CloseStructure,
    RemarkFetch,
}

/// [`PlmSession`] wrapper that records structure-cursor and remark calls
/// and can inject failures.
pub struct RecordingSession<S: PlmSession> {
    inner: S,
    calls: Vec<CallEvent>,
    login_not_ready: usize,
    fail_remarks: bool,
}

impl<S: PlmSession> RecordingSession<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Vec::new(),
            login_not_ready: 0,
            fail_remarks: false,
        }
    }

    /// Recorded calls, in order.
    pub fn calls(&self) -> &[CallEvent] {
        &self.calls
    }

    /// Report not-ready for the next `attempts` login calls.
    pub fn delay_login(&mut self, attempts: usize) {
        self.login_not_ready = attempts;
    }

    /// Make every remark fetch fail.
    pub fn fail_remarks(&mut self) {
        self.fail_remarks = true;
    }
}

impl<S: PlmSession> PlmSession for RecordingSession<S> {
    fn login(&mut self) -> Result<LoginStatus, SessionError> {
        if self.login_not_ready > 0 {
            self.login_not_ready -= 1;
            return Ok(LoginStatus::NotReady);
        }
        self.inner.login()
    }

    fn selected_article(&mut self) -> Result<ArticleId, SessionError> {
        self.inner.selected_article()
    }

    fn open_article(&mut self, id: ArticleId) -> Result<(), SessionError> {
        self.inner.open_article(id)
    }

    fn close_article(&mut self) -> Result<(), SessionError> {
        self.inner.close_article()
    }

    fn article_designation(&mut self) -> Result<String, SessionError> {
        self.inner.article_designation()
    }

    fn article_name(&mut self) -> Result<String, SessionError> {
        self.inner.article_name()
    }

    fn open_structure(&mut self, id: ArticleId) -> Result<(), SessionError> {
        let result = self.inner.open_structure(id);
        if result.is_ok() {
            self.calls.push(CallEvent::OpenStructure(id));
        }
        result
    }

    fn close_structure(&mut self) -> Result<(), SessionError> {
        let result = self.inner.close_structure();
        if result.is_ok() {
            self.calls.push(CallEvent::CloseStructure);
        }
        result
    }

    fn cursor_first(&mut self) -> Result<(), SessionError> {
        self.inner.cursor_first()
    }

    fn cursor_eof(&mut self) -> Result<bool, SessionError> {
        self.inner.cursor_eof()
    }

    fn cursor_next(&mut self) -> Result<(), SessionError> {
        self.inner.cursor_next()
    }

    fn row_article_id(&mut self) -> Result<ArticleId, SessionError> {
        self.inner.row_article_id()
    }

    fn row_designation(&mut self) -> Result<String, SessionError> {
        self.inner.row_designation()
    }

    fn row_name(&mut self) -> Result<String, SessionError> {
        self.inner.row_name()
    }

    fn row_quantity(&mut self) -> Result<String, SessionError> {
        self.inner.row_quantity()
    }

    fn row_remark(&mut self) -> Result<String, SessionError> {
        self.calls.push(CallEvent::RemarkFetch);
        if self.fail_remarks {
            return Err(SessionError::RemarkUnavailable);
        }
        self.inner.row_remark()
    }
}
