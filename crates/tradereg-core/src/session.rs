//! Form/Results state machine for a single analysis workspace.
//!
//! One submission may be in flight at a time. Successful results are cached by
//! their server id and the view switches to them; failures leave the form as
//! it was so it can be resubmitted.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::analysis::{AnalysisInput, AnalysisResult};
use crate::form::{AnalysisForm, FormError};

pub const COMPLETED_MESSAGE: &str = "Analysis completed successfully!";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to analyze regulatory requirements";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("an analysis is already in progress")]
    SubmissionInFlight,
    #[error("start a new analysis before submitting")]
    NotOnForm,
    #[error("no analysis was submitted")]
    NothingSubmitted,
    #[error(transparent)]
    Form(#[from] FormError),
}

/// Which screen the session is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Form,
    Results { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct AnalysisSession {
    view: View,
    pending: bool,
    cache: HashMap<String, AnalysisResult>,
    notice: Option<Notice>,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Validate the form and mark a submission as in flight.
    ///
    /// Only valid on the form view with nothing in flight. Returns the request
    /// to send. A form error is also recorded as an error notice; the session
    /// stays on the form either way.
    pub fn submit(&mut self, form: &AnalysisForm) -> Result<AnalysisInput, SessionError> {
        if self.pending {
            return Err(SessionError::SubmissionInFlight);
        }
        if self.view != View::Form {
            return Err(SessionError::NotOnForm);
        }
        match form.validate_and_build() {
            Ok(input) => {
                self.pending = true;
                debug!(
                    country = %input.country,
                    activity = %input.activity_type,
                    "analysis submitted"
                );
                Ok(input)
            }
            Err(e) => {
                warn!(error = %e, "analysis form rejected");
                self.notice = Some(Notice::error(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Record a successful response and switch to its results.
    ///
    /// Rejected unless a submission is in flight; the session is unchanged then.
    pub fn complete(&mut self, result: AnalysisResult) -> Result<(), SessionError> {
        if !self.pending {
            warn!(id = %result.id, "unsolicited analysis result ignored");
            return Err(SessionError::NothingSubmitted);
        }
        let id = result.id.clone();
        info!(id = %id, "analysis completed");
        self.cache.insert(id.clone(), result);
        self.pending = false;
        self.view = View::Results { id };
        self.notice = Some(Notice::success(COMPLETED_MESSAGE));
        Ok(())
    }

    /// Record a failed submission. The view and cache are left untouched.
    pub fn fail(&mut self, message: &str) {
        let message = if message.trim().is_empty() {
            DEFAULT_FAILURE_MESSAGE
        } else {
            message
        };
        warn!(error = %message, "analysis failed");
        self.pending = false;
        self.notice = Some(Notice::error(message));
    }

    /// Return to the form for a new analysis.
    pub fn reset(&mut self) {
        self.view = View::Form;
    }

    /// The raw result behind the current results view, if any.
    pub fn current_result(&self) -> Option<&AnalysisResult> {
        match &self.view {
            View::Results { id } => self.cache.get(id),
            View::Form => None,
        }
    }

    /// Look up any previously completed result by id.
    pub fn cached(&self, id: &str) -> Option<&AnalysisResult> {
        self.cache.get(id)
    }
}
