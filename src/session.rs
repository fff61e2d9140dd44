use crate::compare::{CompareOutcome, CompareRequest, compare_async};
use crate::errors::{CompareError, SessionError};
use std::path::{Path, PathBuf};
use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SessionState {
    Idle,
    ReadyToCompare,
    Comparing,
    Compared(CompareOutcome),
}

/// Selection and result state for one source/reference pair.
///
/// `Comparing` doubles as the guard against a second compare being started
/// while one is in flight.
#[derive(Debug)]
pub struct CompareSession {
    source: Option<PathBuf>,
    reference: Option<PathBuf>,
    state: SessionState,
    last_error: Option<String>,
}

impl Default for CompareSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CompareSession {
    pub fn new() -> Self {
        Self {
            source: None,
            reference: None,
            state: SessionState::Idle,
            last_error: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn reference(&self) -> Option<&Path> {
        self.reference.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn outcome(&self) -> Option<&CompareOutcome> {
        match &self.state {
            SessionState::Compared(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn can_export(&self) -> bool {
        self.outcome().is_some_and(|outcome| !outcome.is_clean())
    }

    pub fn select_source(&mut self, path: impl Into<PathBuf>) -> Result<(), SessionError> {
        self.ensure_idle_for_selection()?;
        self.source = Some(path.into());
        self.refresh_selection_state();
        Ok(())
    }

    pub fn select_reference(&mut self, path: impl Into<PathBuf>) -> Result<(), SessionError> {
        self.ensure_idle_for_selection()?;
        self.reference = Some(path.into());
        self.refresh_selection_state();
        Ok(())
    }

    /// Move into `Comparing` and hand back the selected pair.
    pub fn begin_compare(&mut self) -> Result<(PathBuf, PathBuf), SessionError> {
        if matches!(self.state, SessionState::Comparing) {
            return Err(SessionError::Busy);
        }
        let source = self.source.clone().ok_or(SessionError::MissingInput("source"))?;
        let reference = self
            .reference
            .clone()
            .ok_or(SessionError::MissingInput("reference"))?;
        self.transition(SessionState::Comparing);
        Ok((source, reference))
    }

    /// Record the result of the compare started by [`Self::begin_compare`].
    /// A failure drops back to `ReadyToCompare` with no partial result.
    pub fn finish_compare(&mut self, result: Result<CompareOutcome, CompareError>) {
        match result {
            Ok(outcome) => {
                self.last_error = None;
                self.transition(SessionState::Compared(outcome));
            }
            Err(error) => self.record_failure(&error),
        }
    }

    /// Load both selected files, compare them and record the outcome.
    ///
    /// Errors are either [`SessionError`] or [`CompareError`].
    pub async fn run_compare(&mut self) -> anyhow::Result<CompareOutcome> {
        let (source, reference) = self.begin_compare()?;
        let result = match CompareRequest::load(&source, &reference).await {
            Ok(request) => compare_async(request).await,
            Err(error) => Err(error),
        };
        match result {
            Ok(outcome) => {
                self.finish_compare(Ok(outcome.clone()));
                Ok(outcome)
            }
            Err(error) => {
                self.record_failure(&error);
                Err(error.into())
            }
        }
    }

    pub fn reset(&mut self) {
        self.source = None;
        self.reference = None;
        self.last_error = None;
        self.transition(SessionState::Idle);
    }

    fn record_failure(&mut self, error: &CompareError) {
        tracing::debug!(%error, "comparison failed");
        self.last_error = Some(error.to_string());
        self.transition(SessionState::ReadyToCompare);
    }

    fn ensure_idle_for_selection(&self) -> Result<(), SessionError> {
        if matches!(self.state, SessionState::Comparing) {
            return Err(SessionError::Busy);
        }
        Ok(())
    }

    fn refresh_selection_state(&mut self) {
        let next = if self.source.is_some() && self.reference.is_some() {
            SessionState::ReadyToCompare
        } else {
            SessionState::Idle
        };
        self.transition(next);
    }

    fn transition(&mut self, next: SessionState) {
        tracing::debug!(from = %self.state, to = %next, "session transition");
        self.state = next;
    }
}
