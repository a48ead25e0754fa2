//! The upload-analyze session: one file, its preview, and where the analysis
//! stands.
//!
//! A session is replaced wholesale by every file selection. Each selection
//! advances a generation counter; completions carry the generation they were
//! issued for and are dropped once a newer selection (or a clear) has
//! happened, so only the latest file's result can ever be shown.

use crate::catalog::PropertyCatalog;
use crate::confidence::FormattedConfidence;
use crate::model::{FailureResult, InferenceResult};

/// Identifies the selection an inference call belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A successful analysis with its lookups already applied.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub result: InferenceResult,
    pub confidence: FormattedConfidence,
    pub properties: Vec<String>,
}

impl Resolution {
    pub fn resolve(result: InferenceResult, catalog: &PropertyCatalog) -> Self {
        let confidence = FormattedConfidence::from_fraction(result.confidence);
        let properties = catalog.resolve_properties(&result.class_label).to_vec();
        Self {
            result,
            confidence,
            properties,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Analyzing,
    Resolved(Resolution),
    Failed(FailureResult),
}

/// Whether a completion was applied to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

/// `F` is the platform file type, `P` the preview handle. Handles are
/// released by dropping them.
#[derive(Debug)]
pub struct Session<F, P> {
    generation: u64,
    file: Option<F>,
    preview: Option<P>,
    status: SessionStatus,
}

impl<F, P> Default for Session<F, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, P> Session<F, P> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            file: None,
            preview: None,
            status: SessionStatus::Idle,
        }
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn generation(&self) -> Generation {
        Generation(self.generation)
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&P> {
        self.preview.as_ref()
    }

    /// Whether `generation` still names the file on screen.
    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.generation
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.status, SessionStatus::Analyzing)
    }

    pub fn resolution(&self) -> Option<&Resolution> {
        match &self.status {
            SessionStatus::Resolved(resolution) => Some(resolution),
            _ => None,
        }
    }

    /// Starts a fresh session for `file`.
    ///
    /// The previous preview is released before `make_preview` runs.
    pub fn select_file(&mut self, file: F, make_preview: impl FnOnce(&F) -> P) -> Generation {
        self.release();
        self.generation += 1;
        self.preview = Some(make_preview(&file));
        self.file = Some(file);
        self.status = SessionStatus::Analyzing;
        log::debug!("Session {} started", self.generation);
        Generation(self.generation)
    }

    /// Applies the outcome of the call issued for `generation`.
    pub fn complete(
        &mut self,
        generation: Generation,
        outcome: Result<InferenceResult, FailureResult>,
        catalog: &PropertyCatalog,
    ) -> Completion {
        if !self.is_current(generation) || !self.is_analyzing() {
            log::debug!(
                "Discarding result for session {} (current {})",
                generation.0,
                self.generation
            );
            return Completion::Stale;
        }

        self.status = match outcome {
            Ok(result) => SessionStatus::Resolved(Resolution::resolve(result, catalog)),
            Err(failure) => SessionStatus::Failed(failure),
        };
        Completion::Applied
    }

    /// Returns to Idle, releasing the file and preview.
    pub fn clear(&mut self) {
        self.release();
        self.generation += 1;
        self.status = SessionStatus::Idle;
    }

    fn release(&mut self) {
        drop(self.preview.take());
        self.file = None;
    }
}
