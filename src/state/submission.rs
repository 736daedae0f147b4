//! Submission state machine for the applicant form
//!
//! `Editing` → `Submitting` → `Success` | `Failed` → `Editing`.
//! At most one request is in flight. A response is applied only while the
//! controller is still `Submitting` for the same [`SubmissionId`]; anything
//! else is a stale response and is dropped.

use super::forms::{FieldId, Form, Preset, PredictionForm};
use crate::constraints::ConstraintTable;
use crate::predictor::{
    PredictionError, PredictionRequest, PredictionResult, SubmissionId, ValidationError,
};
use thiserror::Error;
use tracing::debug;

/// Current phase of the form
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionPhase {
    /// Accepting edits; carries the last local validation failure, if any
    Editing { error: Option<ValidationError> },
    Submitting(SubmissionId),
    Success(PredictionResult),
    Failed(PredictionError),
}

impl Default for SubmissionPhase {
    fn default() -> Self {
        Self::Editing { error: None }
    }
}

/// Why a submit action was not turned into a request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitRejected {
    #[error("A prediction is already in progress")]
    Busy,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// A request the caller must now send
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: SubmissionId,
    pub request: PredictionRequest,
}

/// Owns the form and drives it through the submission phases
#[derive(Debug, Clone)]
pub struct PredictionController {
    table: &'static ConstraintTable,
    form: PredictionForm,
    phase: SubmissionPhase,
    in_flight: Option<SubmissionId>,
}

impl PredictionController {
    pub fn new(table: &'static ConstraintTable) -> Self {
        Self {
            table,
            form: PredictionForm::new(table),
            phase: SubmissionPhase::default(),
            in_flight: None,
        }
    }

    pub fn table(&self) -> &'static ConstraintTable {
        self.table
    }

    pub fn form(&self) -> &PredictionForm {
        &self.form
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Submitting(_))
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.in_flight.is_none()
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        match &self.phase {
            SubmissionPhase::Success(result) => Some(result),
            _ => None,
        }
    }

    /// Message to show inline: validation failure or submission failure
    pub fn error_message(&self) -> Option<String> {
        match &self.phase {
            SubmissionPhase::Editing { error: Some(err) } => Some(err.to_string()),
            SubmissionPhase::Failed(err) => Some(err.to_string()),
            _ => None,
        }
    }

    /// Any edit re-enters `Editing` and clears the shown outcome.
    /// Editing while `Submitting` turns the pending response stale.
    fn mark_edited(&mut self, changed: bool) -> bool {
        if changed {
            if let SubmissionPhase::Submitting(id) = &self.phase {
                debug!(
                    submission = %id,
                    "Form edited while submitting, response will be discarded"
                );
            }
            self.phase = SubmissionPhase::default();
        }
        changed
    }

    // Navigation does not count as an edit

    pub fn next_field(&mut self) {
        self.form.next_field();
    }

    pub fn prev_field(&mut self) {
        self.form.prev_field();
    }

    pub fn focus(&mut self, id: FieldId) {
        if let Some(index) = FieldId::ALL.iter().position(|f| *f == id) {
            self.form.set_active_field(index);
        }
    }

    pub fn input_char(&mut self, c: char) -> bool {
        let changed = self.form.input_char(c, self.table);
        self.mark_edited(changed)
    }

    pub fn backspace(&mut self) -> bool {
        let changed = self.form.backspace(self.table);
        self.mark_edited(changed)
    }

    pub fn cycle(&mut self, forward: bool) -> bool {
        let changed = self.form.cycle(forward, self.table);
        self.mark_edited(changed)
    }

    /// Select a company from any phase; downstream fields reset
    #[cfg(test)]
    pub fn select_company(&mut self, company: &str) -> bool {
        let changed = self.form.set_company(company, self.table);
        self.mark_edited(changed)
    }

    #[cfg(test)]
    pub fn select_degree(&mut self, degree: &str) -> bool {
        let changed = self.form.set_degree(degree);
        self.mark_edited(changed)
    }

    /// Load a preset; always clears the shown outcome
    pub fn load_preset(&mut self, preset: &Preset) {
        self.form.load_preset(preset, self.table);
        self.mark_edited(true);
    }

    /// Leave `Success`/`Failed` without touching the fields
    pub fn dismiss_outcome(&mut self) {
        if matches!(
            self.phase,
            SubmissionPhase::Success(_) | SubmissionPhase::Failed(_)
        ) {
            self.phase = SubmissionPhase::default();
        }
    }

    /// Validate and, on success, move to `Submitting`.
    ///
    /// A resubmit from `Success`/`Failed` first re-enters `Editing`. Rejected
    /// while a previous request has not settled.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitRejected> {
        if !self.can_submit() {
            return Err(SubmitRejected::Busy);
        }

        self.dismiss_outcome();

        let request = match self.form.validate() {
            Ok(request) => request,
            Err(err) => {
                self.focus(self.invalid_field(&err));
                self.phase = SubmissionPhase::Editing {
                    error: Some(err.clone()),
                };
                return Err(err.into());
            }
        };

        let id = SubmissionId::new();
        self.in_flight = Some(id);
        self.phase = SubmissionPhase::Submitting(id);
        debug!(submission = %id, "Submission started");

        Ok(Submission { id, request })
    }

    fn invalid_field(&self, err: &ValidationError) -> FieldId {
        match err {
            ValidationError::MissingField(label) => FieldId::ALL
                .into_iter()
                .find(|id| self.form.field(*id).is_some_and(|f| f.label == *label))
                .unwrap_or(FieldId::Company),
            ValidationError::InvalidExperience | ValidationError::NegativeExperience => {
                FieldId::Experience
            }
            ValidationError::NegativeSkills | ValidationError::FractionalSkills => FieldId::Skills,
        }
    }

    /// Record the outcome of a request. Returns whether it was applied.
    pub fn complete(
        &mut self,
        id: SubmissionId,
        outcome: Result<PredictionResult, PredictionError>,
    ) -> bool {
        if self.in_flight == Some(id) {
            self.in_flight = None;
        }

        if self.phase != SubmissionPhase::Submitting(id) {
            debug!(submission = %id, "Discarding stale prediction response");
            return false;
        }

        self.phase = match outcome {
            Ok(result) => SubmissionPhase::Success(result),
            Err(err) => SubmissionPhase::Failed(err),
        };
        true
    }
}
