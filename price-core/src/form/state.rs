use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::calculations::{Estimator, EstimatorError};
use crate::form::ValidationError;
use crate::models::{
    EstimatedPrice, Field, ParseConditionError, Phase, PropertyFeatures, PropertyInput,
    UnknownFieldError,
};

/// How long a submit shows "Analyzing..." before the estimate appears.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_secs(2);

/// Errors raised by form operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),

    #[error(transparent)]
    Condition(#[from] ParseConditionError),

    /// Submit was refused; the phase did not change.
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<ValidationError>),

    /// Submit while a previous submit is still waiting.
    #[error("an estimate is already in progress")]
    AlreadySubmitting,

    /// Reset while a submit is waiting; the pending estimate still lands.
    #[error("cannot reset while an estimate is in progress")]
    ResetWhileSubmitting,

    #[error(transparent)]
    Estimate(#[from] EstimatorError),
}

/// A finished estimate together with the record it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub price: EstimatedPrice,
    pub features: PropertyFeatures,
}

/// Ticket for a submit that is waiting out its delay.
///
/// Holds the record as it was when submit was pressed. Hand it back to
/// [`PriceForm::complete_submit`] once the delay has elapsed.
#[derive(Debug)]
pub struct PendingEstimate {
    cycle: u64,
    features: PropertyFeatures,
}

impl PendingEstimate {
    pub fn features(&self) -> &PropertyFeatures {
        &self.features
    }
}

/// State of the property form: the record being edited, the current phase
/// and the last estimate.
#[derive(Debug, Clone, Default)]
pub struct PriceForm {
    input: PropertyInput,
    phase: Phase,
    prediction: Option<Prediction>,
    // Bumped on reset so a submit from before the reset cannot land after it.
    cycle: u64,
    estimator: Estimator,
}

impl PriceForm {
    pub fn new(estimator: Estimator) -> Self {
        Self {
            estimator,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &PropertyInput {
        &self.input
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        self.prediction.as_ref()
    }

    /// Whether the result panel and the reset button are shown.
    ///
    /// Stays true while a resubmit is in flight, so the previous estimate
    /// remains on screen until the new one replaces it.
    pub fn result_visible(&self) -> bool {
        self.prediction.is_some()
    }

    /// Whether the reset button is offered: a result is shown and no
    /// resubmit is pending.
    pub fn reset_available(&self) -> bool {
        self.result_visible() && !self.phase.is_submitting()
    }

    /// Overwrites one field. Text is stored as typed; nothing is validated
    /// until submit.
    pub fn update_field(
        &mut self,
        field: Field,
        value: &str,
    ) -> Result<(), FormError> {
        self.input.set(field, value)?;
        debug!(field = field.as_str(), value, "field updated");
        Ok(())
    }

    /// [`update_field`](Self::update_field) addressed by input name,
    /// e.g. `"squareFootage"`.
    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: &str,
    ) -> Result<(), FormError> {
        let field = Field::parse(name)?;
        self.update_field(field, value)
    }

    /// Validates the record and enters [`Phase::Submitting`].
    ///
    /// On failure the phase is left unchanged.
    ///
    /// # Errors
    ///
    /// * [`FormError::AlreadySubmitting`] while a previous submit is pending.
    /// * [`FormError::Invalid`] listing every failed constraint.
    pub fn begin_submit(&mut self) -> Result<PendingEstimate, FormError> {
        if self.phase.is_submitting() {
            warn!("submit ignored; an estimate is already in progress");
            return Err(FormError::AlreadySubmitting);
        }

        let features = self.input.validate().map_err(|errors| {
            warn!(count = errors.len(), "submit blocked by validation");
            FormError::Invalid(errors)
        })?;

        self.phase = Phase::Submitting;
        info!(cycle = self.cycle, "submitting property for estimate");

        Ok(PendingEstimate {
            cycle: self.cycle,
            features,
        })
    }

    /// Runs the estimator for `pending` and enters [`Phase::ShowingResult`].
    ///
    /// Returns `Ok(None)` without touching the form if the form was reset
    /// after `pending` was issued.
    pub fn complete_submit(
        &mut self,
        pending: PendingEstimate,
    ) -> Result<Option<EstimatedPrice>, FormError> {
        if pending.cycle != self.cycle || !self.phase.is_submitting() {
            debug!(
                pending = pending.cycle,
                current = self.cycle,
                "discarding estimate for a form that was reset"
            );
            return Ok(None);
        }

        match self.estimator.estimate(&pending.features) {
            Ok(price) => {
                info!(%price, "estimate ready");
                self.prediction = Some(Prediction {
                    price,
                    features: pending.features,
                });
                self.phase = Phase::ShowingResult;
                Ok(Some(price))
            }
            Err(error) => {
                warn!(%error, "estimate failed");
                self.phase = if self.result_visible() {
                    Phase::ShowingResult
                } else {
                    Phase::Editing
                };
                Err(error.into())
            }
        }
    }

    /// Submits, waits out `delay`, then completes the estimate.
    ///
    /// The form is borrowed for the whole wait. UIs that need to redraw
    /// during the delay call [`begin_submit`](Self::begin_submit) and
    /// [`complete_submit`](Self::complete_submit) themselves.
    pub async fn submit(
        &mut self,
        delay: Duration,
    ) -> Result<Option<EstimatedPrice>, FormError> {
        let pending = self.begin_submit()?;
        tokio::time::sleep(delay).await;
        self.complete_submit(pending)
    }

    /// Clears every field to its default, drops the estimate and returns to
    /// [`Phase::Editing`].
    ///
    /// # Errors
    ///
    /// [`FormError::ResetWhileSubmitting`] while an estimate is pending; the
    /// delay runs to completion and the form is left untouched.
    pub fn reset(&mut self) -> Result<(), FormError> {
        if self.phase.is_submitting() {
            warn!("reset ignored; an estimate is in progress");
            return Err(FormError::ResetWhileSubmitting);
        }

        self.input = PropertyInput::default();
        self.prediction = None;
        self.phase = Phase::Editing;
        self.cycle = self.cycle.wrapping_add(1);
        info!("form reset");
        Ok(())
    }
}
