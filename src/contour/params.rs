//! Contour tracing parameters.

use crate::errors::ExtractionError;
use crate::float_types::{DEFAULT_MAX_ITERATIONS, DEFAULT_STEP_SIZE, Real, tolerance};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for contour tracing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceParams {
    /// Predictor step length along the primary axis.
    pub step_size: Real,

    /// Accepted `|field - target|` after a Newton correction.
    pub tolerance: Real,

    /// Cap on Newton iterations per correction and on marching steps.
    pub max_iterations: usize,
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            step_size: DEFAULT_STEP_SIZE,
            tolerance: tolerance(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl TraceParams {
    #[must_use]
    pub const fn with_step_size(mut self, step_size: Real) -> Self {
        self.step_size = step_size;
        self
    }

    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: Real) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Reject parameters the tracer cannot march with.
    pub fn validate(&self) -> Result<(), ExtractionError> {
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(ExtractionError::InvalidParams(format!(
                "step_size must be positive and finite, got {}",
                self.step_size
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ExtractionError::InvalidParams(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(ExtractionError::InvalidParams(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
