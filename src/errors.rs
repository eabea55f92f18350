//! Extraction errors

use crate::float_types::Real;
use thiserror::Error;

/// Everything that can go wrong while extracting a level set.
///
/// None of these are fatal to a visualization session: trace failures leave the
/// caller without a contour for one seed, and extraction errors are only raised
/// when the caller asked for strict integrity checking or passed bad parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractionError {
    /// (DegenerateGradient) Both partial derivatives vanished at a tracer step
    #[error("(DegenerateGradient) Both partial derivatives are zero at: ({x}, {y})")]
    DegenerateGradient { x: Real, y: Real },
    /// (ConvergenceExceeded) A correction or the marching loop ran out of iterations
    #[error("(ConvergenceExceeded) No convergence after {iterations} iterations")]
    ConvergenceExceeded { iterations: usize },
    /// (NonFinite) The tracer reached a non-finite coordinate or field value
    #[error("(NonFinite) Field or position became non-finite at step {step}")]
    NonFinite { step: usize },
    /// (TableIntegrityViolation) A triangle references an edge with no crossing point
    #[error(
        "(TableIntegrityViolation) Case {case_index} references edge {edge} which is not in its edge mask"
    )]
    TableIntegrityViolation { case_index: u8, edge: u8 },
    /// (CorruptCaseTable) A case's edge mask or triangle list is malformed
    #[error("(CorruptCaseTable) Case {case_index}: {detail}")]
    CorruptCaseTable { case_index: u8, detail: String },
    /// (InvalidParams) The extraction parameters were rejected
    #[error("(InvalidParams) {0}")]
    InvalidParams(String),
}
