use thiserror::Error;

use crate::linear_algebra::matrix::MatrixError;

/// Every failure the analysis core can report.
///
/// Errors are plain values; turning them into user-facing messages (beyond
/// the `Display` text below) is left to the caller.
#[derive(Error,Debug,Clone,PartialEq)]
pub enum AnalysisError {
    #[error("At least {required} data points are required for quadratic regression, got {found}")]
    InsufficientData{required:usize,found:usize},
    #[error("Only {distinct} distinct x-values among {total} samples, the fit is indeterminate")]
    DuplicateOrDegenerateX{distinct:usize,total:usize},
    #[error("Normal equations could not be solved: {0}")]
    DegenerateSystem(#[from] MatrixError),
    #[error("All y-values are identical but the fit leaves a residual of {residual_ss}")]
    DegenerateVariance{residual_ss:f64},
    #[error("Invalid number for {argument}: {value}")]
    InvalidInput{argument:String,value:f64},
    #[error("The curve is a straight line (a = 0) and has no critical point")]
    NoCriticalPoint,
}

pub type Result<T> = std::result::Result<T,AnalysisError>;

impl AnalysisError {
    pub(crate) fn invalid(argument:impl Into<String>,value:f64) -> Self {
        Self::InvalidInput { argument: argument.into(), value }
    }
}

// Fails with InvalidInput unless value is finite
pub(crate) fn ensure_finite(argument:&str,value:f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    }else{
        Err(AnalysisError::invalid(argument, value))
    }
}
