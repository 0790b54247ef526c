use crate::config::Settings;
use crate::error::{AnalysisError, Result};
use crate::linear_algebra::matrix::MatrixError;

use super::curve::{self, Coefficients, Point};
use super::statistics::{coefficient_of_determination, distinct_count, Interval, PowerSums};

pub type Sample = Point;

// three unknowns need at least three equations
const MIN_SAMPLES:usize = 3;

/// Outcome of one least squares fit.
///
/// The coefficients and R² are always computed from the samples stored
/// alongside them; a new sample set means a new `FitResult`.
#[derive(Clone,Debug,PartialEq)]
pub struct FitResult {
    coefficients:Coefficients,
    r_squared:f64,
    samples:Vec<Sample>,
}

impl FitResult {
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn x_range(&self) -> Interval {
        Interval::spanning(self.samples.iter().map(|s| s.x))
    }

    pub fn plot_range(&self,settings:&Settings) -> Interval {
        self.x_range().padded(settings.plot_padding)
    }

    /// The fitted curve sampled across the padded sample range.
    pub fn plot_curve(&self,settings:&Settings) -> Result<Vec<Point>> {
        let range = self.plot_range(settings);
        curve::sample(&self.coefficients, range.min(), range.max(), settings.curve_steps)
    }
}

fn ensure_finite_samples(samples:&[Sample]) -> Result<()> {
    for (i,sample) in samples.iter().enumerate() {
        if !sample.x.is_finite() {
            return Err(AnalysisError::invalid(format!("samples[{i}].x"), sample.x))
        }
        if !sample.y.is_finite() {
            return Err(AnalysisError::invalid(format!("samples[{i}].y"), sample.y))
        }
    }
    Ok(())
}

/// Strict checks for user-entered data: enough samples, all finite, and no
/// x-value entered twice.
pub fn validate_samples(samples:&[Sample]) -> Result<()> {
    if samples.len() < MIN_SAMPLES {
        return Err(AnalysisError::InsufficientData { required: MIN_SAMPLES, found: samples.len() })
    }
    ensure_finite_samples(samples)?;
    let distinct = distinct_count(samples.iter().map(|s| s.x));
    if distinct != samples.len() {
        return Err(AnalysisError::DuplicateOrDegenerateX { distinct, total: samples.len() })
    }
    Ok(())
}

/// Least squares fit of `y = a·x² + b·x + c` through `samples`.
///
/// Solves the normal equations built from the power sums of the samples.
/// Needs at least three finite samples covering at least two distinct
/// x-values; a sample set whose normal matrix is still singular (for example
/// only two distinct x-values) fails with [`AnalysisError::DegenerateSystem`].
pub fn fit(samples:&[Sample]) -> Result<FitResult> {
    if samples.len() < MIN_SAMPLES {
        return Err(AnalysisError::InsufficientData { required: MIN_SAMPLES, found: samples.len() })
    }
    ensure_finite_samples(samples)?;
    let distinct = distinct_count(samples.iter().map(|s| s.x));
    if distinct < 2 {
        return Err(AnalysisError::DuplicateOrDegenerateX { distinct, total: samples.len() })
    }

    let sums = PowerSums::from_points(samples);
    let solution = sums.normal_matrix().solve(&sums.rhs())?;
    // solution comes back as (c, b, a)
    let coefficients = match solution.as_slice() {
        &[c,b,a] => Coefficients::new(a, b, c),
        other => return Err(MatrixError::RhsLenUnmatch { row_count: 3, rhs_len: other.len() }.into()),
    };
    let r_squared = coefficient_of_determination(samples, &coefficients)?;

    Ok(FitResult {
        coefficients,
        r_squared,
        samples:samples.to_vec(),
    })
}
