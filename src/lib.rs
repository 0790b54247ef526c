//! Least-squares fitting of `y = a·x² + b·x + c` through a handful of
//! sample points, plus the algebra needed to explore the fitted curve:
//! evaluation, slopes, tangent lines and printable equations.
//!
//! Every function here is pure. A [`FitResult`] is a plain value owned by the
//! caller, and refitting produces a new one.
//!
//! ```
//! use quadfit::{fit, format_equation, tangent_at, Sample};
//!
//! let samples:Vec<Sample> = [(-2.0,4.0),(-1.0,1.0),(0.0,0.0),(1.0,1.0),(2.0,4.0)]
//!     .into_iter()
//!     .map(Sample::from)
//!     .collect();
//! let result = fit(&samples)?;
//! assert_eq!(format_equation(result.coefficients(), 3),"y = x²");
//!
//! let tangent = tangent_at(result.coefficients(), 1.0, 2.0)?;
//! assert_eq!(tangent.equation(),"y = 2x - 1");
//! # Ok::<(),quadfit::AnalysisError>(())
//! ```

pub mod config;
pub mod error;
pub mod formatting;
pub mod linear_algebra;
pub mod scientific_computing;

pub use config::Settings;
pub use error::{AnalysisError, Result};
pub use formatting::equation::{format_number, format_quadratic, format_tangent};
pub use scientific_computing::curve::{derivative, evaluate, Coefficients, Point};
pub use scientific_computing::explorer::TangentExplorer;
pub use scientific_computing::quadratic_fit::{fit, validate_samples, FitResult, Sample};
pub use scientific_computing::statistics::Interval;
pub use scientific_computing::tangent::{critical_point, tangent_segment, vertex, TangentDescriptor};

pub type CurvePoint = Point;

/// `count` evenly spaced points of the curve between `x_min` and `x_max`.
pub fn sample_curve(coefficients:&Coefficients,x_min:f64,x_max:f64,count:usize) -> Result<Vec<CurvePoint>> {
    scientific_computing::curve::sample(coefficients, x_min, x_max, count)
}

/// Renders `y = ax² + bx + c` with every coefficient rounded to `precision`
/// decimals, halves away from zero.
///
/// ```
/// use quadfit::{format_equation, Coefficients};
/// assert_eq!(format_equation(&Coefficients::new(-1.0, 0.125, 2.0), 2),"y = -x² + 0.13x + 2");
/// ```
pub fn format_equation(coefficients:&Coefficients,precision:usize) -> String {
    format_quadratic(coefficients, precision)
}

/// Tangent at `x0` with a segment `span` wide, equation printed at the
/// default precision.
pub fn tangent_at(coefficients:&Coefficients,x0:f64,span:f64) -> Result<TangentDescriptor> {
    TangentDescriptor::new(coefficients, x0, span, Settings::default().precision)
}
