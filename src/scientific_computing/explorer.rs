use crate::config::Settings;
use crate::error::{ensure_finite, Result};

use super::quadratic_fit::FitResult;
use super::statistics::Interval;
use super::tangent::{critical_point, TangentDescriptor};

/// Moves a tangent point along a fitted curve.
///
/// The explorer owns its fit and its position; nothing is shared between
/// explorers, so a refit means building a new one. `x0` always stays inside
/// the sample x-range widened by `Settings::explore_padding`.
#[derive(Clone,Debug)]
pub struct TangentExplorer {
    fit:FitResult,
    interval:Interval,
    current_x:f64,
    settings:Settings,
}

impl TangentExplorer {
    pub fn new(fit:FitResult,settings:Settings) -> Self {
        let interval = fit.x_range().padded(settings.explore_padding);
        Self {
            current_x:interval.midpoint(),
            fit,
            interval,
            settings,
        }
    }

    pub fn fit(&self) -> &FitResult {
        &self.fit
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn current_x(&self) -> f64 {
        self.current_x
    }

    // smallest move a stepped control should make
    pub fn step(&self) -> f64 {
        self.interval.width()/self.settings.explore_steps.max(1) as f64
    }

    pub fn span(&self) -> f64 {
        self.interval.width()*self.settings.tangent_span_fraction
    }

    pub fn current(&self) -> Result<TangentDescriptor> {
        TangentDescriptor::new(
            self.fit.coefficients(),
            self.current_x,
            self.span(),
            self.settings.precision,
        )
    }

    pub fn move_to(&mut self,x:f64) -> Result<TangentDescriptor> {
        let x = ensure_finite("x0", x)?;
        self.current_x = self.interval.clamp(x);
        self.current()
    }

    pub fn jump_to_vertex(&mut self) -> Result<TangentDescriptor> {
        let vertex_x = critical_point(self.fit.coefficients())?;
        self.move_to(vertex_x)
    }

    pub fn reset_to_center(&mut self) -> Result<TangentDescriptor> {
        self.move_to(self.interval.midpoint())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::TangentExplorer;
    use crate::config::Settings;
    use crate::error::AnalysisError;
    use crate::scientific_computing::curve::derivative;
    use crate::scientific_computing::quadratic_fit::{fit, Sample};

    fn explorer(raw:&[(f64,f64)]) -> TangentExplorer {
        let samples:Vec<Sample> = raw.iter().map(|&p| Sample::from(p)).collect();
        TangentExplorer::new(fit(&samples).unwrap(), Settings::default())
    }

    #[test]
    fn test_initial_state() {
        let explorer = explorer(&[(-2.0,4.0),(-1.0,1.0),(0.0,0.0),(1.0,1.0),(2.0,4.0)]);
        let interval = explorer.interval();
        assert_abs_diff_eq!(interval.min(),-2.4,epsilon = 1e-12);
        assert_abs_diff_eq!(interval.max(),2.4,epsilon = 1e-12);
        assert_eq!(explorer.current_x(),0.0);
        assert_abs_diff_eq!(explorer.span(),1.92,epsilon = 1e-12);
        assert_abs_diff_eq!(explorer.step(),0.048,epsilon = 1e-12);

        let tangent = explorer.current().unwrap();
        assert_abs_diff_eq!(tangent.slope(),0.0,epsilon = 1e-9);
        let [start,end] = tangent.segment();
        assert_abs_diff_eq!(end.x - start.x,explorer.span(),epsilon = 1e-12);
    }

    #[test]
    fn test_move_clamps() {
        let mut explorer = explorer(&[(-2.0,4.0),(-1.0,1.0),(0.0,0.0),(1.0,1.0),(2.0,4.0)]);
        let tangent = explorer.move_to(1.0).unwrap();
        assert_abs_diff_eq!(tangent.slope(),2.0,epsilon = 1e-9);
        assert_eq!(
            tangent.slope(),
            derivative(explorer.fit().coefficients(), 1.0).unwrap()
        );

        explorer.move_to(100.0).unwrap();
        assert_abs_diff_eq!(explorer.current_x(),2.4,epsilon = 1e-12);

        assert!(matches!(explorer.move_to(f64::NAN),Err(AnalysisError::InvalidInput { .. })));
        assert_abs_diff_eq!(explorer.current_x(),2.4,epsilon = 1e-12);

        explorer.reset_to_center().unwrap();
        assert_eq!(explorer.current_x(),0.0);
    }

    #[test]
    fn test_jump_to_vertex() {
        let mut explorer = explorer(&[(0.0,3.0),(1.0,0.0),(2.0,-1.0),(3.0,0.0),(4.0,3.0)]);
        let tangent = explorer.jump_to_vertex().unwrap();
        assert_abs_diff_eq!(explorer.current_x(),2.0,epsilon = 1e-9);
        assert_abs_diff_eq!(tangent.point().y,-1.0,epsilon = 1e-9);
        assert_abs_diff_eq!(tangent.slope(),0.0,epsilon = 1e-9);
    }

    #[test]
    fn test_jump_to_vertex_of_line() {
        let mut explorer = explorer(&[(0.0,1.0),(1.0,3.0),(2.0,5.0),(3.0,7.0)]);
        let before = explorer.current_x();
        assert_eq!(explorer.jump_to_vertex().unwrap_err(),AnalysisError::NoCriticalPoint);
        assert_eq!(explorer.current_x(),before);
    }
}
