use crate::error::{ensure_finite, AnalysisError, Result};
use crate::formatting::equation::format_tangent;

use super::curve::{Coefficients, Point};

/// Endpoints of the tangent line through `(x0, y0)`, `span/2` to each side.
pub fn tangent_segment(x0:f64,y0:f64,slope:f64,span:f64) -> [Point;2] {
    let line_at = |x:f64| Point::new(x, y0 + slope*(x - x0));
    [line_at(x0 - span/2.0),line_at(x0 + span/2.0)]
}

// where 2ax + b = 0
pub fn critical_point(coefficients:&Coefficients) -> Result<f64> {
    coefficients.ensure_finite()?;
    if coefficients.a() == 0.0 {
        return Err(AnalysisError::NoCriticalPoint)
    }
    Ok(-coefficients.b()/(2.0*coefficients.a()))
}

pub fn vertex(coefficients:&Coefficients) -> Result<Point> {
    let x = critical_point(coefficients)?;
    Ok(Point::new(x, coefficients.value_at(x)))
}

/// Tangent to the curve at one x, rebuilt whenever that x moves.
#[derive(Clone,Debug,PartialEq)]
pub struct TangentDescriptor {
    point:Point,
    slope:f64,
    segment:[Point;2],
    equation:String,
}

impl TangentDescriptor {
    pub fn new(coefficients:&Coefficients,x0:f64,span:f64,precision:usize) -> Result<Self> {
        coefficients.ensure_finite()?;
        let x0 = ensure_finite("x0", x0)?;
        let span = ensure_finite("span", span)?;
        let y0 = coefficients.value_at(x0);
        let slope = coefficients.slope_at(x0);
        Ok(Self {
            point:Point::new(x0, y0),
            slope,
            segment:tangent_segment(x0, y0, slope, span),
            equation:format_tangent(x0, y0, slope, precision),
        })
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn segment(&self) -> [Point;2] {
        self.segment
    }

    pub fn equation(&self) -> &str {
        &self.equation
    }

    // inclination of the tangent against the x axis
    pub fn angle_degrees(&self) -> f64 {
        self.slope.atan().to_degrees()
    }
}
