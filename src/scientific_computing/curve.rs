use crate::error::{ensure_finite, AnalysisError, Result};

/// A point in the plane, used both for input samples and for generated
/// curve and tangent points.
#[derive(Clone,Copy,Debug,Default,PartialEq)]
pub struct Point {
    pub x:f64,
    pub y:f64,
}

impl Point {
    pub fn new(x:f64,y:f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64,f64)> for Point {
    fn from((x,y):(f64,f64)) -> Self {
        Self { x, y }
    }
}

/// `y = a·x² + b·x + c`
#[derive(Clone,Copy,Debug,Default,PartialEq)]
pub struct Coefficients {
    a:f64,
    b:f64,
    c:f64,
}

impl Coefficients {
    pub fn new(a:f64,b:f64,c:f64) -> Self {
        Self { a, b, c }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }

    // unchecked evaluation, callers validate inputs
    pub(crate) fn value_at(&self,x:f64) -> f64 {
        self.a*x*x + self.b*x + self.c
    }

    pub(crate) fn slope_at(&self,x:f64) -> f64 {
        2.0*self.a*x + self.b
    }

    pub(crate) fn ensure_finite(&self) -> Result<()> {
        ensure_finite("a", self.a)?;
        ensure_finite("b", self.b)?;
        ensure_finite("c", self.c)?;
        Ok(())
    }
}

pub fn evaluate(coefficients:&Coefficients,x:f64) -> Result<f64> {
    coefficients.ensure_finite()?;
    let x = ensure_finite("x", x)?;
    Ok(coefficients.value_at(x))
}

/// Slope of the curve at `x`, `2·a·x + b`.
pub fn derivative(coefficients:&Coefficients,x:f64) -> Result<f64> {
    coefficients.ensure_finite()?;
    let x = ensure_finite("x", x)?;
    Ok(coefficients.slope_at(x))
}

/// `count` evenly spaced points from `x_min` to `x_max`, both ends included.
///
/// A single requested point lands on `x_min`. `x_min > x_max` gives a
/// descending sequence.
pub fn sample(coefficients:&Coefficients,x_min:f64,x_max:f64,count:usize) -> Result<Vec<Point>> {
    coefficients.ensure_finite()?;
    let x_min = ensure_finite("x_min", x_min)?;
    let x_max = ensure_finite("x_max", x_max)?;
    match count {
        0 => Err(AnalysisError::invalid("count", 0.0)),
        1 => Ok(vec![Point::new(x_min, coefficients.value_at(x_min))]),
        _ => {
            let step = (x_max - x_min)/(count - 1) as f64;
            Ok((0..count)
                .map(|i| {
                    let x = x_min + i as f64*step;
                    Point::new(x, coefficients.value_at(x))
                })
                .collect())
        }
    }
}
