use crate::error::{ensure_finite, AnalysisError, Result};
use crate::linear_algebra::matrix::Matrix;

use super::curve::{Coefficients, Point};

type HashSet<K> = std::collections::hash_set::HashSet<K,nohash::BuildNoHashHasher<K>>;

// per-point residual, relative to max|y|, still counted as an exact fit of constant data
const RESIDUAL_EPS:f64 = 1e-9;

/// Power sums of a sample set, the raw material of the normal equations.
#[derive(Clone,Copy,Debug,Default,PartialEq)]
pub struct PowerSums {
    pub n:f64,
    pub sum_x:f64,
    pub sum_x2:f64,
    pub sum_x3:f64,
    pub sum_x4:f64,
    pub sum_y:f64,
    pub sum_xy:f64,
    pub sum_x2y:f64,
}

impl PowerSums {
    pub fn from_points(points:&[Point]) -> Self {
        let mut sums = Self { n: points.len() as f64, ..Self::default() };
        for &Point { x, y } in points {
            let x2 = x*x;
            sums.sum_x += x;
            sums.sum_x2 += x2;
            sums.sum_x3 += x2*x;
            sums.sum_x4 += x2*x2;
            sums.sum_y += y;
            sums.sum_xy += x*y;
            sums.sum_x2y += x2*y;
        }
        sums
    }

    // unknowns ordered (c, b, a): the constant column is all ones
    pub fn normal_matrix(&self) -> Matrix {
        Matrix::from_rows([
            [self.n,self.sum_x,self.sum_x2],
            [self.sum_x,self.sum_x2,self.sum_x3],
            [self.sum_x2,self.sum_x3,self.sum_x4],
        ])
    }

    pub fn rhs(&self) -> [f64;3] {
        [self.sum_y,self.sum_xy,self.sum_x2y]
    }
}

/// Number of distinct values, with `0.0` and `-0.0` counted as one.
pub fn distinct_count<I:IntoIterator<Item = f64>>(values:I) -> usize {
    let values = values.into_iter();
    let mut seen:HashSet<u64> = HashSet::with_capacity_and_hasher(
        values.size_hint().0, nohash::BuildNoHashHasher::default());
    for value in values {
        // exponent bits into the low end so small integers spread across buckets
        seen.insert((value + 0.0).to_bits().rotate_left(12));
    }
    seen.len()
}

pub fn mean<I:IntoIterator<Item = f64>>(values:I) -> Option<f64> {
    let (count,total) = values.into_iter().fold((0usize,0.0),|(c,t),v| (c+1,t+v));
    if count == 0 {return None}
    Some(total/count as f64)
}

/// R² of `coefficients` against `points`: `1 - residual_ss/total_ss`.
///
/// When every y is the same the total sum of squares vanishes. The result is
/// then 1.0 if the curve also passes through every point, and
/// [`AnalysisError::DegenerateVariance`] otherwise.
///
/// "The same" means the spread `max y - min y` is within one rounding step
/// of `max|y|`, so a large common offset does not hide real variation.
pub fn coefficient_of_determination(points:&[Point],coefficients:&Coefficients) -> Result<f64> {
    let y_mean = mean(points.iter().map(|p| p.y))
        .ok_or(AnalysisError::InsufficientData { required: 1, found: 0 })?;

    let mut total_ss = 0.0;
    let mut residual_ss = 0.0;
    let (mut y_min,mut y_max) = (f64::INFINITY,f64::NEG_INFINITY);
    for &Point { x, y } in points {
        total_ss += (y - y_mean).powi(2);
        residual_ss += (y - coefficients.value_at(x)).powi(2);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    let y_scale = y_min.abs().max(y_max.abs());
    if y_max - y_min <= f64::EPSILON*y_scale {
        let n = points.len() as f64;
        if residual_ss <= n*(RESIDUAL_EPS*y_scale).powi(2) {
            return Ok(1.0)
        }
        return Err(AnalysisError::DegenerateVariance { residual_ss })
    }
    Ok(1.0 - residual_ss/total_ss)
}

/// Closed interval `[min, max]` of x-values.
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct Interval {
    min:f64,
    max:f64,
}

impl Interval {
    pub fn new(a:f64,b:f64) -> Result<Self> {
        let a = ensure_finite("interval bound", a)?;
        let b = ensure_finite("interval bound", b)?;
        Ok(Self { min: a.min(b), max: a.max(b) })
    }

    /// Smallest interval holding every value, `[0, 1]` when there are none.
    pub fn spanning<I:IntoIterator<Item = f64>>(values:I) -> Self {
        let mut values = values.into_iter().filter(|v| v.is_finite());
        let Some(first) = values.next() else {
            return Self { min: 0.0, max: 1.0 }
        };
        values.fold(Self { min: first, max: first },|acc,v| Self {
            min: acc.min.min(v),
            max: acc.max.max(v),
        })
    }

    // widen each side by fraction*width
    pub fn padded(&self,fraction:f64) -> Self {
        let padding = self.width()*fraction;
        Self::new(self.min - padding, self.max + padding).unwrap_or(*self)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max)/2.0
    }

    pub fn clamp(&self,x:f64) -> f64 {
        x.max(self.min).min(self.max)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::{coefficient_of_determination, distinct_count, mean, Interval, PowerSums};
    use crate::error::AnalysisError;
    use crate::scientific_computing::curve::{Coefficients, Point};

    fn points(raw:&[(f64,f64)]) -> Vec<Point> {
        raw.iter().map(|&(x,y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_power_sums() {
        let sums = PowerSums::from_points(&points(&[(1.0,2.0),(2.0,3.0),(-1.0,1.0)]));
        assert_eq!(sums.n,3.0);
        assert_eq!(sums.sum_x,2.0);
        assert_eq!(sums.sum_x2,6.0);
        assert_eq!(sums.sum_x3,8.0);
        assert_eq!(sums.sum_x4,18.0);
        assert_eq!(sums.sum_y,6.0);
        assert_eq!(sums.sum_xy,7.0);
        assert_eq!(sums.sum_x2y,15.0);
        assert_eq!(sums.rhs(),[6.0,7.0,15.0]);
        assert_eq!(sums.normal_matrix().dimension(),(3,3));
    }

    #[test]
    fn test_distinct_count() {
        assert_eq!(distinct_count([1.0,2.0,1.0,3.0]),3);
        assert_eq!(distinct_count([0.0,-0.0]),1);
        assert_eq!(distinct_count(Vec::<f64>::new()),0);
        assert_eq!(distinct_count((0..1000).map(|i| i as f64)),1000);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean([1.0,2.0,3.0]),Some(2.0));
        assert_eq!(mean(Vec::<f64>::new()),None);
    }

    #[test]
    fn test_r_squared_exact_and_partial() {
        let pts = points(&[(0.0,0.0),(1.0,1.0),(2.0,4.0)]);
        let exact = Coefficients::new(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(coefficient_of_determination(&pts,&exact).unwrap(),1.0);

        // y = 2x - 1/3 is the least squares line here, R² = 1 - (2/3)/(26/3)
        let line = Coefficients::new(0.0, 2.0, -1.0/3.0);
        let r2 = coefficient_of_determination(&pts,&line).unwrap();
        assert_abs_diff_eq!(r2,12.0/13.0,epsilon = 1e-12);
    }

    #[test]
    fn test_r_squared_constant_y() {
        let pts = points(&[(0.0,5.0),(1.0,5.0),(2.0,5.0)]);
        let flat = Coefficients::new(0.0, 0.0, 5.0);
        assert_eq!(coefficient_of_determination(&pts,&flat),Ok(1.0));

        let off = Coefficients::new(0.0, 0.0, 4.0);
        assert_eq!(
            coefficient_of_determination(&pts,&off),
            Err(AnalysisError::DegenerateVariance { residual_ss: 3.0 })
        );

        let zeros = points(&[(0.0,0.0),(1.0,0.0),(2.0,0.0)]);
        assert_eq!(coefficient_of_determination(&zeros,&Coefficients::new(0.0, 0.0, 0.0)),Ok(1.0));
    }

    #[test]
    fn test_r_squared_large_offset_y() {
        // small scatter on top of 1e6 is still real variation
        let scatter = [0.0,0.5,-0.3,0.2,0.9,-0.4];
        let pts:Vec<Point> = scatter.iter().enumerate()
            .map(|(i,d)| Point::new(i as f64, 1e6 + d))
            .collect();
        let mean_line = Coefficients::new(0.0, 0.0, 1e6 + 0.15);
        let r2 = coefficient_of_determination(&pts,&mean_line).unwrap();
        assert_abs_diff_eq!(r2,0.0,epsilon = 1e-6);

        let off = Coefficients::new(0.0, 0.0, 1e6 + 1.15);
        let r2 = coefficient_of_determination(&pts,&off).unwrap();
        assert!(r2 < -1.0);

        let flat:Vec<Point> = (0..6).map(|i| Point::new(i as f64, 1e6)).collect();
        assert_eq!(coefficient_of_determination(&flat,&Coefficients::new(0.0, 0.0, 1e6)),Ok(1.0));
    }

    #[test]
    fn test_r_squared_empty() {
        assert!(matches!(
            coefficient_of_determination(&[],&Coefficients::new(1.0, 0.0, 0.0)),
            Err(AnalysisError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_interval() {
        let range = Interval::spanning([3.0,-1.0,2.0]);
        assert_eq!((range.min(),range.max()),(-1.0,3.0));
        assert_eq!(range.width(),4.0);
        assert_eq!(range.midpoint(),1.0);

        let padded = range.padded(0.25);
        assert_eq!((padded.min(),padded.max()),(-2.0,4.0));

        assert_eq!(range.clamp(10.0),3.0);
        assert_eq!(range.clamp(-10.0),-1.0);
        assert_eq!(range.clamp(0.5),0.5);

        let empty = Interval::spanning(Vec::<f64>::new());
        assert_eq!((empty.min(),empty.max()),(0.0,1.0));

        assert_eq!(Interval::new(2.0, 1.0).unwrap(),Interval::new(1.0, 2.0).unwrap());
        assert!(Interval::new(f64::NAN, 1.0).is_err());
    }
}
