use crate::{array, error::ChoroScaleError};

use super::ContinuousNumericScale;

/// Linear interpolation across matching lists of ascending domain stops and
/// range stops. Values outside the outer stops extrapolate from the outer segment.
#[derive(Clone, Debug, PartialEq)]
pub struct PiecewiseLinearScale {
    domain: Vec<f32>,
    range: Vec<f32>,
    clamp: bool,
    round: bool,
}

impl PiecewiseLinearScale {
    pub fn try_new(domain: Vec<f32>, range: Vec<f32>) -> Result<Self, ChoroScaleError> {
        if domain.is_empty() {
            return Err(ChoroScaleError::EmptyDomain);
        }
        if domain.len() != range.len() {
            return Err(ChoroScaleError::DomainRangeMismatch {
                domain_len: domain.len(),
                range_len: range.len(),
            });
        }
        if domain.windows(2).any(|w| w[0] > w[1]) {
            return Err(ChoroScaleError::DomainNotAscending(domain));
        }
        Ok(Self {
            domain,
            range,
            clamp: false,
            round: false,
        })
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    pub fn domain_stops(&self) -> &[f32] {
        &self.domain
    }

    pub fn range_stops(&self) -> &[f32] {
        &self.range
    }

    fn interpolate(&self, value: f32) -> f32 {
        let n = self.domain.len();
        if n == 1 || value.is_nan() {
            return self.range[0];
        }

        let value = if self.clamp {
            value.clamp(self.domain[0], self.domain[n - 1])
        } else {
            value
        };

        // Segment index in 0..n-1 so the outer segments extrapolate
        let i = array::bisect_right(&self.domain[1..n - 1], value);
        let (d0, d1) = (self.domain[i], self.domain[i + 1]);
        let (r0, r1) = (self.range[i], self.range[i + 1]);
        if d0 == d1 {
            return r0;
        }
        let t = (value - d0) / (d1 - d0);
        r0 * (1.0 - t) + r1 * t
    }
}

impl ContinuousNumericScale for PiecewiseLinearScale {
    fn domain(&self) -> (f32, f32) {
        (self.domain[0], self.domain[self.domain.len() - 1])
    }

    fn range(&self) -> (f32, f32) {
        (self.range[0], self.range[self.range.len() - 1])
    }

    fn scale_value(&self, value: f32) -> f32 {
        let v = self.interpolate(value);
        if self.round {
            v.round()
        } else {
            v
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_two_stops_is_linear() {
        let scale = PiecewiseLinearScale::try_new(vec![0.0, 10.0], vec![100.0, 200.0]).unwrap();
        assert_approx_eq!(f32, scale.scale_value(5.0), 150.0);
        assert_approx_eq!(f32, scale.scale_value(-5.0), 50.0);
        assert_approx_eq!(f32, scale.scale_value(15.0), 250.0);
    }

    #[test]
    fn test_uneven_segments() {
        let scale =
            PiecewiseLinearScale::try_new(vec![0.0, 10.0, 100.0], vec![0.0, 50.0, 100.0]).unwrap();
        assert_approx_eq!(f32, scale.scale_value(5.0), 25.0);
        assert_approx_eq!(f32, scale.scale_value(10.0), 50.0);
        assert_approx_eq!(f32, scale.scale_value(55.0), 75.0);
        assert_eq!(scale.domain(), (0.0, 100.0));
        assert_eq!(scale.range(), (0.0, 100.0));
    }

    #[test]
    fn test_clamp_and_round() {
        let scale = PiecewiseLinearScale::try_new(vec![0.0, 3.0], vec![0.0, 10.0])
            .unwrap()
            .with_clamp(true)
            .with_round(true);
        assert_eq!(scale.scale(&[-1.0, 1.0, 2.0, 4.0]), vec![0.0, 3.0, 7.0, 10.0]);
    }

    #[test]
    fn test_single_stop() {
        let scale = PiecewiseLinearScale::try_new(vec![5.0], vec![42.0]).unwrap();
        assert_eq!(scale.scale_value(-100.0), 42.0);
        assert_eq!(scale.scale_value(100.0), 42.0);
    }

    #[test]
    fn test_invalid_stops() {
        assert_eq!(
            PiecewiseLinearScale::try_new(vec![], vec![]),
            Err(ChoroScaleError::EmptyDomain)
        );
        assert_eq!(
            PiecewiseLinearScale::try_new(vec![0.0, 1.0], vec![0.0]),
            Err(ChoroScaleError::DomainRangeMismatch {
                domain_len: 2,
                range_len: 1
            })
        );
        assert!(matches!(
            PiecewiseLinearScale::try_new(vec![1.0, 0.0], vec![0.0, 1.0]),
            Err(ChoroScaleError::DomainNotAscending(_))
        ));
    }

    #[test]
    fn test_ticks_span_domain() {
        let scale =
            PiecewiseLinearScale::try_new(vec![24.0, 45.0, 66.0], vec![0.0, 130.0, 260.0]).unwrap();
        assert_eq!(scale.ticks(Some(4.0625)), vec![30.0, 40.0, 50.0, 60.0]);
    }
}
