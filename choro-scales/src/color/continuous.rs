use choro_common::types::{RgbaColor, TRANSPARENT};
use palette::{Mix, Srgba};

use crate::{array, error::ChoroScaleError};

/// A piecewise linear color scale. Ordered numeric domain stops map to color
/// stops; values between stops mix the neighbouring colors in sRGB space.
///
/// When the domain and range lengths differ, only the first
/// `min(domain.len(), range.len())` stops of each take part.
#[derive(Clone, Debug, PartialEq)]
pub struct ContinuousColorScale {
    domain: Vec<f32>,
    range: Vec<RgbaColor>,
    clamp: bool,
}

impl ContinuousColorScale {
    pub fn try_new(domain: Vec<f32>, range: Vec<RgbaColor>) -> Result<Self, ChoroScaleError> {
        if domain.iter().any(|d| !d.is_finite()) || domain.windows(2).any(|w| w[0] > w[1]) {
            return Err(ChoroScaleError::DomainNotAscending(domain));
        }
        if domain.len() != range.len() {
            log::debug!(
                "{} domain stops and {} colors, using the first {} of each",
                domain.len(),
                range.len(),
                domain.len().min(range.len())
            );
        }
        Ok(Self {
            domain,
            range,
            clamp: true,
        })
    }

    /// Stops spaced evenly across `[start, stop]`, one per color
    pub fn try_new_uniform(
        domain: (f32, f32),
        range: Vec<RgbaColor>,
    ) -> Result<Self, ChoroScaleError> {
        let domain = array::quantize_interval(domain.0, domain.1, range.len());
        Self::try_new(domain, range)
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn domain(&self) -> &[f32] {
        &self.domain
    }

    pub fn range(&self) -> &[RgbaColor] {
        &self.range
    }

    /// Number of stops that take part in interpolation
    pub fn stop_count(&self) -> usize {
        self.domain.len().min(self.range.len())
    }

    pub fn scale_value(&self, value: f32) -> RgbaColor {
        let n = self.stop_count();
        if n == 0 {
            return TRANSPARENT;
        }
        if n == 1 || value.is_nan() {
            return self.range[0];
        }

        let domain = &self.domain[..n];
        let value = if self.clamp {
            value.clamp(domain[0], domain[n - 1])
        } else {
            value
        };
        let i = array::bisect_right(&domain[1..n - 1], value);
        let (d0, d1) = (domain[i], domain[i + 1]);
        if d0 == d1 {
            return self.range[i];
        }
        let t = (value - d0) / (d1 - d0);
        let [r0, g0, b0, a0] = self.range[i];
        let [r1, g1, b1, a1] = self.range[i + 1];
        let c0 = Srgba::new(r0, g0, b0, a0);
        let c1 = Srgba::new(r1, g1, b1, a1);
        let (r, g, b, a) = c0.mix(c1, t).into_components();
        [r, g, b, a]
    }

    pub fn scale(&self, values: &[f32]) -> Vec<RgbaColor> {
        values.iter().map(|v| self.scale_value(*v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_two_stops() {
        let scale = ContinuousColorScale::try_new(vec![0.0, 10.0], vec![BLACK, WHITE]).unwrap();
        assert_approx_eq!(f32, scale.scale_value(2.5)[0], 0.25);
        assert_eq!(scale.scale_value(-5.0), BLACK);
        assert_eq!(scale.scale_value(50.0), WHITE);
    }

    #[test]
    fn test_hits_each_stop() {
        let scale =
            ContinuousColorScale::try_new(vec![0.0, 1.0, 4.0], vec![BLACK, RED, WHITE]).unwrap();
        assert_eq!(scale.scale(&[0.0, 1.0, 4.0]), vec![BLACK, RED, WHITE]);
        let c = scale.scale_value(2.5);
        assert_approx_eq!(f32, c[0], 1.0);
        assert_approx_eq!(f32, c[1], 0.5);
    }

    #[test]
    fn test_mismatched_lengths_use_shorter() {
        let scale =
            ContinuousColorScale::try_new(vec![0.0, 1.0, 2.0], vec![BLACK, WHITE]).unwrap();
        assert_eq!(scale.stop_count(), 2);
        assert_eq!(scale.scale_value(2.0), WHITE);
    }

    #[test]
    fn test_uniform_stops() {
        let scale = ContinuousColorScale::try_new_uniform((24.0, 66.0), vec![BLACK, RED, WHITE])
            .unwrap();
        assert_eq!(scale.domain(), &[24.0, 45.0, 66.0]);
        assert_eq!(scale.scale_value(45.0), RED);
    }

    #[test]
    fn test_degenerate() {
        let empty = ContinuousColorScale::try_new(vec![], vec![]).unwrap();
        assert_eq!(empty.scale_value(1.0), [0.0, 0.0, 0.0, 0.0]);

        let single = ContinuousColorScale::try_new(vec![5.0], vec![RED]).unwrap();
        assert_eq!(single.scale_value(-100.0), RED);

        assert!(ContinuousColorScale::try_new(vec![2.0, 1.0], vec![BLACK, WHITE]).is_err());
    }
}
