use std::fmt::Debug;

use crate::{array, error::ChoroScaleError};

/// A quantize scale divides a continuous domain into uniform segments, one per
/// range value.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizeScale<R>
where
    R: Clone + Debug + PartialEq,
{
    domain: (f32, f32),
    range: Vec<R>,
    thresholds: Vec<f32>,
    default: R,
}

impl<R> QuantizeScale<R>
where
    R: Clone + Debug + PartialEq,
{
    pub fn try_new(domain: (f32, f32), range: Vec<R>, default: R) -> Result<Self, ChoroScaleError> {
        if range.is_empty() {
            return Err(ChoroScaleError::EmptyRange);
        }
        if domain.1 < domain.0 {
            return Err(ChoroScaleError::DomainNotAscending(vec![domain.0, domain.1]));
        }

        let (x0, x1) = domain;
        let n = range.len() - 1;
        let thresholds = (0..n)
            .map(|i| ((i as f32 + 1.0) * x1 - (i as f32 - n as f32) * x0) / (n as f32 + 1.0))
            .collect();

        Ok(Self {
            domain,
            range,
            thresholds,
            default,
        })
    }

    pub fn domain(&self) -> (f32, f32) {
        self.domain
    }

    pub fn range(&self) -> &[R] {
        &self.range
    }

    /// The `range.len() - 1` uniformly spaced boundaries between segments
    pub fn thresholds(&self) -> &[f32] {
        &self.thresholds
    }

    pub fn default_value(&self) -> &R {
        &self.default
    }

    pub fn scale_value(&self, value: f32) -> &R {
        if value.is_nan() {
            return &self.default;
        }
        &self.range[array::bisect_right(&self.thresholds, value)]
    }

    pub fn scale(&self, values: &[f32]) -> Vec<R> {
        values.iter().map(|v| self.scale_value(*v).clone()).collect()
    }

    /// The domain interval that maps to `value`
    pub fn invert_extent(&self, value: &R) -> Option<(f32, f32)> {
        let i = self.range.iter().position(|r| r == value)?;
        let lo = if i == 0 {
            self.domain.0
        } else {
            self.thresholds[i - 1]
        };
        let hi = if i >= self.thresholds.len() {
            self.domain.1
        } else {
            self.thresholds[i]
        };
        Some((lo, hi))
    }
}
