use std::fmt::Debug;

use crate::{array, error::ChoroScaleError};

/// A quantile scale maps a sample population onto a discrete range so each
/// range value covers an equal share of the sample.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileScale<R>
where
    R: Clone + Debug + PartialEq,
{
    domain: Vec<f32>,
    range: Vec<R>,
    quantiles: Vec<f32>,
    default: R,
}

impl<R> QuantileScale<R>
where
    R: Clone + Debug + PartialEq,
{
    /// Non-finite samples are discarded
    pub fn try_new(domain: &[f32], range: Vec<R>, default: R) -> Result<Self, ChoroScaleError> {
        if range.is_empty() {
            return Err(ChoroScaleError::EmptyRange);
        }
        let domain = array::sorted_finite(domain);
        if domain.is_empty() {
            return Err(ChoroScaleError::EmptyDomain);
        }

        let n = range.len();
        let quantiles = (1..n)
            .map(|i| array::quantile_sorted(&domain, i as f32 / n as f32))
            .collect();

        Ok(Self {
            domain,
            range,
            quantiles,
            default,
        })
    }

    /// Sorted sample population
    pub fn domain(&self) -> &[f32] {
        &self.domain
    }

    pub fn range(&self) -> &[R] {
        &self.range
    }

    /// The `range.len() - 1` quantile boundaries
    pub fn quantiles(&self) -> &[f32] {
        &self.quantiles
    }

    pub fn scale_value(&self, value: f32) -> &R {
        if value.is_nan() {
            return &self.default;
        }
        &self.range[array::bisect_right(&self.quantiles, value)]
    }

    pub fn scale(&self, values: &[f32]) -> Vec<R> {
        values.iter().map(|v| self.scale_value(*v).clone()).collect()
    }

    /// The sample interval that maps to `value`
    pub fn invert_extent(&self, value: &R) -> Option<(f32, f32)> {
        let i = self.range.iter().position(|r| r == value)?;
        let lo = if i == 0 {
            self.domain[0]
        } else {
            self.quantiles[i - 1]
        };
        let hi = if i >= self.quantiles.len() {
            self.domain[self.domain.len() - 1]
        } else {
            self.quantiles[i]
        };
        Some((lo, hi))
    }
}
