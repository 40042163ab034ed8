use std::fmt::Debug;

use crate::{array, error::ChoroScaleError};

/// A threshold scale maps continuous values to discrete values based on
/// explicit threshold boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScale<R>
where
    R: Clone + Debug + PartialEq,
{
    thresholds: Vec<f32>,
    range: Vec<R>,
    default: R,
}

impl<R> ThresholdScale<R>
where
    R: Clone + Debug + PartialEq,
{
    pub fn try_new(thresholds: Vec<f32>, range: Vec<R>, default: R) -> Result<Self, ChoroScaleError> {
        if !thresholds.windows(2).all(|w| w[0] <= w[1]) {
            return Err(ChoroScaleError::ThresholdsNotAscending(thresholds));
        }

        if range.len() != thresholds.len() + 1 {
            return Err(ChoroScaleError::ThresholdDomainMismatch {
                domain_len: thresholds.len(),
                range_len: range.len(),
            });
        }
        Ok(Self {
            thresholds,
            range,
            default,
        })
    }

    pub fn thresholds(&self) -> &[f32] {
        &self.thresholds
    }

    pub fn range(&self) -> &[R] {
        &self.range
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

    /// The domain interval that maps to `value`. The outer segments are
    /// unbounded and report infinite ends.
    pub fn invert_extent(&self, value: &R) -> Option<(f32, f32)> {
        let i = self.range.iter().position(|r| r == value)?;
        let lo = if i == 0 {
            f32::NEG_INFINITY
        } else {
            self.thresholds[i - 1]
        };
        let hi = self.thresholds.get(i).copied().unwrap_or(f32::INFINITY);
        Some((lo, hi))
    }
}
