use std::sync::Arc;

use crate::{
    array,
    color::ColorInterpolator,
    error::ChoroScaleError,
    format::{tick_format, NumberFormat},
};

/// How a sequential scale maps domain values onto the unit interval
#[derive(Clone, Debug, PartialEq)]
pub enum SequentialNormalizer {
    /// Linear position within `(start, stop)`
    Linear { domain: (f32, f32), clamp: bool },
    /// Rank within a sorted sample population
    Quantile { samples: Vec<f32> },
}

impl SequentialNormalizer {
    pub fn normalize(&self, value: f32) -> f32 {
        match self {
            SequentialNormalizer::Linear { domain, clamp } => {
                let (d0, d1) = *domain;
                if d0 == d1 {
                    return 0.5;
                }
                let t = (value - d0) / (d1 - d0);
                if *clamp {
                    t.clamp(0.0, 1.0)
                } else {
                    t
                }
            }
            SequentialNormalizer::Quantile { samples } => {
                let n = samples.len();
                if value.is_nan() {
                    return f32::NAN;
                } else if n < 2 {
                    return 0.5;
                }
                // Rank counts samples after the first that do not exceed the value
                let rank = array::bisect_right(&samples[1..], value);
                rank as f32 / (n - 1) as f32
            }
        }
    }
}

/// Maps a continuous domain through a color interpolator
#[derive(Clone, Debug)]
pub struct SequentialColorScale {
    normalizer: SequentialNormalizer,
    interpolator: Arc<dyn ColorInterpolator>,
}

impl SequentialColorScale {
    pub fn new_linear(domain: (f32, f32), interpolator: Arc<dyn ColorInterpolator>) -> Self {
        Self {
            normalizer: SequentialNormalizer::Linear {
                domain,
                clamp: false,
            },
            interpolator,
        }
    }

    /// Non-finite samples are discarded
    pub fn try_new_quantile(
        samples: &[f32],
        interpolator: Arc<dyn ColorInterpolator>,
    ) -> Result<Self, ChoroScaleError> {
        let samples = array::sorted_finite(samples);
        if samples.is_empty() {
            return Err(ChoroScaleError::EmptyDomain);
        }
        Ok(Self {
            normalizer: SequentialNormalizer::Quantile { samples },
            interpolator,
        })
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        if let SequentialNormalizer::Linear { clamp: c, .. } = &mut self.normalizer {
            *c = clamp;
        }
        self
    }

    pub fn normalizer(&self) -> &SequentialNormalizer {
        &self.normalizer
    }

    pub fn interpolator(&self) -> &Arc<dyn ColorInterpolator> {
        &self.interpolator
    }

    /// Extent of the domain as (first, last)
    pub fn domain(&self) -> (f32, f32) {
        match &self.normalizer {
            SequentialNormalizer::Linear { domain, .. } => *domain,
            SequentialNormalizer::Quantile { samples } => {
                (samples[0], samples[samples.len() - 1])
            }
        }
    }

    /// Unit position of `value`
    pub fn normalize(&self, value: f32) -> f32 {
        self.normalizer.normalize(value)
    }

    pub fn scale_value(&self, value: f32) -> [f32; 4] {
        self.interpolator.interpolate(self.normalize(value))
    }

    pub fn scale(&self, values: &[f32]) -> Vec<[f32; 4]> {
        values.iter().map(|v| self.scale_value(*v)).collect()
    }

    /// The p-quantile of the domain. A linear domain is treated as its two end points.
    pub fn quantile(&self, p: f32) -> f32 {
        match &self.normalizer {
            SequentialNormalizer::Linear { domain, .. } => {
                let (lo, hi) = if domain.0 <= domain.1 {
                    (domain.0, domain.1)
                } else {
                    (domain.1, domain.0)
                };
                array::quantile_sorted(&[lo, hi], p)
            }
            SequentialNormalizer::Quantile { samples } => array::quantile_sorted(samples, p),
        }
    }

    /// Native tick values. Quantile normalised scales have none.
    pub fn ticks(&self, count: Option<f32>) -> Option<Vec<f32>> {
        match &self.normalizer {
            SequentialNormalizer::Linear { domain, .. } => {
                Some(array::ticks(domain.0, domain.1, count.unwrap_or(10.0)))
            }
            SequentialNormalizer::Quantile { .. } => None,
        }
    }

    /// Native tick formatter. Quantile normalised scales have none.
    pub fn tick_format(
        &self,
        count: Option<f32>,
        specifier: Option<&str>,
    ) -> Option<Result<NumberFormat, ChoroScaleError>> {
        match &self.normalizer {
            SequentialNormalizer::Linear { domain, .. } => Some(tick_format(
                domain.0,
                domain.1,
                count.unwrap_or(10.0),
                specifier,
            )),
            SequentialNormalizer::Quantile { .. } => None,
        }
    }
}
