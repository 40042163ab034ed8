pub mod linear;
pub mod piecewise;

use crate::{error::ChoroScaleError, format::tick_format};

/// A scale from a continuous numeric domain to a continuous numeric range
pub trait ContinuousNumericScale: Clone {
    /// Extent of the domain as (first, last)
    fn domain(&self) -> (f32, f32);

    /// Extent of the range as (first, last)
    fn range(&self) -> (f32, f32);

    /// Map a single domain value into the range
    fn scale_value(&self, value: f32) -> f32;

    fn scale(&self, values: &[f32]) -> Vec<f32> {
        values.iter().map(|v| self.scale_value(*v)).collect()
    }

    /// Approximately `count` human friendly values spanning the domain
    fn ticks(&self, count: Option<f32>) -> Vec<f32> {
        let (start, stop) = self.domain();
        crate::array::ticks(start, stop, count.unwrap_or(10.0))
    }

    /// Format values with a precision suited to the tick spacing of this domain
    fn tick_format(
        &self,
        values: &[f32],
        count: Option<f32>,
        specifier: Option<&str>,
    ) -> Result<Vec<String>, ChoroScaleError> {
        let (start, stop) = self.domain();
        let format = tick_format(start, stop, count.unwrap_or(10.0), specifier)?;
        Ok(values.iter().map(|v| format.format(*v)).collect())
    }
}
