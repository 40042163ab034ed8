use std::fmt::Debug;
use std::hash::Hash;

use crate::error::ChoroScaleError;
use crate::ordinal::OrdinalScale;

/// A band scale divides a continuous range into uniform bands, one per
/// element of a discrete domain.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<D: Debug + Clone + Hash + Eq> {
    domain: Vec<D>,
    ordinal_scale: OrdinalScale<D, f32>,
    range: (f32, f32),
    padding_inner: f32,
    padding_outer: f32,
    align: f32,
    round: bool,
}

impl<D: Debug + Clone + Hash + Eq> BandScale<D> {
    /// Creates a new band scale with the given domain.
    ///
    /// # Defaults
    /// - range: (0.0, 1.0)
    /// - padding_inner: 0.0
    /// - padding_outer: 0.0
    /// - align: 0.5
    /// - round: false
    pub fn try_new(domain: Vec<D>) -> Result<Self, ChoroScaleError> {
        let mut this = Self {
            ordinal_scale: OrdinalScale::try_new(&domain, &vec![f32::NAN; domain.len()], f32::NAN)?,
            domain,
            range: (0.0, 1.0),
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            round: false,
        };

        this.update_ordinal_scale()?;
        Ok(this)
    }

    fn ordered_range(&self) -> (f32, f32) {
        if self.range.1 < self.range.0 {
            (self.range.1, self.range.0)
        } else {
            (self.range.0, self.range.1)
        }
    }

    fn raw_step(&self) -> f32 {
        let (start, stop) = self.ordered_range();
        (stop - start)
            / 1.0_f32.max(bandspace(
                self.domain.len(),
                Some(self.padding_inner),
                Some(self.padding_outer),
            ))
    }

    fn update_ordinal_scale(&mut self) -> Result<(), ChoroScaleError> {
        let n = self.domain.len();
        if n == 0 {
            return Err(ChoroScaleError::EmptyDomain);
        }

        let reverse = self.range.1 < self.range.0;
        let (start, stop) = self.ordered_range();
        let step = self.step();

        let start = start + (stop - start - step * (n as f32 - self.padding_inner)) * self.align;
        let start = if self.round { start.round() } else { start };

        let range_values: Vec<f32> = (0..n).map(|i| start + step * i as f32).collect();
        let range_values = if reverse {
            range_values.into_iter().rev().collect()
        } else {
            range_values
        };

        self.ordinal_scale = OrdinalScale::try_new(&self.domain, &range_values, f32::NAN)?;
        Ok(())
    }

    /// Sets the output range as (start, stop). The range may be reversed.
    pub fn with_range(mut self, range: (f32, f32)) -> Result<Self, ChoroScaleError> {
        self.range = range;
        self.update_ordinal_scale()?;
        Ok(self)
    }

    /// Sets the ratio of each step reserved for blank space between bands
    pub fn with_padding_inner(mut self, padding: f32) -> Result<Self, ChoroScaleError> {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self.update_ordinal_scale()?;
        Ok(self)
    }

    /// Sets the blank space before the first band and after the last, in steps
    pub fn with_padding_outer(mut self, padding: f32) -> Result<Self, ChoroScaleError> {
        self.padding_outer = padding.max(0.0);
        self.update_ordinal_scale()?;
        Ok(self)
    }

    /// Sets how leftover space is distributed: 0 start, 0.5 centred, 1 end
    pub fn with_align(mut self, align: f32) -> Result<Self, ChoroScaleError> {
        self.align = align.clamp(0.0, 1.0);
        self.update_ordinal_scale()?;
        Ok(self)
    }

    /// Rounds band starts and the step to whole pixels
    pub fn with_round(mut self, round: bool) -> Result<Self, ChoroScaleError> {
        self.round = round;
        self.update_ordinal_scale()?;
        Ok(self)
    }

    pub fn domain(&self) -> &[D] {
        &self.domain
    }

    pub fn range(&self) -> (f32, f32) {
        self.range
    }

    /// Width of each band
    pub fn bandwidth(&self) -> f32 {
        let bandwidth = self.step() * (1.0 - self.padding_inner);
        if self.round {
            bandwidth.round()
        } else {
            bandwidth
        }
    }

    /// Distance between the starts of adjacent bands
    pub fn step(&self) -> f32 {
        let step = self.raw_step();
        if self.round {
            step.floor()
        } else {
            step
        }
    }

    /// Start of the band for `value`, NaN when it is not in the domain
    pub fn scale_value(&self, value: &D) -> f32 {
        *self.ordinal_scale.scale_value(value)
    }

    pub fn scale(&self, values: &[D]) -> Vec<f32> {
        self.ordinal_scale.scale(values)
    }
}

/// Number of steps needed for `count` bands with the given paddings
pub fn bandspace(count: usize, padding_inner: Option<f32>, padding_outer: Option<f32>) -> f32 {
    let padding_inner = padding_inner.unwrap_or(0.0);
    let padding_outer = padding_outer.unwrap_or(0.0);

    let count = count as f32;
    let space = count - padding_inner + padding_outer * 2.0;
    if count > 0.0 {
        if space > 0.0 {
            space
        } else {
            1.0
        }
    } else {
        0.0
    }
}
