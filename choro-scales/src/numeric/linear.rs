use crate::array;

use super::ContinuousNumericScale;

#[derive(Clone, Debug)]
pub struct LinearNumericScaleConfig {
    pub domain: (f32, f32),
    pub range: (f32, f32),
    pub clamp: bool,
    pub nice: Option<usize>,
    pub round: bool,
}

impl Default for LinearNumericScaleConfig {
    fn default() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            clamp: false,
            nice: None,
            round: false,
        }
    }
}

/// A linear scale that maps numeric input values from a domain to a range.
/// Supports clamping, rounding, domain niceing, and tick generation.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearNumericScale {
    domain_start: f32,
    domain_end: f32,
    range_start: f32,
    range_end: f32,
    clamp: bool,
    round: bool,
}

impl LinearNumericScale {
    pub fn new(config: &LinearNumericScaleConfig) -> Self {
        let this = Self {
            domain_start: config.domain.0,
            domain_end: config.domain.1,
            range_start: config.range.0,
            range_end: config.range.1,
            clamp: config.clamp,
            round: config.round,
        };

        match config.nice {
            Some(count) => this.nice(Some(count)),
            None => this,
        }
    }

    /// Extends the domain to nice round numbers for better tick selection
    pub fn nice(mut self, count: Option<usize>) -> Self {
        if self.domain_start == self.domain_end
            || self.domain_start.is_nan()
            || self.domain_end.is_nan()
        {
            return self;
        }

        let reverse = self.domain_end < self.domain_start;
        let (mut start, mut stop) = if reverse {
            (self.domain_end, self.domain_start)
        } else {
            (self.domain_start, self.domain_end)
        };

        let count = count.unwrap_or(10) as f32;
        let mut prestep = 0.0;
        for _ in 0..10 {
            let step = array::tick_increment(start, stop, count);
            if step == prestep {
                break;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = step;
        }

        if reverse {
            self.domain_start = stop;
            self.domain_end = start;
        } else {
            self.domain_start = start;
            self.domain_end = stop;
        }
        self
    }

    pub fn with_domain(mut self, domain: (f32, f32)) -> Self {
        self.domain_start = domain.0;
        self.domain_end = domain.1;
        self
    }

    pub fn with_range(mut self, range: (f32, f32)) -> Self {
        self.range_start = range.0;
        self.range_end = range.1;
        self
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    pub fn clamp(&self) -> bool {
        self.clamp
    }

    pub fn round(&self) -> bool {
        self.round
    }

    /// Maps a range value back into the domain
    pub fn invert(&self, value: f32) -> f32 {
        if self.is_degenerate() {
            return self.domain_start;
        }
        let value = if self.clamp {
            let (lo, hi) = ordered(self.range_start, self.range_end);
            value.clamp(lo, hi)
        } else {
            value
        };
        let t = (value - self.range_start) / (self.range_end - self.range_start);
        self.domain_start + t * (self.domain_end - self.domain_start)
    }

    fn is_degenerate(&self) -> bool {
        self.domain_start == self.domain_end
            || self.range_start == self.range_end
            || self.domain_start.is_nan()
            || self.domain_end.is_nan()
            || self.range_start.is_nan()
            || self.range_end.is_nan()
    }
}

impl Default for LinearNumericScale {
    fn default() -> Self {
        Self::new(&Default::default())
    }
}

impl ContinuousNumericScale for LinearNumericScale {
    fn domain(&self) -> (f32, f32) {
        (self.domain_start, self.domain_end)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_start, self.range_end)
    }

    fn scale_value(&self, value: f32) -> f32 {
        if self.is_degenerate() {
            return self.range_start;
        }

        let t = (value - self.domain_start) / (self.domain_end - self.domain_start);
        let t = if self.clamp { t.clamp(0.0, 1.0) } else { t };
        let v = self.range_start * (1.0 - t) + self.range_end * t;
        if self.round {
            v.round()
        } else {
            v
        }
    }
}

pub(crate) fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
