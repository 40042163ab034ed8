//! Tick generation and order statistics over `f32` sequences

const E10: f32 = 7.071_068; // sqrt(50)
const E5: f32 = 3.162_277_7; // sqrt(10)
const E2: f32 = 1.414_213_5; // sqrt(2)

/// Generate approximately `count` nicely rounded ticks within [start, stop]
pub fn ticks(start: f32, stop: f32, count: f32) -> Vec<f32> {
    if !(count > 0.0) || start.is_nan() || stop.is_nan() {
        return vec![];
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };

    if !(i2 >= i1) {
        return vec![];
    }

    let n = (i2 - i1 + 1.0) as usize;
    let value_at = |i: f32| if inc < 0.0 { i / -inc } else { i * inc };

    if reverse {
        (0..n).map(|i| value_at(i2 - i as f32)).collect()
    } else {
        (0..n).map(|i| value_at(i1 + i as f32)).collect()
    }
}

/// Returns (first index, last index, increment). A negative increment encodes
/// a fractional step as its inverse so that tick values stay exact.
fn tick_spec(start: f32, stop: f32, count: f32) -> (f32, f32, f32) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10.0_f32.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10.0_f32.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start {
            i1 += 1.0;
        }
        if i2 / inv > stop {
            i2 -= 1.0;
        }
        inc = -inv;
    } else {
        inc = 10.0_f32.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }

    (i1, i2, inc)
}

/// Tick increment in the encoded form used by `nice`: positive for whole
/// steps, the negated inverse for fractional steps.
pub fn tick_increment(start: f32, stop: f32, count: f32) -> f32 {
    if !(count > 0.0) || start.is_nan() || stop.is_nan() {
        return f32::NAN;
    }
    if start == stop {
        return f32::NEG_INFINITY;
    }
    let (_, _, inc) = tick_spec(start, stop, count);
    if inc.is_finite() && inc != 0.0 {
        inc
    } else {
        f32::NAN
    }
}

/// Signed distance between adjacent ticks
pub fn tick_step(start: f32, stop: f32, count: f32) -> f32 {
    let reverse = stop < start;
    let inc = if reverse {
        tick_increment(stop, start, count)
    } else {
        tick_increment(start, stop, count)
    };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse {
        -step
    } else {
        step
    }
}

/// `n` evenly spaced values from `a` to `b` inclusive
pub fn quantize_interval(a: f32, b: f32, n: usize) -> Vec<f32> {
    match n {
        0 => vec![],
        1 => vec![a],
        _ => (0..n)
            .map(|i| {
                let t = i as f32 / (n - 1) as f32;
                a * (1.0 - t) + b * t
            })
            .collect(),
    }
}

/// The p-quantile of values already sorted in ascending order, linearly
/// interpolating between adjacent order statistics. Returns NaN for empty input.
pub fn quantile_sorted(sorted: &[f32], p: f32) -> f32 {
    let n = sorted.len();
    if n == 0 || p.is_nan() {
        return f32::NAN;
    }
    if p <= 0.0 || n < 2 {
        return sorted[0];
    }
    if p >= 1.0 {
        return sorted[n - 1];
    }
    let i = (n - 1) as f32 * p;
    let i0 = i.floor() as usize;
    let v0 = sorted[i0];
    let v1 = sorted[(i0 + 1).min(n - 1)];
    v0 + (v1 - v0) * (i - i0 as f32)
}

/// Sorted copy of the finite values
pub fn sorted_finite(values: &[f32]) -> Vec<f32> {
    let mut sorted: Vec<f32> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f32::total_cmp);
    sorted
}

/// The p-quantile of unsorted values, ignoring non-finite entries
pub fn quantile(values: &[f32], p: f32) -> f32 {
    quantile_sorted(&sorted_finite(values), p)
}

/// Index of the first element strictly greater than `x`
pub fn bisect_right(sorted: &[f32], x: f32) -> usize {
    sorted.partition_point(|v| *v <= x)
}
