use crate::{array, error::ChoroScaleError};

use super::{FormatSpecifier, FormatType, NumberFormat};

/// Decimal exponent of `x`, e.g. 1 for 12.5 and -2 for 0.05
fn exponent(x: f32) -> i32 {
    let x = x.abs();
    if x == 0.0 || !x.is_finite() {
        return 0;
    }
    let e = x.log10().floor();
    // log10 can land just below an exact power of ten
    if 10f32.powf(e + 1.0) <= x {
        e as i32 + 1
    } else {
        e as i32
    }
}

/// Decimal places needed to distinguish values `step` apart
pub fn precision_fixed(step: f32) -> usize {
    (-exponent(step)).max(0) as usize
}

/// Significant digits needed to distinguish values `step` apart up to `max`
pub fn precision_round(step: f32, max: f32) -> usize {
    let step = step.abs();
    let max = max.abs() - step;
    (exponent(max) - exponent(step)).max(0) as usize + 1
}

/// Decimal places needed for `step` once `value` chooses the SI prefix
pub fn precision_prefix(step: f32, value: f32) -> usize {
    let prefix = (exponent(value) as f32 / 3.0).floor().clamp(-8.0, 8.0) as i32;
    (prefix * 3 - exponent(step)).max(0) as usize
}

/// A formatter for ticks generated over `[start, stop]` with the given count.
///
/// When the specifier (default `,f`) carries no precision, one is chosen
/// from the tick step so adjacent ticks read differently.
pub fn tick_format(
    start: f32,
    stop: f32,
    count: f32,
    specifier: Option<&str>,
) -> Result<NumberFormat, ChoroScaleError> {
    let step = array::tick_step(start, stop, count);
    let mut spec = FormatSpecifier::parse(specifier.unwrap_or(",f"))?;
    let has_step = step.is_finite() && step != 0.0;

    if spec.format_type == FormatType::SiPrefix {
        let value = start.abs().max(stop.abs());
        if spec.precision.is_none() && has_step {
            spec.precision = Some(precision_prefix(step, value));
        }
        return Ok(NumberFormat::from_spec(spec).with_fixed_prefix(value));
    }

    if spec.precision.is_none() && has_step {
        spec.precision = match spec.format_type {
            FormatType::Default | FormatType::Significant => {
                Some(precision_round(step, start.abs().max(stop.abs())))
            }
            FormatType::Exponent => {
                Some(precision_round(step, start.abs().max(stop.abs())).saturating_sub(1))
            }
            FormatType::Fixed => Some(precision_fixed(step)),
            FormatType::Percent => Some(precision_fixed(step).saturating_sub(2)),
            FormatType::Decimal | FormatType::SiPrefix => None,
        };
    }
    Ok(NumberFormat::from_spec(spec))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.0, 0)]
    #[case(10.0, 0)]
    #[case(0.5, 1)]
    #[case(0.1, 1)]
    #[case(0.05, 2)]
    #[case(0.001, 3)]
    fn test_precision_fixed(#[case] step: f32, #[case] expected: usize) {
        assert_eq!(precision_fixed(step), expected);
    }

    #[test]
    fn test_precision_round() {
        assert_eq!(precision_round(0.1, 1.1), 2);
        assert_eq!(precision_round(0.01, 0.99), 2);
        assert_eq!(precision_round(0.01, 1.0), 2);
        assert_eq!(precision_round(0.01, 1.01), 3);
    }

    #[test]
    fn test_precision_prefix() {
        assert_eq!(precision_prefix(1e5, 1.3e6), 1);
        assert_eq!(precision_prefix(1e5, 1.3e7), 1);
        assert_eq!(precision_prefix(1e5, 1.3e8), 1);
        assert_eq!(precision_prefix(1e6, 1.3e6), 0);
    }

    #[test]
    fn test_tick_format_default_specifier() {
        let format = tick_format(24.0, 66.0, 4.0625, None).unwrap();
        assert_eq!(format.format(30.0), "30");
        assert_eq!(format.format(1234.0), "1,234");

        let format = tick_format(0.0, 1.0, 10.0, None).unwrap();
        assert_eq!(format.format(0.2), "0.2");
    }

    #[test]
    fn test_tick_format_percent() {
        let format = tick_format(0.0, 1.0, 10.0, Some("%")).unwrap();
        assert_eq!(format.format(0.3), "30%");

        let format = tick_format(0.0, 0.1, 10.0, Some("%")).unwrap();
        assert_eq!(format.format(0.03), "3%");

        let format = tick_format(0.0, 0.01, 10.0, Some("%")).unwrap();
        assert_eq!(format.format(0.003), "0.3%");
    }

    #[test]
    fn test_tick_format_explicit_precision_wins() {
        let format = tick_format(0.0, 1.0, 10.0, Some(".3f")).unwrap();
        assert_eq!(format.format(0.2), "0.200");
    }

    #[test]
    fn test_tick_format_si() {
        let format = tick_format(0.0, 2e6, 4.0, Some("s")).unwrap();
        assert_eq!(format.format(500_000.0), "0.5M");
        assert_eq!(format.format(2e6), "2.0M");
    }

    #[test]
    fn test_tick_format_integer_keeps_no_precision() {
        let format = tick_format(0.0, 1.0, 10.0, Some("d")).unwrap();
        assert_eq!(format.spec().precision, None);
        assert_eq!(format.format(0.6), "1");
    }
}
