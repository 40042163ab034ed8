//! Number formatting with a subset of the d3-format specifier language.
//!
//! ```text
//! [[fill]align][sign][symbol][0][width][,][.precision][type]
//! ```
//!
//! Supported types are `f` (fixed point), `d` (rounded integer), `e`
//! (exponent), `%` (percentage), `s` (SI prefix with significant digits),
//! `r` (significant digits in decimal notation) and none (shortest form up
//! to 12 significant digits with trailing zeros trimmed).
//!
//! ```
//! use choro_scales::format::NumberFormat;
//!
//! let format = NumberFormat::try_new(",.2f").unwrap();
//! assert_eq!(format.format(1234.5), "1,234.50");
//! ```
mod tick;

pub use tick::{precision_fixed, precision_prefix, precision_round, tick_format};

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ChoroScaleError;

const PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

fn specifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:(.)?([<>=^]))?([+\-( ])?([$#])?(0)?(\d+)?(,)?(\.\d+)?([A-Za-z%])?$")
            .unwrap_or_else(|e| panic!("invalid specifier pattern: {e}"))
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
    /// Padding goes between the sign and the digits
    SignAware,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatType {
    Fixed,
    Decimal,
    Exponent,
    Percent,
    SiPrefix,
    Significant,
    /// No type given, shortest form with trailing zeros trimmed
    Default,
}

/// A parsed format specifier
#[derive(Clone, Debug, PartialEq)]
pub struct FormatSpecifier {
    pub fill: char,
    pub align: Align,
    pub sign: char,
    pub currency: bool,
    pub zero: bool,
    pub width: usize,
    pub comma: bool,
    pub precision: Option<usize>,
    pub format_type: FormatType,
}

impl FormatSpecifier {
    pub fn parse(specifier: &str) -> Result<Self, ChoroScaleError> {
        let invalid = || ChoroScaleError::InvalidFormatSpecifier(specifier.to_string());
        let caps = specifier_regex().captures(specifier).ok_or_else(invalid)?;

        let format_type = match caps.get(9).map(|m| m.as_str()) {
            None => FormatType::Default,
            Some("f") => FormatType::Fixed,
            Some("d") => FormatType::Decimal,
            Some("e") => FormatType::Exponent,
            Some("%") => FormatType::Percent,
            Some("s") => FormatType::SiPrefix,
            Some("r") => FormatType::Significant,
            Some(_) => return Err(invalid()),
        };

        let mut fill = caps
            .get(1)
            .and_then(|m| m.as_str().chars().next())
            .unwrap_or(' ');
        let mut align = match caps.get(2).map(|m| m.as_str()) {
            Some("<") => Align::Left,
            Some("^") => Align::Center,
            Some("=") => Align::SignAware,
            _ => Align::Right,
        };
        let mut zero = caps.get(5).is_some();
        if zero || (fill == '0' && align == Align::SignAware) {
            zero = true;
            fill = '0';
            align = Align::SignAware;
        }

        let width = match caps.get(6) {
            Some(m) => m.as_str().parse().map_err(|_| invalid())?,
            None => 0,
        };
        let precision = match caps.get(8) {
            Some(m) => Some(m.as_str()[1..].parse().map_err(|_| invalid())?),
            None => None,
        };

        Ok(Self {
            fill,
            align,
            sign: caps
                .get(3)
                .and_then(|m| m.as_str().chars().next())
                .unwrap_or('-'),
            currency: caps.get(4).map(|m| m.as_str()) == Some("$"),
            zero,
            width,
            comma: caps.get(7).is_some(),
            precision,
            format_type,
        })
    }

    /// Precision in effect once defaults and limits are applied
    pub fn resolved_precision(&self) -> usize {
        match self.format_type {
            FormatType::Decimal => 0,
            FormatType::Default => self.precision.unwrap_or(12).clamp(1, 21),
            FormatType::SiPrefix | FormatType::Significant => {
                self.precision.unwrap_or(6).clamp(1, 21)
            }
            _ => self.precision.unwrap_or(6).min(20),
        }
    }
}

/// Formats numbers according to a parsed specifier
#[derive(Clone, Debug, PartialEq)]
pub struct NumberFormat {
    spec: FormatSpecifier,
    decimal: char,
    group_delimiter: char,
    /// Fixed SI exponent (multiple of 3) for `s` formats created by `tick_format`
    si_exponent: Option<i32>,
}

impl NumberFormat {
    pub fn try_new(specifier: &str) -> Result<Self, ChoroScaleError> {
        Ok(Self::from_spec(FormatSpecifier::parse(specifier)?))
    }

    pub fn from_spec(spec: FormatSpecifier) -> Self {
        Self {
            spec,
            decimal: '.',
            group_delimiter: ',',
            si_exponent: None,
        }
    }

    /// Use the SI prefix of `value` for every formatted number
    pub fn with_fixed_prefix(mut self, value: f32) -> Self {
        let (_, exponent) = decompose(to_f64(value).abs(), None);
        self.si_exponent = Some((exponent as f32 / 3.0).floor().clamp(-8.0, 8.0) as i32 * 3);
        self
    }

    pub fn spec(&self) -> &FormatSpecifier {
        &self.spec
    }

    pub fn format(&self, value: f32) -> String {
        let spec = &self.spec;
        let x = to_f64(value);
        let precision = spec.resolved_precision();

        let mut suffix = String::new();
        let mut body = if x.is_nan() {
            "NaN".to_string()
        } else if x.is_infinite() {
            "Infinity".to_string()
        } else {
            let abs = x.abs();
            match spec.format_type {
                FormatType::Fixed => to_fixed(abs, precision),
                FormatType::Decimal => format!("{:.0}", abs.round()),
                FormatType::Percent => {
                    suffix.push('%');
                    to_fixed(abs * 100.0, precision)
                }
                FormatType::Exponent => format_exponent(abs, precision),
                FormatType::Significant => format_significant(abs, precision),
                FormatType::SiPrefix => match self.si_exponent {
                    Some(k) => {
                        suffix.push_str(prefix_symbol(k));
                        to_fixed(abs / 10f64.powi(k), precision)
                    }
                    None => {
                        let (digits, k) = format_si(abs, precision);
                        suffix.push_str(prefix_symbol(k));
                        digits
                    }
                },
                FormatType::Default => trim_insignificant(&format_general(abs, precision)),
            }
        };
        if self.decimal != '.' {
            body = body.replace('.', &self.decimal.to_string());
        }

        // A value that rounds to zero is not shown as negative
        let negative = x < 0.0
            && body.chars().any(|c| c.is_ascii_digit() && c != '0');

        let mut prefix = match (negative, spec.sign) {
            (true, '(') => "(".to_string(),
            (true, _) => "-".to_string(),
            (false, '+') => "+".to_string(),
            (false, ' ') => " ".to_string(),
            _ => String::new(),
        };
        if negative && spec.sign == '(' {
            suffix.push(')');
        }
        if spec.currency {
            prefix.push('$');
        }

        if spec.comma && !spec.zero {
            body = self.group(&body, usize::MAX);
        }

        let length = prefix.chars().count() + body.chars().count() + suffix.chars().count();
        let mut padding = if length < spec.width {
            std::iter::repeat_n(spec.fill, spec.width - length).collect::<String>()
        } else {
            String::new()
        };

        if spec.comma && spec.zero {
            let width = if padding.is_empty() {
                usize::MAX
            } else {
                spec.width.saturating_sub(suffix.chars().count())
            };
            body = self.group(&format!("{padding}{body}"), width);
            padding.clear();
        }

        match spec.align {
            Align::Left => format!("{prefix}{body}{suffix}{padding}"),
            Align::SignAware => format!("{prefix}{padding}{body}{suffix}"),
            Align::Center => {
                let half = padding.chars().count() / 2;
                let (left, right): (String, String) = (
                    padding.chars().take(half).collect(),
                    padding.chars().skip(half).collect(),
                );
                format!("{left}{prefix}{body}{suffix}{right}")
            }
            Align::Right => format!("{padding}{prefix}{body}{suffix}"),
        }
    }

    /// Groups the leading integer digits of `value`. When `width` is bounded
    /// the result keeps at most `width` characters, dropping leading padding.
    fn group(&self, value: &str, width: usize) -> String {
        let int_len = value
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(value.len());
        let (integer, rest) = value.split_at(int_len);

        let digits: Vec<char> = integer.chars().rev().collect();
        let mut grouped: Vec<char> = Vec::with_capacity(digits.len() * 4 / 3 + 1);
        for (i, chunk) in digits.chunks(3).enumerate() {
            if i > 0 {
                grouped.push(self.group_delimiter);
            }
            grouped.extend(chunk);
        }

        let max_len = width.saturating_sub(rest.chars().count());
        if grouped.len() > max_len {
            grouped.truncate(max_len);
            // A leading delimiter keeps the digit before it
            if grouped.last() == Some(&self.group_delimiter) {
                grouped.pop();
            }
        }
        grouped.reverse();
        let mut out: String = grouped.into_iter().collect();
        out.push_str(rest);
        out
    }
}

/// Shortest decimal reading of an f32, widened to f64 without binary noise
fn to_f64(value: f32) -> f64 {
    if value.is_finite() {
        value.to_string().parse().unwrap_or(value as f64)
    } else {
        value as f64
    }
}

/// Fixed point with ties rounded away from zero
fn to_fixed(x: f64, precision: usize) -> String {
    let factor = 10f64.powi(precision as i32);
    let scaled = x * factor;
    if scaled.abs() < 1e21 {
        format!("{:.precision$}", scaled.round() / factor)
    } else {
        format!("{x:.precision$}")
    }
}

/// Significant digits and decimal exponent of `x`, e.g. (1.23, Some(2)) gives ("12", 0)
fn decompose(x: f64, significant: Option<usize>) -> (String, i32) {
    let formatted = match significant {
        Some(p) => format!("{:.*e}", p.saturating_sub(1), x),
        None => format!("{x:e}"),
    };
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((&formatted, "0"));
    (mantissa.replace('.', ""), exponent.parse().unwrap_or(0))
}

fn place_decimal(digits: &str, integer_digits: i32) -> String {
    let n = digits.len() as i32;
    if integer_digits <= 0 {
        format!("0.{}{}", "0".repeat((-integer_digits) as usize), digits)
    } else if integer_digits >= n {
        format!("{}{}", digits, "0".repeat((integer_digits - n) as usize))
    } else {
        let (int, frac) = digits.split_at(integer_digits as usize);
        format!("{int}.{frac}")
    }
}

fn format_exponent(x: f64, precision: usize) -> String {
    let formatted = format!("{x:.precision$e}");
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => formatted,
    }
}

fn format_significant(x: f64, precision: usize) -> String {
    if x == 0.0 {
        return place_decimal(&"0".repeat(precision), 1);
    }
    let (digits, exponent) = decompose(x, Some(precision));
    place_decimal(&digits, exponent + 1)
}

fn format_general(x: f64, precision: usize) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    let (_, exponent) = decompose(x, Some(precision));
    if exponent < -6 || exponent >= precision as i32 {
        format_exponent(x, precision - 1)
    } else {
        format_significant(x, precision)
    }
}

fn format_si(x: f64, precision: usize) -> (String, i32) {
    if x == 0.0 {
        return (format_significant(x, precision), 0);
    }
    let (digits, exponent) = decompose(x, Some(precision));
    let k = (exponent as f32 / 3.0).floor().clamp(-8.0, 8.0) as i32 * 3;
    (place_decimal(&digits, exponent - k + 1), k)
}

fn prefix_symbol(exponent: i32) -> &'static str {
    PREFIXES[(exponent / 3 + 8).clamp(0, 16) as usize]
}

/// Removes trailing fractional zeros, and the decimal point if nothing remains
fn trim_insignificant(value: &str) -> String {
    let (number, exponent) = match value.find('e') {
        Some(i) => value.split_at(i),
        None => (value, ""),
    };
    let number = if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    };
    format!("{number}{exponent}")
}
