pub mod continuous;
pub mod scheme;

use std::fmt::Debug;

use css_color_parser::Color;
use palette::{Mix, Srgba};

use crate::error::ChoroScaleError;

/// Parse a CSS color string (`#rrggbb`, `rgb(...)`, named colors) into
/// normalised RGBA components
pub fn parse_color(color: &str) -> Result<[f32; 4], ChoroScaleError> {
    match color.trim().parse::<Color>() {
        Ok(c) => Ok([
            c.r as f32 / 255.0,
            c.g as f32 / 255.0,
            c.b as f32 / 255.0,
            c.a,
        ]),
        Err(e) => Err(ChoroScaleError::InvalidColor(format!("{color}: {e:?}"))),
    }
}

/// Hex form of a color, `#rrggbb` when opaque and `#rrggbbaa` otherwise
pub fn color_to_hex(color: &[f32; 4]) -> String {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    if a == 255 {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

/// A color function over the unit interval
pub trait ColorInterpolator: Debug + Send + Sync + 'static {
    /// Color at `t`, where values outside [0, 1] are clamped
    fn interpolate(&self, t: f32) -> [f32; 4];
}

/// Interpolates linearly in sRGB space across evenly spaced color stops
#[derive(Clone, Debug, PartialEq)]
pub struct ColorStopsInterpolator {
    colors: Vec<Srgba>,
}

impl ColorStopsInterpolator {
    pub fn new(colors: &[[f32; 4]]) -> Self {
        Self {
            colors: colors
                .iter()
                .map(|c| Srgba::new(c[0], c[1], c[2], c[3]))
                .collect(),
        }
    }

    pub fn try_from_css(colors: &[&str]) -> Result<Self, ChoroScaleError> {
        let colors = colors
            .iter()
            .map(|c| parse_color(c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(&colors))
    }

    pub fn colors(&self) -> Vec<[f32; 4]> {
        self.colors
            .iter()
            .map(|c| {
                let (r, g, b, a) = c.into_components();
                [r, g, b, a]
            })
            .collect()
    }
}

impl ColorInterpolator for ColorStopsInterpolator {
    fn interpolate(&self, t: f32) -> [f32; 4] {
        interpolate_stops(&self.colors, t)
    }
}

/// Mix the two stops surrounding `t`, transparent when there are no stops
pub(crate) fn interpolate_stops(colors: &[Srgba], t: f32) -> [f32; 4] {
    if colors.is_empty() {
        return [0.0, 0.0, 0.0, 0.0];
    }
    let t = if t.is_nan() { 0.0 } else { t };
    let scale_factor = (colors.len() - 1) as f32;
    let continuous_index = (t * scale_factor).clamp(0.0, scale_factor);
    let lower_index = continuous_index.floor() as usize;
    let upper_index = continuous_index.ceil() as usize;

    let color = if lower_index == upper_index {
        colors[lower_index]
    } else {
        let frac = continuous_index - lower_index as f32;
        colors[lower_index].mix(colors[upper_index], frac)
    };
    let (r, g, b, a) = color.into_components();
    [r, g, b, a]
}
