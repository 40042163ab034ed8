use choro_common::types::RgbaColor;
use choro_scales::{
    format::NumberFormat,
    numeric::{
        linear::{LinearNumericScale, LinearNumericScaleConfig},
        ContinuousNumericScale,
    },
    quantile::QuantileScale,
    quantize::QuantizeScale,
    threshold::ThresholdScale,
};
use choro_scenegraph::marks::rect::SceneRectMark;
use log::debug;

use super::{numeric_tick_values, ColorLegendConfig, LegendBranch, LegendLayout, TickFormat};
use crate::{axis::AxisTicks, error::ChoroGuidesError};

/// A color scale that sorts values into bins, one color per bin
#[derive(Debug, Clone, PartialEq)]
pub enum DiscretizingColorScale {
    Quantize(QuantizeScale<RgbaColor>),
    Quantile(QuantileScale<RgbaColor>),
    Threshold(ThresholdScale<RgbaColor>),
}

impl DiscretizingColorScale {
    /// Values separating adjacent bins
    pub fn breakpoints(&self) -> &[f32] {
        match self {
            DiscretizingColorScale::Quantize(s) => s.thresholds(),
            DiscretizingColorScale::Quantile(s) => s.quantiles(),
            DiscretizingColorScale::Threshold(s) => s.thresholds(),
        }
    }

    pub fn range(&self) -> &[RgbaColor] {
        match self {
            DiscretizingColorScale::Quantize(s) => s.range(),
            DiscretizingColorScale::Quantile(s) => s.range(),
            DiscretizingColorScale::Threshold(s) => s.range(),
        }
    }

    pub fn scale_value(&self, value: f32) -> &RgbaColor {
        match self {
            DiscretizingColorScale::Quantize(s) => s.scale_value(value),
            DiscretizingColorScale::Quantile(s) => s.scale_value(value),
            DiscretizingColorScale::Threshold(s) => s.scale_value(value),
        }
    }

    pub fn invert_extent(&self, color: &RgbaColor) -> Option<(f32, f32)> {
        match self {
            DiscretizingColorScale::Quantize(s) => s.invert_extent(color),
            DiscretizingColorScale::Quantile(s) => s.invert_extent(color),
            DiscretizingColorScale::Threshold(s) => s.invert_extent(color),
        }
    }
}

impl From<QuantizeScale<RgbaColor>> for DiscretizingColorScale {
    fn from(scale: QuantizeScale<RgbaColor>) -> Self {
        DiscretizingColorScale::Quantize(scale)
    }
}

impl From<QuantileScale<RgbaColor>> for DiscretizingColorScale {
    fn from(scale: QuantileScale<RgbaColor>) -> Self {
        DiscretizingColorScale::Quantile(scale)
    }
}

impl From<ThresholdScale<RgbaColor>> for DiscretizingColorScale {
    fn from(scale: ThresholdScale<RgbaColor>) -> Self {
        DiscretizingColorScale::Threshold(scale)
    }
}

/// One equal width swatch per color. Ticks fall on the boundaries between
/// swatches and are labelled with the breakpoint there.
pub(crate) fn make_threshold_branch(
    scale: &DiscretizingColorScale,
    config: &ColorLegendConfig,
    layout: &LegendLayout,
) -> Result<LegendBranch, ChoroGuidesError> {
    let colors = scale.range();
    let breakpoints = scale.breakpoints();

    if numeric_tick_values(config)?.is_some() {
        debug!("threshold legends always tick every breakpoint, ignoring tick values");
    }

    // Swatch i spans [x(i - 1), x(i)]
    let x = LinearNumericScale::new(&LinearNumericScaleConfig {
        domain: (-1.0, colors.len() as f32 - 1.0),
        range: (layout.x0(), layout.x1()),
        round: true,
        ..Default::default()
    });
    let edges: Vec<f32> = (0..=colors.len())
        .map(|i| x.scale_value(i as f32 - 1.0))
        .collect();

    let swatches = SceneRectMark {
        name: "swatches".to_string(),
        len: colors.len() as u32,
        x: edges[..colors.len()].to_vec().into(),
        y: layout.margin_top.into(),
        width: edges.windows(2).map(|w| w[1] - w[0]).collect::<Vec<_>>().into(),
        height: layout.plot_height().into(),
        fill: colors.to_vec().into(),
        ..Default::default()
    };

    let labels = match &config.tick_format {
        Some(TickFormat::Function(f)) => breakpoints.iter().map(|b| f(*b)).collect(),
        Some(TickFormat::Specifier(specifier)) => {
            let format = NumberFormat::try_new(specifier)?;
            breakpoints.iter().map(|b| format.format(*b)).collect()
        }
        // Shortest form within f32 precision
        Some(TickFormat::Category(_)) | None => {
            let format = NumberFormat::try_new(".7")?;
            breakpoints.iter().map(|b| format.format(*b)).collect()
        }
    };
    let positions = (0..breakpoints.len())
        .map(|i| x.scale_value(i as f32))
        .collect();

    Ok(LegendBranch {
        swatches: swatches.into(),
        ticks: AxisTicks::new(positions, labels),
        extend_ticks: true,
    })
}
