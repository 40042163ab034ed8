//! Color legends for choropleth maps.
//!
//! A legend is a fixed size drawing made of a swatch layer (a sampled
//! gradient image or a row of rectangles) above a bottom axis with a bold
//! title. Which layer is drawn depends on the kind of color scale, given
//! explicitly as a [`LegendColor`].
mod continuous;
mod ordinal;
pub mod ramp;
mod sequential;
mod threshold;

use std::fmt;
use std::sync::Arc;

use choro_common::types::RgbaColor;
use choro_scales::{
    color::continuous::ContinuousColorScale, error::ChoroScaleError, format::NumberFormat,
    ordinal::OrdinalScale, sequential::SequentialColorScale,
};
use choro_scenegraph::{
    marks::{group::SceneGroup, mark::SceneMark},
    scene_graph::SceneGraph,
};
use log::debug;

pub use threshold::DiscretizingColorScale;

use crate::{
    axis::{bottom::make_bottom_axis, opts::AxisConfig, AxisTicks},
    error::ChoroGuidesError,
};

/// The color scale a legend describes
#[derive(Debug, Clone)]
pub enum LegendColor {
    /// Numeric stops mapped to color stops, drawn as a gradient
    Continuous(ContinuousColorScale),
    /// An interpolator over a continuous domain, drawn as a gradient
    Sequential(SequentialColorScale),
    /// Discrete bins, drawn as one swatch per color with breakpoint ticks
    Threshold(DiscretizingColorScale),
    /// Categories, drawn as one band per category
    Ordinal(OrdinalScale<String, RgbaColor>),
}

impl LegendColor {
    pub fn kind(&self) -> &'static str {
        match self {
            LegendColor::Continuous(_) => "continuous",
            LegendColor::Sequential(_) => "sequential",
            LegendColor::Threshold(_) => "threshold",
            LegendColor::Ordinal(_) => "ordinal",
        }
    }
}

/// Formatting of tick labels.
///
/// `Specifier` and `Function` label numeric ticks and are ignored by ordinal
/// legends. `Category` labels ordinal ticks and leaves numeric legends on
/// their default format.
#[derive(Clone)]
pub enum TickFormat {
    /// A number format specifier such as `",.0f"` or `".0%"`
    Specifier(String),
    Function(Arc<dyn Fn(f32) -> String + Send + Sync>),
    Category(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl TickFormat {
    pub fn function(f: impl Fn(f32) -> String + Send + Sync + 'static) -> Self {
        Self::Function(Arc::new(f))
    }

    pub fn category(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self::Category(Arc::new(f))
    }

    fn specifier(&self) -> Option<&str> {
        match self {
            TickFormat::Specifier(s) => Some(s),
            TickFormat::Function(_) | TickFormat::Category(_) => None,
        }
    }
}

impl fmt::Debug for TickFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickFormat::Specifier(s) => f.debug_tuple("Specifier").field(s).finish(),
            TickFormat::Function(_) => f.write_str("Function(..)"),
            TickFormat::Category(_) => f.write_str("Category(..)"),
        }
    }
}

impl From<&str> for TickFormat {
    fn from(specifier: &str) -> Self {
        TickFormat::Specifier(specifier.to_string())
    }
}

/// Explicit tick values, replacing the generated ones
#[derive(Debug, Clone, PartialEq)]
pub enum TickValues {
    Numbers(Vec<f32>),
    Categories(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct ColorLegendConfig {
    pub title: String,
    pub tick_size: f32,
    pub width: f32,
    /// Defaults to `44 + tick_size`
    pub height: Option<f32>,
    pub margin_top: f32,
    pub margin_right: f32,
    /// Defaults to `16 + tick_size`
    pub margin_bottom: Option<f32>,
    pub margin_left: f32,
    /// Approximate tick count, defaults to `width / 64`
    pub ticks: Option<f32>,
    pub tick_format: Option<TickFormat>,
    pub tick_values: Option<TickValues>,
}

impl Default for ColorLegendConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tick_size: 6.0,
            width: 320.0,
            height: None,
            margin_top: 18.0,
            margin_right: 0.0,
            margin_bottom: None,
            margin_left: 0.0,
            ticks: None,
            tick_format: None,
            tick_values: None,
        }
    }
}

impl ColorLegendConfig {
    /// Resolve defaults and check that the swatch area is non-empty
    pub fn layout(&self) -> Result<LegendLayout, ChoroGuidesError> {
        let layout = LegendLayout {
            width: self.width,
            height: self.height.unwrap_or(44.0 + self.tick_size),
            tick_size: self.tick_size,
            margin_top: self.margin_top,
            margin_right: self.margin_right,
            margin_bottom: self.margin_bottom.unwrap_or(16.0 + self.tick_size),
            margin_left: self.margin_left,
            ticks: self.ticks.unwrap_or(self.width / 64.0),
        };

        let positive = |v: f32| v > 0.0 && v.is_finite();
        if !positive(layout.width)
            || !positive(layout.height)
            || !positive(layout.plot_width())
            || !positive(layout.plot_height())
        {
            return Err(ChoroGuidesError::InvalidDimensions {
                width: layout.width,
                height: layout.height,
                margin_top: layout.margin_top,
                margin_right: layout.margin_right,
                margin_bottom: layout.margin_bottom,
                margin_left: layout.margin_left,
            });
        }
        Ok(layout)
    }
}

/// Legend options with every default resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendLayout {
    pub width: f32,
    pub height: f32,
    pub tick_size: f32,
    pub margin_top: f32,
    pub margin_right: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub ticks: f32,
}

impl LegendLayout {
    /// Left edge of the swatches
    pub fn x0(&self) -> f32 {
        self.margin_left
    }

    /// Right edge of the swatches
    pub fn x1(&self) -> f32 {
        self.width - self.margin_right
    }

    pub fn plot_width(&self) -> f32 {
        self.x1() - self.x0()
    }

    pub fn plot_height(&self) -> f32 {
        self.height - self.margin_top - self.margin_bottom
    }
}

/// What one legend branch contributes: its swatches, where the ticks go and
/// whether tick lines cross the swatches
pub(crate) struct LegendBranch {
    pub swatches: SceneMark,
    pub ticks: AxisTicks,
    pub extend_ticks: bool,
}

/// Build a legend for `color`
pub fn make_color_legend(
    color: &LegendColor,
    config: &ColorLegendConfig,
) -> Result<SceneGraph, ChoroGuidesError> {
    let layout = config.layout()?;
    debug!(
        "building {} legend of {}x{} with about {} ticks",
        color.kind(),
        layout.width,
        layout.height,
        layout.ticks
    );

    let branch = match color {
        LegendColor::Continuous(scale) => {
            continuous::make_continuous_branch(scale, config, &layout)?
        }
        LegendColor::Sequential(scale) => {
            sequential::make_sequential_branch(scale, config, &layout)?
        }
        LegendColor::Threshold(scale) => threshold::make_threshold_branch(scale, config, &layout)?,
        LegendColor::Ordinal(scale) => ordinal::make_ordinal_branch(scale, config, &layout)?,
    };
    debug!("{} legend has {} ticks", color.kind(), branch.ticks.len());

    let axis_config = AxisConfig {
        tick_size: layout.tick_size,
        tick_extent: branch
            .extend_ticks
            .then_some(layout.margin_top + layout.margin_bottom - layout.height),
        title: config.title.clone(),
        title_position: [
            layout.margin_left,
            layout.margin_top + layout.margin_bottom - layout.height - 6.0,
        ],
        ..Default::default()
    };
    let axis = make_bottom_axis(
        &branch.ticks,
        [0.0, layout.height - layout.margin_bottom],
        &axis_config,
    );

    let legend = SceneGroup {
        name: "legend".to_string(),
        marks: vec![branch.swatches, axis.into()],
        ..Default::default()
    };

    Ok(SceneGraph {
        marks: vec![legend.into()],
        width: layout.width,
        height: layout.height,
        origin: [0.0, 0.0],
    })
}

/// Numeric tick values from the config, or None when none were given
pub(crate) fn numeric_tick_values(
    config: &ColorLegendConfig,
) -> Result<Option<Vec<f32>>, ChoroGuidesError> {
    match &config.tick_values {
        None => Ok(None),
        Some(TickValues::Numbers(values)) => Ok(Some(values.clone())),
        Some(TickValues::Categories(values)) => Err(ChoroGuidesError::InvalidTickValues(format!(
            "expected numbers for a numeric legend, got categories {values:?}"
        ))),
    }
}

/// Format numeric tick labels: a function wins, otherwise `default_format`
/// builds a formatter from the optional specifier
pub(crate) fn format_numeric_ticks(
    values: &[f32],
    tick_format: Option<&TickFormat>,
    default_format: impl FnOnce(Option<&str>) -> Result<NumberFormat, ChoroScaleError>,
) -> Result<Vec<String>, ChoroGuidesError> {
    if let Some(TickFormat::Function(f)) = tick_format {
        return Ok(values.iter().map(|v| f(*v)).collect());
    }
    let format = default_format(tick_format.and_then(TickFormat::specifier))?;
    Ok(values.iter().map(|v| format.format(*v)).collect())
}
