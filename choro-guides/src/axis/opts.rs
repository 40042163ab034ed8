use choro_common::types::{RgbaColor, BLACK};

/// Layout of a bottom oriented axis, in the axis group's coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct AxisConfig {
    /// Length of tick lines below the axis
    pub tick_size: f32,
    /// Gap between the end of a tick line and its label
    pub tick_padding: f32,
    /// Offset added to tick positions so one pixel lines land on whole pixels
    pub tick_offset: f32,
    /// When set, tick lines start at this y instead of 0 and cross the swatches
    pub tick_extent: Option<f32>,
    pub font_size: f32,
    pub color: RgbaColor,
    pub title: String,
    pub title_position: [f32; 2],
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            tick_size: 6.0,
            tick_padding: 3.0,
            tick_offset: 0.5,
            tick_extent: None,
            font_size: 10.0,
            color: BLACK,
            title: String::new(),
            title_position: [0.0, -6.0],
        }
    }
}
