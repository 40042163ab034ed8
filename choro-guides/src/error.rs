use choro_scales::error::ChoroScaleError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ChoroGuidesError {
    #[error("Invalid scale: {0}")]
    InvalidScale(#[from] ChoroScaleError),

    #[error(
        "Legend of {width}x{height} with margins (top {margin_top}, right {margin_right}, \
         bottom {margin_bottom}, left {margin_left}) leaves no room to draw"
    )]
    InvalidDimensions {
        width: f32,
        height: f32,
        margin_top: f32,
        margin_right: f32,
        margin_bottom: f32,
        margin_left: f32,
    },

    #[error("Invalid tick values: {0}")]
    InvalidTickValues(String),
}
