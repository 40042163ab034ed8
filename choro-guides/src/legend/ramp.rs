use choro_common::types::{rgba_to_u8, RgbaColor};
use choro_image::RgbaImage;
use choro_scenegraph::marks::{image::SceneImageMark, mark::SceneMark};

use super::LegendLayout;

/// Sample `color` at `n` evenly spaced points of [0, 1] into an `n x 1` raster.
/// A single texel samples `t = 0`.
pub fn ramp(n: usize, color: impl Fn(f32) -> RgbaColor) -> RgbaImage {
    let mut img = RgbaImage::new(n as u32, 1);
    for i in 0..n {
        let t = if n > 1 {
            i as f32 / (n - 1) as f32
        } else {
            0.0
        };
        img.put_pixel(i as u32, 0, rgba_to_u8(&color(t)));
    }
    img
}

/// Stretch a ramp over the swatch area without smoothing
pub(crate) fn ramp_mark(image: RgbaImage, layout: &LegendLayout) -> SceneMark {
    SceneImageMark {
        name: "ramp".to_string(),
        len: 1,
        aspect: false,
        smooth: false,
        image: image.into(),
        x: layout.x0().into(),
        y: layout.margin_top.into(),
        width: layout.plot_width().into(),
        height: layout.plot_height().into(),
        ..Default::default()
    }
    .into()
}
