use choro_common::types::{ImageAlign, ImageBaseline};
use choro_common::value::ScalarOrArray;
use choro_image::RgbaImage;
use serde::{Deserialize, Serialize};

use super::{check_len, mark::SceneMark};
use crate::error::ChoroSceneGraphError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneImageMark {
    pub name: String,
    pub clip: bool,
    pub len: u32,
    /// Preserve the image aspect ratio inside the placement box
    pub aspect: bool,
    /// Smooth (bilinear) rather than nearest neighbour sampling
    pub smooth: bool,
    pub image: ScalarOrArray<RgbaImage>,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub width: ScalarOrArray<f32>,
    pub height: ScalarOrArray<f32>,
    pub align: ScalarOrArray<ImageAlign>,
    pub baseline: ScalarOrArray<ImageBaseline>,
    pub indices: Option<Vec<usize>>,
    pub zindex: Option<i32>,
}

impl SceneImageMark {
    pub fn image_iter(&self) -> Box<dyn Iterator<Item = &RgbaImage> + '_> {
        self.image.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn width_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.width.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn height_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.height
            .as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn align_iter(&self) -> Box<dyn Iterator<Item = &ImageAlign> + '_> {
        self.align.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn baseline_iter(&self) -> Box<dyn Iterator<Item = &ImageBaseline> + '_> {
        self.baseline
            .as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn validate(&self) -> Result<(), ChoroSceneGraphError> {
        let indices = self.indices.as_ref();
        check_len(&self.name, "image", &self.image, self.len, indices)?;
        check_len(&self.name, "x", &self.x, self.len, indices)?;
        check_len(&self.name, "y", &self.y, self.len, indices)?;
        check_len(&self.name, "width", &self.width, self.len, indices)?;
        check_len(&self.name, "height", &self.height, self.len, indices)?;
        check_len(&self.name, "align", &self.align, self.len, indices)?;
        check_len(&self.name, "baseline", &self.baseline, self.len, indices)
    }
}

impl Default for SceneImageMark {
    fn default() -> Self {
        Self {
            name: "image_mark".to_string(),
            clip: true,
            len: 1,
            aspect: true,
            smooth: true,
            image: ScalarOrArray::new_scalar(RgbaImage::default()),
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            width: ScalarOrArray::new_scalar(0.0),
            height: ScalarOrArray::new_scalar(0.0),
            align: ScalarOrArray::new_scalar(ImageAlign::Left),
            baseline: ScalarOrArray::new_scalar(ImageBaseline::Top),
            indices: None,
            zindex: None,
        }
    }
}

impl From<SceneImageMark> for SceneMark {
    fn from(mark: SceneImageMark) -> Self {
        SceneMark::Image(mark)
    }
}
