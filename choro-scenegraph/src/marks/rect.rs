use choro_common::types::{RgbaColor, TRANSPARENT};
use choro_common::value::ScalarOrArray;
use itertools::izip;
use serde::{Deserialize, Serialize};

use super::{check_len, mark::SceneMark};
use crate::error::ChoroSceneGraphError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneRectMark {
    pub name: String,
    pub clip: bool,
    pub len: u32,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub width: ScalarOrArray<f32>,
    pub height: ScalarOrArray<f32>,
    pub fill: ScalarOrArray<RgbaColor>,
    pub stroke: ScalarOrArray<RgbaColor>,
    pub stroke_width: ScalarOrArray<f32>,
    pub corner_radius: ScalarOrArray<f32>,
    pub indices: Option<Vec<usize>>,
    pub zindex: Option<i32>,
}

impl SceneRectMark {
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn x_vec(&self) -> Vec<f32> {
        self.x.as_vec(self.len as usize, self.indices.as_ref())
    }
    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn width_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.width.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn width_vec(&self) -> Vec<f32> {
        self.width.as_vec(self.len as usize, self.indices.as_ref())
    }
    pub fn height_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.height
            .as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn fill_iter(&self) -> Box<dyn Iterator<Item = &RgbaColor> + '_> {
        self.fill.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn fill_vec(&self) -> Vec<RgbaColor> {
        self.fill.as_vec(self.len as usize, self.indices.as_ref())
    }

    /// Instance extents as `[x0, y0, x1, y1]` with negative sizes normalised
    pub fn bounds_iter(&self) -> Box<dyn Iterator<Item = [f32; 4]> + '_> {
        Box::new(
            izip!(
                self.x_iter(),
                self.y_iter(),
                self.width_iter(),
                self.height_iter()
            )
            .map(|(x, y, w, h)| {
                let (x0, x1) = if *w < 0.0 { (x + w, *x) } else { (*x, x + w) };
                let (y0, y1) = if *h < 0.0 { (y + h, *y) } else { (*y, y + h) };
                [x0, y0, x1, y1]
            }),
        )
    }

    pub fn validate(&self) -> Result<(), ChoroSceneGraphError> {
        let indices = self.indices.as_ref();
        check_len(&self.name, "x", &self.x, self.len, indices)?;
        check_len(&self.name, "y", &self.y, self.len, indices)?;
        check_len(&self.name, "width", &self.width, self.len, indices)?;
        check_len(&self.name, "height", &self.height, self.len, indices)?;
        check_len(&self.name, "fill", &self.fill, self.len, indices)?;
        check_len(&self.name, "stroke", &self.stroke, self.len, indices)?;
        check_len(&self.name, "stroke-width", &self.stroke_width, self.len, indices)?;
        check_len(&self.name, "corner-radius", &self.corner_radius, self.len, indices)
    }
}

impl Default for SceneRectMark {
    fn default() -> Self {
        Self {
            name: "rect_mark".to_string(),
            clip: true,
            len: 1,
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            width: ScalarOrArray::new_scalar(0.0),
            height: ScalarOrArray::new_scalar(0.0),
            fill: ScalarOrArray::new_scalar(TRANSPARENT),
            stroke: ScalarOrArray::new_scalar(TRANSPARENT),
            stroke_width: ScalarOrArray::new_scalar(0.0),
            corner_radius: ScalarOrArray::new_scalar(0.0),
            indices: None,
            zindex: None,
        }
    }
}

impl From<SceneRectMark> for SceneMark {
    fn from(mark: SceneRectMark) -> Self {
        SceneMark::Rect(mark)
    }
}
