use choro_common::types::{RgbaColor, StrokeCap, BLACK};
use choro_common::value::ScalarOrArray;
use serde::{Deserialize, Serialize};

use super::{check_len, mark::SceneMark};
use crate::error::ChoroSceneGraphError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneRuleMark {
    pub name: String,
    pub clip: bool,
    pub len: u32,
    pub stroke_dash: Option<ScalarOrArray<Vec<f32>>>,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub x2: ScalarOrArray<f32>,
    pub y2: ScalarOrArray<f32>,
    pub stroke: ScalarOrArray<RgbaColor>,
    pub stroke_width: ScalarOrArray<f32>,
    pub stroke_cap: ScalarOrArray<StrokeCap>,
    pub indices: Option<Vec<usize>>,
    pub zindex: Option<i32>,
}

impl SceneRuleMark {
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn x_vec(&self) -> Vec<f32> {
        self.x.as_vec(self.len as usize, self.indices.as_ref())
    }
    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn x2_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x2.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn y2_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y2.as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn stroke_iter(&self) -> Box<dyn Iterator<Item = &RgbaColor> + '_> {
        self.stroke
            .as_iter(self.len as usize, self.indices.as_ref())
    }
    pub fn stroke_width_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.stroke_width
            .as_iter(self.len as usize, self.indices.as_ref())
    }

    pub fn indices_iter(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        if let Some(indices) = self.indices.as_ref() {
            Box::new(indices.iter().cloned())
        } else {
            Box::new(0..self.len as usize)
        }
    }

    pub fn validate(&self) -> Result<(), ChoroSceneGraphError> {
        let indices = self.indices.as_ref();
        check_len(&self.name, "x", &self.x, self.len, indices)?;
        check_len(&self.name, "y", &self.y, self.len, indices)?;
        check_len(&self.name, "x2", &self.x2, self.len, indices)?;
        check_len(&self.name, "y2", &self.y2, self.len, indices)?;
        check_len(&self.name, "stroke", &self.stroke, self.len, indices)?;
        check_len(&self.name, "stroke-width", &self.stroke_width, self.len, indices)?;
        check_len(&self.name, "stroke-cap", &self.stroke_cap, self.len, indices)?;
        if let Some(stroke_dash) = &self.stroke_dash {
            check_len(&self.name, "stroke-dash", stroke_dash, self.len, indices)?;
        }
        Ok(())
    }
}

impl Default for SceneRuleMark {
    fn default() -> Self {
        Self {
            name: "rule_mark".to_string(),
            clip: true,
            len: 1,
            stroke_dash: None,
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            x2: ScalarOrArray::new_scalar(0.0),
            y2: ScalarOrArray::new_scalar(0.0),
            stroke: ScalarOrArray::new_scalar(BLACK),
            stroke_width: ScalarOrArray::new_scalar(1.0),
            stroke_cap: ScalarOrArray::new_scalar(StrokeCap::Butt),
            indices: None,
            zindex: None,
        }
    }
}

impl From<SceneRuleMark> for SceneMark {
    fn from(mark: SceneRuleMark) -> Self {
        SceneMark::Rule(mark)
    }
}
