use choro_common::types::RgbaColor;
use serde::{Deserialize, Serialize};

use crate::error::ChoroSceneGraphError;
use crate::marks::mark::SceneMark;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Clip {
    #[default]
    None,
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

/// A translated container of marks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneGroup {
    pub name: String,
    pub origin: [f32; 2],
    pub clip: Clip,
    pub marks: Vec<SceneMark>,
    pub fill: Option<RgbaColor>,
    pub stroke: Option<RgbaColor>,
    pub stroke_width: Option<f32>,
    pub zindex: Option<i32>,
}

impl SceneGroup {
    /// Paths (child index sequences) of every nested group
    pub fn group_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = vec![];
        for (index, mark) in self.marks.iter().enumerate() {
            let SceneMark::Group(group) = mark else {
                continue;
            };
            paths.push(vec![index]);
            for sub_path in group.group_paths() {
                let mut path = vec![index];
                path.extend(sub_path);
                paths.push(path);
            }
        }
        paths
    }

    /// First direct child mark with the given name
    pub fn find_mark(&self, name: &str) -> Option<&SceneMark> {
        self.marks.iter().find(|m| m.name() == name)
    }

    pub fn validate(&self) -> Result<(), ChoroSceneGraphError> {
        self.marks.iter().try_for_each(|m| m.validate())
    }
}

impl Default for SceneGroup {
    fn default() -> Self {
        Self {
            name: "group".to_string(),
            origin: [0.0, 0.0],
            clip: Clip::None,
            marks: vec![],
            fill: None,
            stroke: None,
            stroke_width: None,
            zindex: None,
        }
    }
}

impl From<SceneGroup> for SceneMark {
    fn from(mark: SceneGroup) -> Self {
        SceneMark::Group(mark)
    }
}
