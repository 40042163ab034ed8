use crate::error::ChoroSceneGraphError;
use crate::marks::group::SceneGroup;
use crate::marks::image::SceneImageMark;
use crate::marks::rect::SceneRectMark;
use crate::marks::rule::SceneRuleMark;
use crate::marks::text::SceneTextMark;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneMark {
    Rect(SceneRectMark),
    Rule(SceneRuleMark),
    Text(SceneTextMark),
    Image(SceneImageMark),
    Group(SceneGroup),
}

impl SceneMark {
    pub fn name(&self) -> &str {
        match self {
            Self::Rect(mark) => &mark.name,
            Self::Rule(mark) => &mark.name,
            Self::Text(mark) => &mark.name,
            Self::Image(mark) => &mark.name,
            Self::Group(mark) => &mark.name,
        }
    }

    pub fn zindex(&self) -> Option<i32> {
        match self {
            Self::Rect(mark) => mark.zindex,
            Self::Rule(mark) => mark.zindex,
            Self::Text(mark) => mark.zindex,
            Self::Image(mark) => mark.zindex,
            Self::Group(mark) => mark.zindex,
        }
    }

    pub fn children(&self) -> &[SceneMark] {
        match self {
            Self::Group(mark) => &mark.marks,
            _ => &[],
        }
    }

    /// Check array encodings against each mark's instance count, recursing into groups
    pub fn validate(&self) -> Result<(), ChoroSceneGraphError> {
        match self {
            Self::Rect(mark) => mark.validate(),
            Self::Rule(mark) => mark.validate(),
            Self::Text(mark) => mark.validate(),
            Self::Image(mark) => mark.validate(),
            Self::Group(mark) => mark.validate(),
        }
    }
}
