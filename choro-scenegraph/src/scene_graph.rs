use std::collections::HashMap;

use crate::error::ChoroSceneGraphError;
use crate::marks::{group::SceneGroup, mark::SceneMark};
use serde::{Deserialize, Serialize};

/// A self-contained drawing of fixed pixel size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneGraph {
    pub marks: Vec<SceneMark>,
    pub width: f32,
    pub height: f32,
    pub origin: [f32; 2],
}

impl SceneGraph {
    pub fn groups(&self) -> Vec<&SceneGroup> {
        self.marks
            .iter()
            .filter_map(|m| {
                let SceneMark::Group(g) = m else {
                    return None;
                };
                Some(g)
            })
            .collect()
    }

    pub fn children(&self) -> &[SceneMark] {
        &self.marks
    }

    pub fn get_mark(&self, mark_path: &[usize]) -> Option<&SceneMark> {
        // empty path is the root, which is not a mark
        let (first, rest) = mark_path.split_first()?;
        let mut child = self.marks.get(*first)?;
        for index in rest {
            child = child.children().get(*index)?;
        }
        Some(child)
    }

    /// Absolute origin of the group at `group_path`
    pub fn get_absolute_origin(&self, group_path: &[usize]) -> Option<[f32; 2]> {
        let mut origin = self.origin;
        let mut marks = &self.marks;
        for index in group_path {
            let SceneMark::Group(group) = marks.get(*index)? else {
                return None;
            };
            origin = [origin[0] + group.origin[0], origin[1] + group.origin[1]];
            marks = &group.marks;
        }
        Some(origin)
    }

    /// All of the group paths in the scene graph
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

    /// Mapping from the names of each group to their path
    pub fn group_names(&self) -> HashMap<String, Vec<usize>> {
        let mut names = HashMap::new();
        for path in self.group_paths() {
            if let Some(SceneMark::Group(group)) = self.get_mark(&path) {
                names.entry(group.name.clone()).or_insert(path);
            }
        }
        names
    }

    /// Re-root this graph as a group placed at `origin` inside a larger surface.
    /// A single root group keeps its name and is translated; otherwise the
    /// marks are wrapped in a new group called `name`.
    pub fn into_group(self, name: &str, origin: [f32; 2]) -> SceneGroup {
        let offset = [origin[0] + self.origin[0], origin[1] + self.origin[1]];
        let mut marks = self.marks;
        if let [SceneMark::Group(_)] = marks.as_slice() {
            if let Some(SceneMark::Group(mut group)) = marks.pop() {
                group.origin = [group.origin[0] + offset[0], group.origin[1] + offset[1]];
                return group;
            }
        }
        SceneGroup {
            name: name.to_string(),
            origin: offset,
            marks,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ChoroSceneGraphError> {
        self.marks.iter().try_for_each(|m| m.validate())
    }
}
