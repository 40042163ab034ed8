pub mod group;
pub mod image;
pub mod mark;
pub mod rect;
pub mod rule;
pub mod text;

use choro_common::value::ScalarOrArray;

use crate::error::ChoroSceneGraphError;

/// Check that an array encoding agrees with the instance count of its mark
pub(crate) fn check_len<T: Sync + Clone>(
    mark: &str,
    field: &'static str,
    value: &ScalarOrArray<T>,
    len: u32,
    indices: Option<&Vec<usize>>,
) -> Result<(), ChoroSceneGraphError> {
    let ScalarOrArray::Array(values) = value else {
        return Ok(());
    };
    match indices {
        None if values.len() != len as usize => Err(ChoroSceneGraphError::InconsistentLength {
            mark: mark.to_string(),
            field,
            expected: len as usize,
            actual: values.len(),
        }),
        Some(indices) => match indices.iter().find(|i| **i >= values.len()) {
            Some(index) => Err(ChoroSceneGraphError::IndexOutOfBounds {
                mark: mark.to_string(),
                index: *index,
                len: values.len(),
            }),
            None => Ok(()),
        },
        None => Ok(()),
    }
}
