use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ChoroSceneGraphError {
    #[error("Mark `{mark}` has {actual} values for `{field}` but a length of {expected}")]
    InconsistentLength {
        mark: String,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Mark `{mark}` has index {index} outside its {len} values")]
    IndexOutOfBounds {
        mark: String,
        index: usize,
        len: usize,
    },
}
