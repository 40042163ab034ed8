use serde::{Deserialize, Serialize};

/// A mark encoding that is either shared by every instance or given per instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum ScalarOrArray<T: Sync + Clone> {
    Scalar(T),
    Array(Vec<T>),
}

impl<T: Sync + Clone> ScalarOrArray<T> {
    pub fn new_scalar(value: T) -> Self {
        ScalarOrArray::Scalar(value)
    }

    pub fn new_array(values: Vec<T>) -> Self {
        ScalarOrArray::Array(values)
    }

    /// Number of explicit values, scalars count as one
    pub fn len(&self) -> usize {
        match self {
            ScalarOrArray::Scalar(_) => 1,
            ScalarOrArray::Array(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ScalarOrArray::Array(values) if values.is_empty())
    }

    pub fn as_iter<'a>(
        &'a self,
        scalar_len: usize,
        indices: Option<&'a Vec<usize>>,
    ) -> Box<dyn Iterator<Item = &'a T> + 'a> {
        match self {
            ScalarOrArray::Scalar(value) => Box::new(std::iter::repeat_n(value, scalar_len)),
            ScalarOrArray::Array(values) => match indices {
                None => Box::new(values.iter()),
                Some(indices) => Box::new(indices.iter().map(|i| &values[*i])),
            },
        }
    }

    pub fn as_vec(&self, scalar_len: usize, indices: Option<&Vec<usize>>) -> Vec<T> {
        self.as_iter(scalar_len, indices).cloned().collect()
    }

    pub fn map<U: Sync + Clone>(&self, f: impl Fn(&T) -> U) -> ScalarOrArray<U> {
        match self {
            ScalarOrArray::Scalar(value) => ScalarOrArray::Scalar(f(value)),
            ScalarOrArray::Array(values) => ScalarOrArray::Array(values.iter().map(f).collect()),
        }
    }
}

impl ScalarOrArray<f32> {
    pub fn equals_scalar(&self, v: f32) -> bool {
        match self {
            ScalarOrArray::Scalar(value) => v == *value,
            _ => false,
        }
    }
}

impl<T: Sync + Clone> From<Vec<T>> for ScalarOrArray<T> {
    fn from(values: Vec<T>) -> Self {
        ScalarOrArray::Array(values)
    }
}

impl<T: Sync + Clone> From<T> for ScalarOrArray<T> {
    fn from(value: T) -> Self {
        ScalarOrArray::Scalar(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_repeats_to_len() {
        let value = ScalarOrArray::new_scalar(2.0_f32);
        assert_eq!(value.as_vec(3, None), vec![2.0, 2.0, 2.0]);
        assert_eq!(value.len(), 1);
    }

    #[test]
    fn test_array_with_indices() {
        let value: ScalarOrArray<&str> = vec!["a", "b", "c"].into();
        let indices = vec![2, 0];
        assert_eq!(value.as_vec(3, Some(&indices)), vec!["c", "a"]);
    }

    #[test]
    fn test_map_preserves_shape() {
        let value: ScalarOrArray<f32> = vec![1.0, 2.0].into();
        assert_eq!(value.map(|v| v * 2.0), ScalarOrArray::Array(vec![2.0, 4.0]));
        assert!(ScalarOrArray::new_scalar(1.0).map(|v| v + 1.0).equals_scalar(2.0));
    }
}
