use std::fmt::Debug;
use std::hash::Hash;

use crate::error::ChoroScaleError;
use indexmap::IndexMap;

/// A discrete scale that maps input values to a fixed set of output values.
/// Inputs not found in the domain map to the default value.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalScale<D, R>
where
    D: Clone + Hash + Eq + Debug,
    R: Clone + Debug + PartialEq,
{
    mapping: IndexMap<D, R>,
    default_value: R,
}

impl<D, R> OrdinalScale<D, R>
where
    D: Clone + Hash + Eq + Debug,
    R: Clone + Debug + PartialEq,
{
    /// Creates a new ordinal scale from domain and range arrays with a required default value
    pub fn try_new(domain: &[D], range: &[R], default_value: R) -> Result<Self, ChoroScaleError> {
        if domain.len() != range.len() {
            return Err(ChoroScaleError::DomainRangeMismatch {
                domain_len: domain.len(),
                range_len: range.len(),
            });
        }

        let mapping = domain
            .iter()
            .cloned()
            .zip(range.iter().cloned())
            .collect::<IndexMap<_, _>>();

        Ok(Self {
            mapping,
            default_value,
        })
    }

    /// Creates an ordinal scale that repeats the range when the domain is longer
    /// than it, the way a categorical palette is assigned to many categories.
    pub fn try_new_cycled(
        domain: &[D],
        range: &[R],
        default_value: R,
    ) -> Result<Self, ChoroScaleError> {
        if range.is_empty() {
            return Err(ChoroScaleError::EmptyRange);
        }
        let mut mapping = IndexMap::with_capacity(domain.len());
        for value in domain {
            // Duplicates keep their first assignment
            let next = range[mapping.len() % range.len()].clone();
            mapping.entry(value.clone()).or_insert(next);
        }
        Ok(Self {
            mapping,
            default_value,
        })
    }

    pub fn default_value(&self) -> &R {
        &self.default_value
    }

    /// Domain values in insertion order
    pub fn domain(&self) -> Vec<D> {
        self.mapping.keys().cloned().collect()
    }

    pub fn range(&self) -> Vec<R> {
        self.mapping.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    pub fn scale_value(&self, value: &D) -> &R {
        self.mapping.get(value).unwrap_or(&self.default_value)
    }

    /// Maps input values to their corresponding range values
    pub fn scale(&self, values: &[D]) -> Vec<R> {
        values
            .iter()
            .map(|v| self.scale_value(v).clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_ordinal_scale() -> Result<(), ChoroScaleError> {
        let domain = vec!["a", "b", "c"];
        let range = vec!["red", "green", "blue"];
        let scale = OrdinalScale::try_new(&domain, &range, "gray")?;

        let result = scale.scale(&["b", "a", "d", "b", "d"]);
        assert_eq!(result, vec!["green", "red", "gray", "green", "gray"]);
        assert_eq!(scale.domain(), domain);
        Ok(())
    }

    #[test]
    fn test_domain_range_mismatch() {
        assert!(matches!(
            OrdinalScale::try_new(&[1, 2, 3], &["a", "b"], "default"),
            Err(ChoroScaleError::DomainRangeMismatch {
                domain_len: 3,
                range_len: 2,
            })
        ));
    }

    #[test]
    fn test_cycled_range() -> Result<(), ChoroScaleError> {
        let scale = OrdinalScale::try_new_cycled(&["a", "b", "c", "a", "d"], &[1, 2], 0)?;
        assert_eq!(scale.domain(), vec!["a", "b", "c", "d"]);
        assert_eq!(scale.range(), vec![1, 2, 1, 2]);
        assert_eq!(*scale.scale_value(&"z"), 0);

        assert_eq!(
            OrdinalScale::<&str, i32>::try_new_cycled(&["a"], &[], 0),
            Err(ChoroScaleError::EmptyRange)
        );
        Ok(())
    }
}
