pub mod bottom;
pub mod opts;

/// Tick positions along the axis with their labels
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisTicks {
    pub positions: Vec<f32>,
    pub labels: Vec<String>,
}

impl AxisTicks {
    pub fn new(positions: Vec<f32>, labels: Vec<String>) -> Self {
        debug_assert_eq!(positions.len(), labels.len());
        Self { positions, labels }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
