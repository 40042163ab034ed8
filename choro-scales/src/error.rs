#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ChoroScaleError {
    #[error("Domain length ({domain_len}) does not match range length ({range_len})")]
    DomainRangeMismatch { domain_len: usize, range_len: usize },

    #[error("Empty domain")]
    EmptyDomain,

    #[error("Empty range")]
    EmptyRange,

    #[error("Thresholds must be in ascending order: {0:?}")]
    ThresholdsNotAscending(Vec<f32>),

    #[error("Domain stops must be in ascending order: {0:?}")]
    DomainNotAscending(Vec<f32>),

    #[error(
        "Threshold domain length ({domain_len}) must be one less than range length ({range_len})"
    )]
    ThresholdDomainMismatch { domain_len: usize, range_len: usize },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid format specifier: {0:?}")]
    InvalidFormatSpecifier(String),
}
