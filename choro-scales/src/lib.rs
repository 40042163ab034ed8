pub mod array;
pub mod band;
pub mod color;
pub mod error;
pub mod format;
pub mod numeric;
pub mod ordinal;
pub mod quantile;
pub mod quantize;
pub mod sequential;
pub mod threshold;
