use choro_scales::{
    array::quantize_interval,
    format::NumberFormat,
    sequential::{SequentialColorScale, SequentialNormalizer},
};

use super::{
    format_numeric_ticks, numeric_tick_values,
    ramp::{ramp, ramp_mark},
    ColorLegendConfig, LegendBranch, LegendLayout,
};
use crate::{axis::AxisTicks, error::ChoroGuidesError};

const SEQUENTIAL_TEXELS: usize = 256;

/// A 256 texel sample of the interpolator, with ticks placed by where their
/// value normalizes to
pub(crate) fn make_sequential_branch(
    scale: &SequentialColorScale,
    config: &ColorLegendConfig,
    layout: &LegendLayout,
) -> Result<LegendBranch, ChoroGuidesError> {
    let interpolator = scale.interpolator();
    let image = ramp(SEQUENTIAL_TEXELS, |t| interpolator.interpolate(t));

    let values = match (numeric_tick_values(config)?, scale.normalizer()) {
        (Some(values), _) => values,
        (None, SequentialNormalizer::Linear { .. }) => {
            scale.ticks(Some(layout.ticks)).unwrap_or_default()
        }
        // Without native ticks, sample the distribution at even probabilities
        (None, SequentialNormalizer::Quantile { .. }) => {
            quantize_interval(0.0, 1.0, (layout.ticks + 1.0).round().max(0.0) as usize)
                .into_iter()
                .map(|p| scale.quantile(p))
                .collect()
        }
    };
    // Quantile scales have no native formatter and fall back to a plain `,f`
    let labels = format_numeric_ticks(&values, config.tick_format.as_ref(), |specifier| {
        scale
            .tick_format(Some(layout.ticks), specifier)
            .unwrap_or_else(|| NumberFormat::try_new(specifier.unwrap_or(",f")))
    })?;

    let positions = values
        .iter()
        .map(|v| {
            let t = scale.normalize(*v);
            (layout.x0() * (1.0 - t) + layout.x1() * t).round()
        })
        .collect();

    Ok(LegendBranch {
        swatches: ramp_mark(image, layout),
        ticks: AxisTicks::new(positions, labels),
        extend_ticks: true,
    })
}
