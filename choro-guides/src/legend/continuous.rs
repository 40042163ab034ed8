use choro_scales::{
    array::quantize_interval,
    color::continuous::ContinuousColorScale,
    format::tick_format,
    numeric::{piecewise::PiecewiseLinearScale, ContinuousNumericScale},
};
use log::debug;

use super::{
    format_numeric_ticks, numeric_tick_values,
    ramp::{ramp, ramp_mark},
    ColorLegendConfig, LegendBranch, LegendLayout,
};
use crate::{axis::AxisTicks, error::ChoroGuidesError};

/// One texel per color stop, with the stops spread evenly across the swatch
/// area so that uneven domain stops stretch or squeeze the axis instead of
/// the colors.
pub(crate) fn make_continuous_branch(
    scale: &ContinuousColorScale,
    config: &ColorLegendConfig,
    layout: &LegendLayout,
) -> Result<LegendBranch, ChoroGuidesError> {
    let n = scale.stop_count();
    let stops = ContinuousColorScale::try_new_uniform((0.0, 1.0), scale.range()[..n].to_vec())?;
    let image = ramp(n.max(1), |t| stops.scale_value(t));

    if n == 0 {
        debug!("continuous scale has no stops, drawing an empty axis");
        return Ok(LegendBranch {
            swatches: ramp_mark(image, layout),
            ticks: AxisTicks::default(),
            extend_ticks: true,
        });
    }

    let x = PiecewiseLinearScale::try_new(
        scale.domain()[..n].to_vec(),
        quantize_interval(layout.x0(), layout.x1(), n),
    )?
    .with_round(true);

    let values = match numeric_tick_values(config)? {
        Some(values) => values,
        None => x.ticks(Some(layout.ticks)),
    };
    let labels = format_numeric_ticks(&values, config.tick_format.as_ref(), |specifier| {
        let (start, stop) = x.domain();
        tick_format(start, stop, layout.ticks, specifier)
    })?;

    Ok(LegendBranch {
        swatches: ramp_mark(image, layout),
        ticks: AxisTicks::new(x.scale(&values), labels),
        extend_ticks: true,
    })
}
