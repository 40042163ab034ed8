use choro_common::types::RgbaColor;
use choro_scales::{band::BandScale, ordinal::OrdinalScale};
use choro_scenegraph::marks::rect::SceneRectMark;
use log::debug;

use super::{ColorLegendConfig, LegendBranch, LegendLayout, TickFormat, TickValues};
use crate::{axis::AxisTicks, error::ChoroGuidesError};

/// One band per category with a one pixel gap between neighbours, ticked at
/// the band centres
pub(crate) fn make_ordinal_branch(
    scale: &OrdinalScale<String, RgbaColor>,
    config: &ColorLegendConfig,
    layout: &LegendLayout,
) -> Result<LegendBranch, ChoroGuidesError> {
    let domain = scale.domain();
    if domain.is_empty() {
        debug!("ordinal scale has no categories, drawing an empty legend");
        return Ok(LegendBranch {
            swatches: SceneRectMark {
                name: "swatches".to_string(),
                len: 0,
                ..Default::default()
            }
            .into(),
            ticks: AxisTicks::default(),
            extend_ticks: false,
        });
    }

    let x = BandScale::try_new(domain.clone())?
        .with_range((layout.x0(), layout.x1()))?
        .with_round(true)?;
    let swatch_width = (x.bandwidth() - 1.0).max(0.0);

    let swatches = SceneRectMark {
        name: "swatches".to_string(),
        len: domain.len() as u32,
        x: x.scale(&domain).into(),
        y: layout.margin_top.into(),
        width: swatch_width.into(),
        height: layout.plot_height().into(),
        fill: scale.scale(&domain).into(),
        ..Default::default()
    };

    let categories = match &config.tick_values {
        None => domain,
        Some(TickValues::Categories(values)) => {
            if let Some(missing) = values.iter().find(|v| !domain.contains(v)) {
                return Err(ChoroGuidesError::InvalidTickValues(format!(
                    "category {missing:?} is not in the legend domain"
                )));
            }
            values.clone()
        }
        Some(TickValues::Numbers(values)) => {
            return Err(ChoroGuidesError::InvalidTickValues(format!(
                "expected categories for an ordinal legend, got numbers {values:?}"
            )))
        }
    };

    let center = (swatch_width / 2.0).round();
    let positions = x.scale(&categories).into_iter().map(|p| p + center).collect();
    let labels = match &config.tick_format {
        Some(TickFormat::Category(f)) => categories.iter().map(|c| f(c.as_str())).collect(),
        Some(_) => {
            debug!("numeric tick formats do not apply to ordinal legends");
            categories
        }
        None => categories,
    };

    Ok(LegendBranch {
        swatches: swatches.into(),
        ticks: AxisTicks::new(positions, labels),
        extend_ticks: false,
    })
}
