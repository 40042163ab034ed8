use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use choro_common::types::{RgbaColor, TRANSPARENT};
use choro_scales::{color::scheme::greens, quantize::QuantizeScale};
use serde::{Deserialize, Serialize};

/// Share of adults 25 and over holding a bachelor's degree or higher in one county
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub fips: u32,
    pub state: String,
    pub area_name: String,
    #[serde(rename = "bachelorsOrHigher")]
    pub bachelors_or_higher: f32,
}

impl EducationRecord {
    /// County label as shown in the map tooltip, e.g. `Autauga County, AL`
    pub fn label(&self) -> String {
        format!("{}, {}", self.area_name, self.state)
    }
}

pub fn load_records(path: &Path) -> anyhow::Result<Vec<EducationRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read education data from {}", path.display()))?;
    let records = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse education data in {}", path.display()))?;
    Ok(records)
}

/// Nine shades of green spread evenly over the rounded range of attainment
pub fn education_color_scale(
    records: &[EducationRecord],
) -> anyhow::Result<QuantizeScale<RgbaColor>> {
    let values = records
        .iter()
        .map(|r| r.bachelors_or_higher)
        .filter(|v| v.is_finite());
    let Some((min, max)) = values.fold(None, |extent, v| match extent {
        None => Some((v, v)),
        Some((lo, hi)) => Some((f32::min(lo, v), f32::max(hi, v))),
    }) else {
        bail!("no education records with a finite attainment value");
    };

    let colors = greens(9).context("missing nine class Greens scheme")?;
    Ok(QuantizeScale::try_new(
        (min.round(), max.round()),
        colors,
        TRANSPARENT,
    )?)
}
