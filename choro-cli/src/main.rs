mod data;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use choro_common::{types::RgbaColor, value::ScalarOrArray};
use choro_guides::legend::{make_color_legend, ColorLegendConfig, LegendColor};
use choro_image::RgbaImage;
use choro_scales::{color::continuous::ContinuousColorScale, quantize::QuantizeScale};
use choro_scenegraph::{
    marks::{group::SceneGroup, mark::SceneMark},
    scene_graph::SceneGraph,
};
use clap::{Parser, ValueEnum};
use log::{debug, error, info, warn};

use crate::data::{education_color_scale, load_records};

const MAP_WIDTH: f32 = 975.0;
const MAP_HEIGHT: f32 = 610.0;
const LEGEND_ORIGIN: [f32; 2] = [610.0, 20.0];

/// Render the legend of the US educational attainment choropleth
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Per county education records (JSON array)
    #[arg(short, long)]
    education: PathBuf,

    /// Output path for the scene graph (JSON)
    #[arg(short, long, default_value = "choropleth.json")]
    output: PathBuf,

    /// Also write the legend's color ramp as a PNG
    #[arg(long)]
    ramp: Option<PathBuf>,

    /// Legend width in pixels
    #[arg(long, default_value_t = 260.0)]
    width: f32,

    #[arg(long, default_value = "Percent")]
    title: String,

    /// How the quantized colors are presented
    #[arg(long, value_enum, default_value_t = LegendStyle::Continuous)]
    style: LegendStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LegendStyle {
    /// A gradient with one stop per color, spread evenly over the domain
    Continuous,
    /// One swatch per color with ticks at the class breaks
    Threshold,
}

fn legend_color(
    scale: QuantizeScale<RgbaColor>,
    style: LegendStyle,
) -> anyhow::Result<LegendColor> {
    Ok(match style {
        LegendStyle::Continuous => LegendColor::Continuous(ContinuousColorScale::try_new_uniform(
            scale.domain(),
            scale.range().to_vec(),
        )?),
        LegendStyle::Threshold => LegendColor::Threshold(scale.into()),
    })
}

/// Place the legend inside the map surface
fn map_scene(legend: SceneGraph) -> SceneGraph {
    SceneGraph {
        marks: vec![legend.into_group("legend", LEGEND_ORIGIN).into()],
        width: MAP_WIDTH,
        height: MAP_HEIGHT,
        origin: [0.0, 0.0],
    }
}

fn find_ramp(group: &SceneGroup) -> Option<&RgbaImage> {
    group.marks.iter().find_map(|mark| match mark {
        SceneMark::Image(image) if image.name == "ramp" => match &image.image {
            ScalarOrArray::Scalar(img) => Some(img),
            ScalarOrArray::Array(imgs) => imgs.first(),
        },
        SceneMark::Group(group) => find_ramp(group),
        _ => None,
    })
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let records = load_records(&cli.education)?;
    info!("Loaded {} education records", records.len());
    if let Some(top) = records
        .iter()
        .max_by(|a, b| a.bachelors_or_higher.total_cmp(&b.bachelors_or_higher))
    {
        debug!("Highest attainment: {}: {}%", top.label(), top.bachelors_or_higher);
    }

    let scale = education_color_scale(&records)?;
    let config = ColorLegendConfig {
        title: cli.title.clone(),
        width: cli.width,
        ..Default::default()
    };
    let legend = make_color_legend(&legend_color(scale, cli.style)?, &config)?;

    let scene = map_scene(legend);
    scene.validate()?;
    let json = serde_json::to_string_pretty(&scene)?;
    fs::write(&cli.output, json)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    info!("Saved scene graph to {}", cli.output.display());

    if let Some(path) = &cli.ramp {
        match scene.groups().into_iter().find_map(find_ramp) {
            Some(ramp) => {
                fs::write(path, ramp.to_png()?)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!("Saved ramp to {}", path.display());
            }
            None => warn!("{:?} legends have no ramp, skipping {}", cli.style, path.display()),
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        error!("{err:#}");
        std::process::exit(1);
    }
}
