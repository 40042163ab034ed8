use std::sync::Arc;

use choro_common::types::{
    rgba_to_u8, FontWeight, FontWeightNameSpec, RgbaColor, TextAlign, TRANSPARENT,
};
use choro_common::value::ScalarOrArray;
use choro_guides::error::ChoroGuidesError;
use choro_guides::legend::{
    make_color_legend, ColorLegendConfig, DiscretizingColorScale, LegendColor, TickFormat,
    TickValues,
};
use choro_scales::color::continuous::ContinuousColorScale;
use choro_scales::color::scheme::{greens, interpolate_greens, tableau10};
use choro_scales::error::ChoroScaleError;
use choro_scales::ordinal::OrdinalScale;
use choro_scales::quantile::QuantileScale;
use choro_scales::quantize::QuantizeScale;
use choro_scales::sequential::SequentialColorScale;
use choro_scales::threshold::ThresholdScale;
use choro_scenegraph::marks::group::SceneGroup;
use choro_scenegraph::marks::image::SceneImageMark;
use choro_scenegraph::marks::mark::SceneMark;
use choro_scenegraph::marks::rect::SceneRectMark;
use choro_scenegraph::marks::rule::SceneRuleMark;
use choro_scenegraph::marks::text::SceneTextMark;
use choro_scenegraph::scene_graph::SceneGraph;
use float_cmp::assert_approx_eq;
use rstest::rstest;

fn greens9() -> Vec<RgbaColor> {
    greens(9).unwrap()
}

fn root(graph: &SceneGraph) -> &SceneGroup {
    match graph.marks.as_slice() {
        [SceneMark::Group(group)] => group,
        marks => panic!("expected a single root group, got {marks:?}"),
    }
}

fn axis(graph: &SceneGraph) -> &SceneGroup {
    match root(graph).find_mark("axis") {
        Some(SceneMark::Group(group)) => group,
        other => panic!("expected axis group, got {other:?}"),
    }
}

fn ramp(graph: &SceneGraph) -> &SceneImageMark {
    match root(graph).find_mark("ramp") {
        Some(SceneMark::Image(image)) => image,
        other => panic!("expected ramp image, got {other:?}"),
    }
}

fn swatches(graph: &SceneGraph) -> &SceneRectMark {
    match root(graph).find_mark("swatches") {
        Some(SceneMark::Rect(rect)) => rect,
        other => panic!("expected swatch rects, got {other:?}"),
    }
}

fn tick_rules(graph: &SceneGraph) -> &SceneRuleMark {
    match axis(graph).find_mark("ticks") {
        Some(SceneMark::Rule(rule)) => rule,
        other => panic!("expected tick rules, got {other:?}"),
    }
}

fn text(graph: &SceneGraph, name: &str) -> SceneTextMark {
    match axis(graph).find_mark(name) {
        Some(SceneMark::Text(text)) => text.clone(),
        other => panic!("expected text mark {name}, got {other:?}"),
    }
}

fn tick_labels(graph: &SceneGraph) -> Vec<String> {
    text(graph, "tick-labels").text_vec()
}

fn education_legend(width: f32) -> (LegendColor, ColorLegendConfig) {
    let color = ContinuousColorScale::try_new_uniform((24.0, 66.0), greens9()).unwrap();
    let config = ColorLegendConfig {
        title: "Percent".to_string(),
        width,
        ..Default::default()
    };
    (LegendColor::Continuous(color), config)
}

#[test]
fn test_continuous_education_legend() {
    let (color, config) = education_legend(260.0);
    let graph = make_color_legend(&color, &config).unwrap();
    graph.validate().unwrap();

    assert_eq!(graph.width, 260.0);
    assert_eq!(graph.height, 50.0);
    assert_eq!(root(&graph).name, "legend");
    assert_eq!(root(&graph).marks.len(), 2);

    let image = ramp(&graph);
    assert!(!image.aspect);
    assert!(!image.smooth);
    assert!(image.x.equals_scalar(0.0));
    assert!(image.y.equals_scalar(18.0));
    assert!(image.width.equals_scalar(260.0));
    assert!(image.height.equals_scalar(10.0));

    let ScalarOrArray::Scalar(raster) = &image.image else {
        panic!("expected a single ramp image");
    };
    assert_eq!((raster.width, raster.height), (9, 1));
    for (i, color) in greens9().iter().enumerate() {
        assert_eq!(raster.pixel(i as u32, 0), Some(rgba_to_u8(color)));
    }

    assert_eq!(axis(&graph).origin, [0.0, 28.0]);
    assert_eq!(tick_labels(&graph), vec!["30", "40", "50", "60"]);
    assert_eq!(
        tick_rules(&graph).x_vec(),
        vec![37.5, 99.5, 161.5, 223.5]
    );

    let title = text(&graph, "title");
    assert_eq!(title.text_vec(), vec!["Percent"]);
    assert!(title.x.equals_scalar(0.0));
    assert!(title.y.equals_scalar(-16.0));
    assert_eq!(
        title.font_weight_iter().next(),
        Some(&FontWeight::Name(FontWeightNameSpec::Bold))
    );
    assert_eq!(title.align_iter().next(), Some(&TextAlign::Left));
}

#[test]
fn test_continuous_ticks_span_swatches() {
    let (color, config) = education_legend(260.0);
    let graph = make_color_legend(&color, &config).unwrap();
    let rules = tick_rules(&graph);

    // From the top of the swatches down past the axis
    assert_eq!(rules.y_iter().next(), Some(&-10.0));
    assert_eq!(rules.y2_iter().next(), Some(&6.0));
}

#[rstest]
#[case(2)]
#[case(5)]
#[case(9)]
fn test_continuous_texel_per_stop(#[case] n: usize) {
    let colors = greens9()[..n].to_vec();
    let color = ContinuousColorScale::try_new_uniform((0.0, 1.0), colors).unwrap();
    let graph =
        make_color_legend(&LegendColor::Continuous(color), &Default::default()).unwrap();
    let ScalarOrArray::Scalar(raster) = &ramp(&graph).image else {
        panic!("expected a single ramp image");
    };
    assert_eq!(raster.width, n as u32);
}

#[test]
fn test_continuous_uneven_stops_stretch_axis() {
    let colors = greens9()[..3].to_vec();
    let color = ContinuousColorScale::try_new(vec![0.0, 10.0, 100.0], colors).unwrap();
    let config = ColorLegendConfig {
        width: 200.0,
        tick_values: Some(TickValues::Numbers(vec![0.0, 10.0, 100.0])),
        ..Default::default()
    };
    let graph = make_color_legend(&LegendColor::Continuous(color), &config).unwrap();

    // The middle stop sits halfway across even though it is a tenth of the domain
    assert_eq!(tick_rules(&graph).x_vec(), vec![0.5, 100.5, 200.5]);
    assert_eq!(tick_labels(&graph), vec!["0", "10", "100"]);
}

#[test]
fn test_continuous_without_stops() {
    let color = ContinuousColorScale::try_new(vec![], vec![]).unwrap();
    let graph =
        make_color_legend(&LegendColor::Continuous(color), &Default::default()).unwrap();

    let ScalarOrArray::Scalar(raster) = &ramp(&graph).image else {
        panic!("expected a single ramp image");
    };
    assert_eq!(raster.width, 1);
    assert_eq!(raster.pixel(0, 0), Some(rgba_to_u8(&TRANSPARENT)));
    assert!(tick_labels(&graph).is_empty());
}

#[test]
fn test_tick_count_follows_width() {
    for width in [160.0, 320.0, 640.0] {
        let (color, config) = education_legend(width);
        let graph = make_color_legend(&color, &config).unwrap();
        let count = tick_labels(&graph).len() as f32;
        let target = width / 64.0;
        assert!(
            count >= target / 2.0 - 1.0 && count <= target * 2.0 + 1.0,
            "{count} ticks for width {width}"
        );
    }
}

#[test]
fn test_tick_format_specifier_and_function() {
    let (color, mut config) = education_legend(260.0);
    config.tick_format = Some(".1f".into());
    let graph = make_color_legend(&color, &config).unwrap();
    assert_eq!(tick_labels(&graph), vec!["30.0", "40.0", "50.0", "60.0"]);

    config.tick_format = Some(TickFormat::function(|v| format!("{v}%")));
    let graph = make_color_legend(&color, &config).unwrap();
    assert_eq!(tick_labels(&graph), vec!["30%", "40%", "50%", "60%"]);
}

#[test]
fn test_sequential_linear_legend() {
    let color = SequentialColorScale::new_linear((0.0, 100.0), Arc::new(interpolate_greens()));
    let graph = make_color_legend(&LegendColor::Sequential(color), &Default::default()).unwrap();

    let ScalarOrArray::Scalar(raster) = &ramp(&graph).image else {
        panic!("expected a single ramp image");
    };
    assert_eq!((raster.width, raster.height), (256, 1));
    assert_eq!(raster.pixel(0, 0), Some(rgba_to_u8(&greens9()[0])));
    assert_eq!(raster.pixel(255, 0), Some(rgba_to_u8(&greens9()[8])));

    assert_eq!(tick_labels(&graph), vec!["0", "20", "40", "60", "80", "100"]);
    assert_eq!(
        tick_rules(&graph).x_vec(),
        vec![0.5, 64.5, 128.5, 192.5, 256.5, 320.5]
    );
}

#[test]
fn test_sequential_quantile_legend() {
    let samples: Vec<f32> = (1..=10).map(|v| v as f32).collect();
    let color =
        SequentialColorScale::try_new_quantile(&samples, Arc::new(interpolate_greens())).unwrap();
    let config = ColorLegendConfig {
        ticks: Some(4.0),
        ..Default::default()
    };
    let graph = make_color_legend(&LegendColor::Sequential(color), &config).unwrap();

    // Quantiles at 0, 1/4, 1/2, 3/4 and 1 land where their rank normalizes
    assert_eq!(
        tick_rules(&graph).x_vec(),
        vec![0.5, 71.5, 142.5, 213.5, 320.5]
    );
    assert_eq!(
        tick_labels(&graph),
        vec!["1.000000", "3.250000", "5.500000", "7.750000", "10.000000"]
    );
}

#[test]
fn test_sequential_quantile_labels_stay_distinct() {
    let samples = [1.01, 1.02, 1.03, 1.04, 1.05, 1.06, 1.07, 1.08, 100.0];
    let color =
        SequentialColorScale::try_new_quantile(&samples, Arc::new(interpolate_greens())).unwrap();
    let graph = make_color_legend(&LegendColor::Sequential(color), &Default::default()).unwrap();

    let labels = tick_labels(&graph);
    assert_eq!(labels.len(), 6);
    assert_eq!(labels[0], "1.010000");
    assert_eq!(labels[5], "100.000000");
    let mut distinct = labels.clone();
    distinct.dedup();
    assert_eq!(distinct, labels);

    let config = ColorLegendConfig {
        tick_format: Some(".2f".into()),
        ..Default::default()
    };
    let color =
        SequentialColorScale::try_new_quantile(&samples, Arc::new(interpolate_greens())).unwrap();
    let graph = make_color_legend(&LegendColor::Sequential(color), &config).unwrap();
    assert_eq!(tick_labels(&graph)[0], "1.01");
}

#[test]
fn test_threshold_legend() {
    let colors = greens9()[..4].to_vec();
    let color = ThresholdScale::try_new(vec![10.0, 20.0, 30.0], colors.clone(), TRANSPARENT)
        .unwrap();
    let graph = make_color_legend(
        &LegendColor::Threshold(color.into()),
        &ColorLegendConfig::default(),
    )
    .unwrap();
    graph.validate().unwrap();

    let rects = swatches(&graph);
    assert_eq!(rects.len, 4);
    assert_eq!(rects.x_vec(), vec![0.0, 80.0, 160.0, 240.0]);
    assert_eq!(rects.width_vec(), vec![80.0; 4]);
    assert_eq!(rects.fill_vec(), colors);

    assert_eq!(tick_labels(&graph), vec!["10", "20", "30"]);
    assert_eq!(tick_rules(&graph).x_vec(), vec![80.5, 160.5, 240.5]);
}

#[test]
fn test_threshold_rect_per_color() {
    for k in 3..=9 {
        let color = QuantizeScale::try_new((0.0, 90.0), greens(k).unwrap(), TRANSPARENT).unwrap();
        let graph = make_color_legend(
            &LegendColor::Threshold(color.into()),
            &ColorLegendConfig::default(),
        )
        .unwrap();
        let rects = swatches(&graph);
        assert_eq!(rects.len as usize, k);
        assert_eq!(tick_labels(&graph).len(), k - 1);

        // Swatches tile the plot area without gaps
        let x = rects.x_vec();
        let widths = rects.width_vec();
        assert_eq!(x[0], 0.0);
        assert_eq!(x[k - 1] + widths[k - 1], 320.0);
        for i in 1..k {
            assert_eq!(x[i - 1] + widths[i - 1], x[i]);
        }
    }
}

#[test]
fn test_threshold_default_labels_within_f32_precision() {
    let color = QuantizeScale::try_new((24.0, 66.0), greens9(), TRANSPARENT).unwrap();
    let graph = make_color_legend(
        &LegendColor::Threshold(color.clone().into()),
        &ColorLegendConfig::default(),
    )
    .unwrap();
    let labels = tick_labels(&graph);
    assert_eq!(labels.len(), 8);
    assert_eq!(labels[0], "28.66667");
    assert_eq!(labels[2], "38");
    assert_eq!(labels[5], "52");
    assert!(labels.iter().all(|l| l.len() <= 8), "{labels:?}");

    // A category formatter has no numeric meaning and keeps the default labels
    let config = ColorLegendConfig {
        tick_format: Some(TickFormat::category(|c| c.to_string())),
        ..Default::default()
    };
    let graph = make_color_legend(&LegendColor::Threshold(color.into()), &config).unwrap();
    assert_eq!(tick_labels(&graph), labels);
}

#[test]
fn test_threshold_breakpoint_priority() {
    let quantile = QuantileScale::try_new(
        &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
        greens(3).unwrap(),
        TRANSPARENT,
    )
    .unwrap();
    let color = DiscretizingColorScale::from(quantile.clone());
    assert_eq!(color.breakpoints(), quantile.quantiles());

    let config = ColorLegendConfig {
        tick_format: Some(".1f".into()),
        ..Default::default()
    };
    let graph = make_color_legend(&LegendColor::Threshold(color), &config).unwrap();
    let expected: Vec<String> = quantile
        .quantiles()
        .iter()
        .map(|q| format!("{q:.1}"))
        .collect();
    assert_eq!(tick_labels(&graph), expected);
}

#[test]
fn test_ordinal_legend() {
    let domain: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let colors = tableau10()[..3].to_vec();
    let color = OrdinalScale::try_new(&domain, &colors, TRANSPARENT).unwrap();
    let graph = make_color_legend(&LegendColor::Ordinal(color), &Default::default()).unwrap();
    graph.validate().unwrap();

    let rects = swatches(&graph);
    assert_eq!(rects.len, 3);
    assert_eq!(rects.x_vec(), vec![1.0, 107.0, 213.0]);
    assert_eq!(rects.width_vec(), vec![105.0; 3]);
    assert_eq!(rects.fill_vec(), colors);

    assert_eq!(tick_labels(&graph), domain);
    assert_eq!(tick_rules(&graph).x_vec(), vec![54.5, 160.5, 266.5]);

    // Ordinal ticks stay below the swatches
    assert_eq!(tick_rules(&graph).y_iter().next(), Some(&0.0));
}

#[rstest]
#[case(1)]
#[case(4)]
#[case(10)]
fn test_ordinal_bands_do_not_overlap(#[case] m: usize) {
    let domain: Vec<String> = (0..m).map(|i| format!("category {i}")).collect();
    let color = OrdinalScale::try_new_cycled(&domain, &tableau10(), TRANSPARENT).unwrap();
    let config = ColorLegendConfig {
        width: 275.0,
        ..Default::default()
    };
    let graph = make_color_legend(&LegendColor::Ordinal(color), &config).unwrap();

    let rects = swatches(&graph);
    assert_eq!(rects.len as usize, m);
    let x = rects.x_vec();
    let widths = rects.width_vec();
    for i in 1..m {
        assert!(x[i - 1] + widths[i - 1] < x[i]);
        assert_approx_eq!(f32, widths[i], widths[0]);
    }
}

#[test]
fn test_ordinal_tick_values_subset() {
    let domain: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let color = OrdinalScale::try_new(&domain, &tableau10()[..3], TRANSPARENT).unwrap();
    let config = ColorLegendConfig {
        tick_values: Some(TickValues::Categories(vec!["c".to_string()])),
        ..Default::default()
    };
    let graph = make_color_legend(&LegendColor::Ordinal(color), &config).unwrap();
    assert_eq!(tick_labels(&graph), vec!["c"]);
    assert_eq!(tick_rules(&graph).x_vec(), vec![266.5]);
}

#[test]
fn test_ordinal_category_tick_format() {
    let domain: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let color = OrdinalScale::try_new(&domain, &tableau10()[..3], TRANSPARENT).unwrap();
    let mut config = ColorLegendConfig {
        tick_format: Some(TickFormat::category(|c| format!("group {}", c.to_uppercase()))),
        ..Default::default()
    };
    let graph = make_color_legend(&LegendColor::Ordinal(color.clone()), &config).unwrap();
    assert_eq!(tick_labels(&graph), vec!["group A", "group B", "group C"]);
    assert_eq!(tick_rules(&graph).x_vec(), vec![54.5, 160.5, 266.5]);

    // Numeric formats fall back to the category itself
    config.tick_format = Some(TickFormat::function(|v| format!("{v}%")));
    let graph = make_color_legend(&LegendColor::Ordinal(color), &config).unwrap();
    assert_eq!(tick_labels(&graph), domain);
}

#[test]
fn test_ordinal_empty_domain() {
    let color = OrdinalScale::<String, RgbaColor>::try_new(&[], &[], TRANSPARENT).unwrap();
    let graph = make_color_legend(&LegendColor::Ordinal(color), &Default::default()).unwrap();
    assert_eq!(swatches(&graph).len, 0);
    assert!(tick_labels(&graph).is_empty());
}

#[test]
fn test_legend_is_idempotent() {
    let (color, config) = education_legend(260.0);
    let first = make_color_legend(&color, &config).unwrap();
    let second = make_color_legend(&color, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_invalid_dimensions() {
    let (color, _) = education_legend(260.0);
    let config = ColorLegendConfig {
        width: 100.0,
        margin_left: 60.0,
        margin_right: 40.0,
        ..Default::default()
    };
    assert!(matches!(
        make_color_legend(&color, &config),
        Err(ChoroGuidesError::InvalidDimensions { width, .. }) if width == 100.0
    ));
}

#[test]
fn test_invalid_tick_values() {
    let (color, mut config) = education_legend(260.0);
    config.tick_values = Some(TickValues::Categories(vec!["a".to_string()]));
    assert!(matches!(
        make_color_legend(&color, &config),
        Err(ChoroGuidesError::InvalidTickValues(_))
    ));

    let domain = vec!["a".to_string()];
    let ordinal = OrdinalScale::try_new(&domain, &tableau10()[..1], TRANSPARENT).unwrap();
    for tick_values in [
        TickValues::Numbers(vec![1.0]),
        TickValues::Categories(vec!["z".to_string()]),
    ] {
        let config = ColorLegendConfig {
            tick_values: Some(tick_values),
            ..Default::default()
        };
        assert!(matches!(
            make_color_legend(&LegendColor::Ordinal(ordinal.clone()), &config),
            Err(ChoroGuidesError::InvalidTickValues(_))
        ));
    }
}

#[test]
fn test_invalid_format_specifier() {
    let (color, mut config) = education_legend(260.0);
    config.tick_format = Some("not a format".into());
    assert!(matches!(
        make_color_legend(&color, &config),
        Err(ChoroGuidesError::InvalidScale(
            ChoroScaleError::InvalidFormatSpecifier(_)
        ))
    ));
}

#[test]
fn test_legend_serializes() {
    let (color, config) = education_legend(260.0);
    let graph = make_color_legend(&color, &config).unwrap();
    let json = serde_json::to_value(&graph).unwrap();
    assert_eq!(json["width"], 260.0);
    assert_eq!(json["marks"][0]["group"]["name"], "legend");

    // The ramp raster is embedded as an inline png
    let image = &json["marks"][0]["group"]["marks"][0]["image"];
    assert_eq!(image["name"], "ramp");
    let url = image["image"]["value"].as_str().unwrap();
    assert!(url.starts_with("data:image/png;base64,"));

    let roundtrip: SceneGraph = serde_json::from_value(json).unwrap();
    assert_eq!(roundtrip, graph);
}
