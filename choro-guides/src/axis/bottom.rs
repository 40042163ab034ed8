use choro_common::types::{FontWeight, FontWeightNameSpec, TextAlign, TextBaseline};
use choro_scenegraph::marks::{group::SceneGroup, rule::SceneRuleMark, text::SceneTextMark};

use super::{opts::AxisConfig, AxisTicks};

/// Tick lines, tick labels and a title for an axis below a plot. The axis has
/// no domain line.
pub fn make_bottom_axis(ticks: &AxisTicks, origin: [f32; 2], config: &AxisConfig) -> SceneGroup {
    let x: Vec<f32> = ticks
        .positions
        .iter()
        .map(|p| p + config.tick_offset)
        .collect();

    let tick_rules = SceneRuleMark {
        name: "ticks".to_string(),
        clip: false,
        len: ticks.len() as u32,
        x: x.clone().into(),
        x2: x.clone().into(),
        y: config.tick_extent.unwrap_or(0.0).into(),
        y2: config.tick_size.into(),
        stroke: config.color.into(),
        stroke_width: 1.0.into(),
        ..Default::default()
    };

    let tick_labels = SceneTextMark {
        name: "tick-labels".to_string(),
        clip: false,
        len: ticks.len() as u32,
        text: ticks.labels.clone().into(),
        x: x.into(),
        y: (config.tick_size.max(0.0) + config.tick_padding).into(),
        align: TextAlign::Center.into(),
        baseline: TextBaseline::Top.into(),
        color: config.color.into(),
        font_size: config.font_size.into(),
        ..Default::default()
    };

    let title = SceneTextMark {
        name: "title".to_string(),
        clip: false,
        len: 1,
        text: config.title.clone().into(),
        x: config.title_position[0].into(),
        y: config.title_position[1].into(),
        align: TextAlign::Left.into(),
        baseline: TextBaseline::Alphabetic.into(),
        color: config.color.into(),
        font_size: config.font_size.into(),
        font_weight: FontWeight::Name(FontWeightNameSpec::Bold).into(),
        ..Default::default()
    };

    SceneGroup {
        name: "axis".to_string(),
        origin,
        marks: vec![tick_rules.into(), tick_labels.into(), title.into()],
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use choro_scenegraph::marks::mark::SceneMark;

    #[test]
    fn test_bottom_axis_layout() {
        let ticks = AxisTicks::new(vec![0.0, 100.0], vec!["a".to_string(), "b".to_string()]);
        let group = make_bottom_axis(
            &ticks,
            [0.0, 28.0],
            &AxisConfig {
                tick_extent: Some(-10.0),
                title: "Percent".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(group.origin, [0.0, 28.0]);
        assert_eq!(group.marks.len(), 3);

        let SceneMark::Rule(rules) = &group.marks[0] else {
            panic!("expected tick rules");
        };
        assert_eq!(rules.x_vec(), vec![0.5, 100.5]);
        assert!(rules.y.equals_scalar(-10.0));
        assert!(rules.y2.equals_scalar(6.0));

        let SceneMark::Text(labels) = &group.marks[1] else {
            panic!("expected tick labels");
        };
        assert_eq!(labels.text_vec(), vec!["a", "b"]);
        assert!(labels.y.equals_scalar(9.0));

        let SceneMark::Text(title) = &group.marks[2] else {
            panic!("expected title");
        };
        assert_eq!(title.text_vec(), vec!["Percent"]);
        assert_eq!(
            title.font_weight_iter().next(),
            Some(&FontWeight::Name(FontWeightNameSpec::Bold))
        );
    }

    #[test]
    fn test_empty_ticks() {
        let group = make_bottom_axis(&AxisTicks::default(), [0.0, 0.0], &AxisConfig::default());
        let SceneMark::Rule(rules) = &group.marks[0] else {
            panic!("expected tick rules");
        };
        assert_eq!(rules.len, 0);
        assert!(group.validate().is_ok());
    }
}
