//! Integration test: render the reference "Direct" vs "VM" comparison and
//! check the command stream a backend would draw.

use osm_chart_core::measure::Measurements;
use osm_chart_core::svg::render_svg;
use osm_chart_core::views::{ChartLayout, ChartStyle, render_bar_chart};
use osm_chart_core::{ChartError, Dataset, Series};
use osm_chart_protocol::{RenderCommand, ThemeToken, Viewport};

/// Collect the text of every `DrawText` inside the group with `group_id`.
fn texts_in_group(commands: &[RenderCommand], group_id: &str) -> Vec<String> {
    let mut inside = false;
    let mut texts = Vec::new();
    for cmd in commands {
        match cmd {
            RenderCommand::BeginGroup { id, .. } => inside = id == group_id,
            RenderCommand::EndGroup => inside = false,
            RenderCommand::DrawText { text, .. } if inside => texts.push(text.clone()),
            _ => {}
        }
    }
    texts
}

fn reference_commands() -> Vec<RenderCommand> {
    let dataset = Dataset::reference().expect("reference data set is valid");
    render_bar_chart(&dataset, &ChartStyle::default(), &Viewport::default())
        .expect("reference chart renders")
}

#[test]
fn value_labels_match_reference_scenario() {
    let labels = texts_in_group(&reference_commands(), "labels");
    // Series by series: Direct first, then VM.
    assert_eq!(
        labels,
        ["0.328", "1.544", "351.368", "4.321", "29.535", "387.902"]
    );
}

#[test]
fn tick_labels_name_categories_in_order() {
    let ticks = texts_in_group(&reference_commands(), "x-axis");
    assert_eq!(ticks, ["Operation", "Function", "Syscall", "Test Type"]);
}

#[test]
fn legend_has_direct_then_vm() {
    let legend = texts_in_group(&reference_commands(), "legend");
    assert_eq!(legend, ["Direct", "VM"]);
}

#[test]
fn each_category_has_two_adjacent_bars() {
    let dataset = Dataset::reference().expect("reference data set is valid");
    let style = ChartStyle::default();
    let layout = ChartLayout::compute(&dataset, &style, &Viewport::default())
        .expect("reference chart lays out");

    for category in 0..3 {
        let direct = layout
            .bars
            .iter()
            .find(|b| b.category == category && b.series == 0)
            .expect("direct bar");
        let vm = layout
            .bars
            .iter()
            .find(|b| b.category == category && b.series == 1)
            .expect("vm bar");
        assert!((direct.x - category as f64).abs() < 1e-12);
        assert!((vm.x - (category as f64 + 0.40)).abs() < 1e-12);

        // Adjacent in pixel space: the VM bar starts where the Direct bar ends.
        let a = layout.bar_rect(direct);
        let b = layout.bar_rect(vm);
        assert!((a.right() - b.x).abs() < 1e-6);
    }

    assert_eq!(layout.legend_entries().len(), 2);
}

#[test]
fn bars_carry_series_colors_and_edges() {
    let commands = reference_commands();
    let bars: Vec<(ThemeToken, Option<ThemeToken>, Option<u64>)> = commands
        .iter()
        .filter_map(|c| match c {
            RenderCommand::DrawRect {
                color,
                border_color,
                bar_id: Some(id),
                ..
            } => Some((*color, *border_color, Some(*id))),
            _ => None,
        })
        .collect();

    assert_eq!(bars.len(), 6);
    for (i, (color, border, id)) in bars.iter().enumerate() {
        let expected = if i < 3 {
            ThemeToken::SeriesPrimary
        } else {
            ThemeToken::SeriesSecondary
        };
        assert_eq!(*color, expected);
        assert_eq!(*border, Some(ThemeToken::BarEdge));
        assert_eq!(*id, Some(i as u64));
    }
}

#[test]
fn y_axis_is_logarithmic() {
    let y_axis = texts_in_group(&reference_commands(), "y-axis");
    assert_eq!(
        y_axis,
        ["0.1", "1", "10", "100", "1000", "Time in ns  (log scale)"]
    );
}

#[test]
fn non_positive_value_is_rejected_before_rendering() {
    let err = Dataset::with_direct(Series::new(
        "Direct",
        [0.3281, 0.0, 351.368],
        ThemeToken::SeriesPrimary,
    ));
    assert!(matches!(
        err,
        Err(ChartError::NonPositiveValue { ref category, .. }) if category == "Function"
    ));

    let err = Dataset::new(
        vec!["Operation".into()],
        vec![Series::new("VM", [-4.0], ThemeToken::SeriesSecondary)],
    );
    assert!(err.is_err());
}

#[test]
fn host_measurements_chart_against_vm_reference() {
    let measured = Measurements {
        iterations: 1000,
        operation_ns: 0.41,
        function_ns: 2.0,
        syscall_ns: 120.5,
    };
    let dataset = Dataset::with_direct(measured.into_series("Direct", ThemeToken::series(0)))
        .expect("measured timings are positive");
    assert_eq!(dataset.series()[0].values, [0.41, 2.0, 120.5]);

    let commands = render_bar_chart(&dataset, &ChartStyle::default(), &Viewport::default())
        .expect("measured chart renders");
    assert_eq!(
        texts_in_group(&commands, "labels"),
        ["0.410", "2.000", "120.500", "4.321", "29.535", "387.902"]
    );
    assert_eq!(texts_in_group(&commands, "legend"), ["Direct", "VM"]);
}

#[test]
fn svg_export_contains_chart_text() {
    let svg = render_svg(&reference_commands(), 640.0, 480.0, false);
    for needle in [
        "Time Comparison",
        "Test Type",
        "Direct",
        "VM",
        "29.535",
        "387.902",
        r##"fill="#708090""##,
        r##"fill="#800000""##,
    ] {
        assert!(svg.contains(needle), "SVG is missing {needle}");
    }
}
