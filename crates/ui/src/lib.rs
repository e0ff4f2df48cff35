mod app;
mod renderer;
mod theme;

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use osm_chart_core::Dataset;
use osm_chart_core::svg::render_svg;
use osm_chart_core::views::{ChartStyle, render_bar_chart};
use osm_chart_protocol::Viewport;

pub use app::ChartApp;
pub use theme::ThemeMode;

/// Render `dataset` at `viewport` size and write it to `path` as SVG.
pub fn write_svg(dataset: &Dataset, viewport: &Viewport, dark: bool, path: &Path) -> Result<()> {
    let commands = render_bar_chart(dataset, &ChartStyle::default(), viewport)?;
    let svg = render_svg(&commands, viewport.width, viewport.height, dark);
    std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), commands = commands.len(), "wrote SVG chart");
    Ok(())
}

/// Open the chart window and block until it is closed.
pub fn show(dataset: Dataset, mode: ThemeMode) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Time Comparison")
            .with_inner_size([640.0, 560.0]),
        ..Default::default()
    };

    tracing::info!("opening chart window");
    eframe::run_native(
        "osm-chart",
        options,
        Box::new(move |cc| Ok(Box::new(ChartApp::new(cc, dataset, mode)))),
    )
    .map_err(|e| anyhow!("chart window failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_svg_creates_file() {
        let dataset = Dataset::reference().expect("reference data set is valid");
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("chart.svg");
        write_svg(&dataset, &Viewport::default(), false, &path).expect("SVG is written");

        let svg = std::fs::read_to_string(&path).expect("SVG is readable");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Time Comparison"));
    }

    #[test]
    fn write_svg_reports_bad_path() {
        let dataset = Dataset::reference().expect("reference data set is valid");
        let path = Path::new("/nonexistent-dir/osm-chart/out.svg");
        let err = write_svg(&dataset, &Viewport::default(), false, path);
        assert!(err.is_err_and(|e| e.to_string().contains("writing")));
    }
}
