use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    PlotBackground,
    PlotBorder,

    AxisLine,
    GridLine,

    TextPrimary,
    TextSecondary,

    // Bars
    SeriesPrimary,
    SeriesSecondary,
    BarEdge,

    // Legend
    LegendBackground,
    LegendBorder,
}

impl ThemeToken {
    /// Fill token for the series at `index`, cycling through the palette.
    pub fn series(index: usize) -> Self {
        const PALETTE: [ThemeToken; 2] = [ThemeToken::SeriesPrimary, ThemeToken::SeriesSecondary];
        PALETTE[index % PALETTE.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_palette_cycles() {
        assert_eq!(ThemeToken::series(0), ThemeToken::SeriesPrimary);
        assert_eq!(ThemeToken::series(1), ThemeToken::SeriesSecondary);
        assert_eq!(ThemeToken::series(2), ThemeToken::SeriesPrimary);
    }
}
