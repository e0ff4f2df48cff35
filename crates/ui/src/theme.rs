use osm_chart_protocol::ThemeToken;

/// Resolved RGBA color for egui rendering.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ResolvedColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            ThemeMode::Dark => egui::Visuals::dark(),
            ThemeMode::Light => egui::Visuals::light(),
        }
    }
}

pub fn resolve(token: ThemeToken, mode: ThemeMode) -> egui::Color32 {
    match mode {
        ThemeMode::Dark => resolve_dark(token),
        ThemeMode::Light => resolve_light(token),
    }
    .to_color32()
}

fn resolve_dark(token: ThemeToken) -> ResolvedColor {
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(0x18, 0x18, 0x18),
        PlotBackground => ResolvedColor::rgb(0x1f, 0x1f, 0x1f),
        PlotBorder | AxisLine => ResolvedColor::rgb(0xbd, 0xbd, 0xbd),
        GridLine => ResolvedColor::rgb(0x3a, 0x3a, 0x3a),

        TextPrimary => ResolvedColor::rgb(0xec, 0xec, 0xec),
        TextSecondary => ResolvedColor::rgb(0x9e, 0x9e, 0x9e),

        SeriesPrimary => ResolvedColor::rgb(0x8c, 0x9d, 0xb0), // lightened slate gray
        SeriesSecondary => ResolvedColor::rgb(0xb0, 0x3a, 0x3a), // lightened maroon
        BarEdge => ResolvedColor::rgb(0, 0, 0),

        LegendBackground => ResolvedColor::rgb(0x26, 0x26, 0x26),
        LegendBorder => ResolvedColor::rgb(0x61, 0x61, 0x61),
    }
}

fn resolve_light(token: ThemeToken) -> ResolvedColor {
    use ThemeToken::*;
    match token {
        Background | PlotBackground => ResolvedColor::rgb(255, 255, 255),
        PlotBorder | AxisLine => ResolvedColor::rgb(0, 0, 0),
        GridLine => ResolvedColor::rgb(224, 224, 224),

        TextPrimary => ResolvedColor::rgb(0, 0, 0),
        TextSecondary => ResolvedColor::rgb(51, 51, 51),

        SeriesPrimary => ResolvedColor::rgb(112, 128, 144), // slategray
        SeriesSecondary => ResolvedColor::rgb(128, 0, 0),   // maroon
        BarEdge => ResolvedColor::rgb(0, 0, 0),

        LegendBackground => ResolvedColor::rgb(255, 255, 255),
        LegendBorder => ResolvedColor::rgb(204, 204, 204),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_series_colors_match_named_colors() {
        assert_eq!(
            resolve(ThemeToken::SeriesPrimary, ThemeMode::Light),
            egui::Color32::from_rgb(112, 128, 144)
        );
        assert_eq!(
            resolve(ThemeToken::SeriesSecondary, ThemeMode::Light),
            egui::Color32::from_rgb(128, 0, 0)
        );
    }

    #[test]
    fn bar_edges_are_black_in_both_modes() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            assert_eq!(resolve(ThemeToken::BarEdge, mode), egui::Color32::BLACK);
        }
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }
}
