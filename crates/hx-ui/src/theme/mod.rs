use egui::{Color32, Context, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};
use std::collections::BTreeMap;

/// Theme configuration
pub struct Theme {
    pub name: String,
    pub dark_mode: bool,
}

impl Theme {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            name: if dark_mode { "Heritage Dusk" } else { "Heritage Sandstone" }.to_string(),
            dark_mode,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Apply the sandstone (light) or dusk (dark) theme
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();

    let (mut visuals, panel_bg, widget_bg, text_color) = if theme.dark_mode {
        (
            Visuals::dark(),
            Color32::from_rgb(36, 30, 28),
            Color32::from_rgb(52, 44, 40),
            Color32::from_rgb(236, 226, 214),
        )
    } else {
        (
            Visuals::light(),
            Color32::from_rgb(250, 245, 236),
            Color32::from_rgb(240, 230, 214),
            Color32::from_rgb(48, 36, 28),
        )
    };
    let accent = accent_color();

    visuals.window_fill = panel_bg;
    visuals.panel_fill = panel_bg;
    visuals.faint_bg_color = widget_bg;

    for widgets in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widgets.fg_stroke = Stroke::new(1.0, text_color);
        widgets.rounding = Rounding::same(4.0);
    }
    visuals.widgets.inactive.bg_fill = widget_bg;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, accent);

    visuals.selection.bg_fill = accent.linear_multiply(0.35);
    visuals.selection.stroke = Stroke::new(1.0, accent);
    visuals.hyperlink_color = link_color(theme.dark_mode);

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

/// Saffron accent
pub fn accent_color() -> Color32 {
    Color32::from_rgb(232, 128, 36)
}

pub fn link_color(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(120, 190, 200)
    } else {
        Color32::from_rgb(22, 110, 122)
    }
}

/// Color for inline error panels
pub fn error_color() -> Color32 {
    Color32::from_rgb(200, 60, 50)
}
