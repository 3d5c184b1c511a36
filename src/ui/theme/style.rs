//! Text styles and global egui style.

use eframe::egui::{self, Color32, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

use super::colors::ChatTheme;

/// Named text styles used by the feed painter.
pub const STYLE_AUTHOR: &str = "author";
pub const STYLE_TIMESTAMP: &str = "timestamp";
pub const STYLE_SECTION_HEADER: &str = "section_header";

/// Text hierarchy: 14px body with smaller metadata styles
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(11.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(13.0, Proportional)),
        (TextStyle::Heading, FontId::new(18.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, Monospace)),
        (TextStyle::Name(STYLE_AUTHOR.into()), FontId::new(14.0, Proportional)),
        (TextStyle::Name(STYLE_TIMESTAMP.into()), FontId::new(11.0, Proportional)),
        (TextStyle::Name(STYLE_SECTION_HEADER.into()), FontId::new(11.0, Proportional)),
    ]
    .into()
}

/// Apply visuals, spacing and widget styling for `theme` to the context.
///
/// Called at startup and whenever the theme is switched.
pub fn apply_app_style(ctx: &egui::Context, theme: &ChatTheme) {
    let mut visuals = if theme.name == "Light" {
        egui::Visuals::light()
    } else {
        egui::Visuals::dark()
    };
    visuals.hyperlink_color = theme.link;
    visuals.extreme_bg_color = theme.surface[1];
    visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(88, 101, 242, 100);
    visuals.widgets.inactive.bg_stroke = egui::Stroke::NONE;
    visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::NONE;
    visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
    visuals.widgets.active.bg_fill = theme.accent;
    visuals.widgets.active.weak_bg_fill = theme.accent;
    visuals.widgets.active.corner_radius = egui::CornerRadius::same(6);
    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.text_styles = configure_text_styles();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    ctx.set_style(style);
}
