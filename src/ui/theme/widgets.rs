//! Avatars.

use eframe::egui::{self, Color32};

use super::colors::member_color;

/// First letter of a display name, uppercased, for fallback avatars.
pub fn avatar_initial(name: &str) -> String {
    name.chars()
        .find(|c| c.is_alphanumeric())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// Render a rounded-square avatar with the member's initial.
///
/// Remote images are not fetched; `color_key` (the member id) picks the
/// background so the same member keeps the same color everywhere.
pub fn render_avatar(ui: &mut egui::Ui, name: &str, color_key: &str, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    let painter = ui.painter();

    painter.rect_filled(
        rect.translate(egui::vec2(0.0, 1.0)),
        size * 0.2,
        Color32::from_black_alpha(30),
    );
    painter.rect_filled(rect, size * 0.2, member_color(color_key));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        avatar_initial(name),
        egui::FontId::proportional(size * 0.45),
        Color32::WHITE,
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_initial() {
        assert_eq!(avatar_initial("alice"), "A");
        assert_eq!(avatar_initial("  _bob"), "B");
        assert_eq!(avatar_initial(""), "?");
    }
}
