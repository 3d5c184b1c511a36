//! Color themes for the chat client.
//!
//! # Surface Hierarchy
//!
//! - `surface[0]`: App background
//! - `surface[1]`: Sidebar and panel backgrounds
//! - `surface[2]`: Feed background
//! - `surface[3]`: Hovered rows
//! - `surface[4]`: Selected sidebar entries
//! - `surface[5]`: Toolbars and reaction chips
//! - `surface[6]`: Dialogs and popovers
//!
//! Text comes in three weights (`text_primary`, `text_secondary`,
//! `text_muted`) and borders in two (`border_subtle`, `border_medium`).

use eframe::egui::Color32;

#[derive(Clone, Debug)]
pub struct ChatTheme {
    pub name: String,
    pub surface: [Color32; 7],
    pub accent: Color32,
    pub accent_hover: Color32,
    /// Fill of reaction chips the viewer is part of
    pub accent_soft: Color32,
    pub success: Color32,
    pub error: Color32,
    pub link: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    pub border_subtle: Color32,
    pub border_medium: Color32,
}

impl ChatTheme {
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            surface: [
                Color32::from_rgb(10, 10, 15),
                Color32::from_rgb(19, 19, 26),
                Color32::from_rgb(28, 28, 38),
                Color32::from_rgb(37, 37, 50),
                Color32::from_rgb(46, 46, 62),
                Color32::from_rgb(56, 56, 74),
                Color32::from_rgb(66, 66, 86),
            ],
            accent: Color32::from_rgb(88, 101, 242),
            accent_hover: Color32::from_rgb(71, 82, 196),
            accent_soft: Color32::from_rgba_unmultiplied(88, 101, 242, 60),
            success: Color32::from_rgb(67, 181, 129),
            error: Color32::from_rgb(240, 71, 71),
            link: Color32::from_rgb(0, 175, 244),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(185, 187, 190),
            text_muted: Color32::from_rgb(114, 118, 125),
            border_subtle: Color32::from_rgb(32, 34, 37),
            border_medium: Color32::from_rgb(47, 49, 54),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            surface: [
                Color32::from_rgb(255, 255, 255),
                Color32::from_rgb(246, 246, 247),
                Color32::from_rgb(242, 243, 245),
                Color32::from_rgb(227, 229, 232),
                Color32::from_rgb(212, 215, 220),
                Color32::from_rgb(196, 201, 208),
                Color32::from_rgb(181, 187, 196),
            ],
            accent: Color32::from_rgb(88, 101, 242),
            accent_hover: Color32::from_rgb(71, 82, 196),
            accent_soft: Color32::from_rgba_unmultiplied(88, 101, 242, 40),
            success: Color32::from_rgb(67, 181, 129),
            error: Color32::from_rgb(240, 71, 71),
            link: Color32::from_rgb(18, 100, 163),
            text_primary: Color32::from_rgb(6, 6, 7),
            text_secondary: Color32::from_rgb(79, 86, 96),
            text_muted: Color32::from_rgb(116, 127, 141),
            border_subtle: Color32::from_rgb(230, 232, 236),
            border_medium: Color32::from_rgb(210, 213, 219),
        }
    }

    /// Theme for a persisted setting value ("dark" or "light").
    pub fn from_setting(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}

const MEMBER_COLORS: [Color32; 12] = [
    Color32::from_rgb(231, 76, 60),
    Color32::from_rgb(46, 204, 113),
    Color32::from_rgb(52, 152, 219),
    Color32::from_rgb(155, 89, 182),
    Color32::from_rgb(241, 196, 15),
    Color32::from_rgb(230, 126, 34),
    Color32::from_rgb(26, 188, 156),
    Color32::from_rgb(236, 100, 166),
    Color32::from_rgb(41, 128, 185),
    Color32::from_rgb(39, 174, 96),
    Color32::from_rgb(211, 84, 0),
    Color32::from_rgb(102, 178, 255),
];

/// Stable avatar color for a member, FNV-1a over the member id.
pub fn member_color(key: &str) -> Color32 {
    let mut hash: u64 = 1469598103934665603u64;
    for b in key.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(1099511628211u64);
    }
    MEMBER_COLORS[(hash as usize) % MEMBER_COLORS.len()]
}
