//! Message body styling: rich-text spans with URL detection.

use eframe::egui;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::rich_text::{self, Span};
use crate::ui::theme::ChatTheme;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s]+").expect("URL regex pattern is valid"));

/// Split spans further so bare URLs become links of their own.
pub(crate) fn linkify(spans: Vec<Span>) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.link.is_some() || span.code {
            out.push(span);
            continue;
        }
        let mut last = 0;
        for m in URL_RE.find_iter(&span.text) {
            if m.start() > last {
                out.push(Span {
                    text: span.text[last..m.start()].to_string(),
                    ..span.clone()
                });
            }
            out.push(Span {
                text: m.as_str().to_string(),
                link: Some(m.as_str().to_string()),
                ..span.clone()
            });
            last = m.end();
        }
        if last < span.text.len() {
            out.push(Span {
                text: span.text[last..].to_string(),
                ..span
            });
        }
    }
    out
}

/// Render a message body, followed by the "(edited)" marker when set.
pub(crate) fn render_body(ui: &mut egui::Ui, body: &str, edited: bool, theme: &ChatTheme) {
    let spans = linkify(rich_text::parse(body));

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;

        for span in spans {
            if let Some(url) = &span.link {
                ui.hyperlink_to(egui::RichText::new(&span.text).color(theme.link), url);
                continue;
            }
            let mut rich = egui::RichText::new(&span.text).color(theme.text_primary);
            if span.bold {
                rich = rich.strong();
            }
            if span.italic {
                rich = rich.italics();
            }
            if span.code {
                rich = rich.code();
            }
            ui.label(rich);
        }

        if edited {
            ui.label(
                egui::RichText::new(" (edited)")
                    .small()
                    .color(theme.text_muted),
            );
        }
    });
}
