//! Comment composer — the top-level submission form below the feed.

use egui::{self, RichText, Vec2};

use crate::state::UiState;
use crate::theme::*;

/// Render the comment form. Returns Some(text) when the user submits a
/// non-empty comment; the field is cleared on submission.
pub fn composer_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.label(RichText::new("Comment:").color(TEXT_SECONDARY).small());
            ui.add(
                egui::TextEdit::multiline(&mut state.composer_text)
                    .hint_text("Share a question or comment...")
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(4.0);

            let send_enabled = !state.composer_text.trim().is_empty();
            let send_btn = ui.add_enabled(
                send_enabled,
                egui::Button::new(RichText::new("Submit").color(TEXT_PRIMARY))
                    .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(80.0, 0.0)),
            );
            if send_btn.clicked() {
                submitted = Some(state.composer_text.trim().to_string());
                state.composer_text.clear();
            }
        });

    submitted
}
