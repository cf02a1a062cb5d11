//! Session panel — session key, display name, storage backend.

use egui::{self, RichText};

use qanda_types::config::{BoardConfig, StorageBackendType};

use crate::theme::*;

/// What the caller should do after rendering the session panel
pub enum SessionAction {
    /// Nothing changed
    None,
    /// A field was changed; persist the config
    Changed,
    /// Editing of the session key finished; switch if it differs
    SessionEdited,
}

/// Render the session panel. Returns an action for the caller to handle.
pub fn session_panel(
    ui: &mut egui::Ui,
    config: &mut BoardConfig,
    backend_name: &str,
) -> SessionAction {
    let mut changed = false;
    let mut session_edited = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Session").color(TEXT_PRIMARY));
            ui.separator();

            ui.label(RichText::new("Session key").color(TEXT_SECONDARY).small());
            let key_edit = ui.text_edit_singleline(&mut config.session_key);
            if key_edit.changed() {
                changed = true;
            }
            if key_edit.lost_focus() {
                session_edited = true;
            }

            ui.add_space(4.0);

            ui.label(
                RichText::new("Display name")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            let name_edit = egui::TextEdit::singleline(&mut config.author)
                .hint_text("Unknown");
            if ui.add(name_edit).changed() {
                changed = true;
            }

            ui.add_space(8.0);

            ui.label(RichText::new("Storage").color(ACCENT).strong());
            egui::ComboBox::from_id_salt("storage_backend")
                .selected_text(config.storage.backend.label())
                .show_ui(ui, |ui| {
                    for backend in StorageBackendType::all() {
                        if ui
                            .selectable_value(
                                &mut config.storage.backend,
                                backend.clone(),
                                backend.label(),
                            )
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });
            ui.label(
                RichText::new(format!("Active backend: {}", backend_name))
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            ui.label(
                RichText::new("Backend changes take effect on next launch")
                    .color(TEXT_SECONDARY)
                    .small()
                    .italics(),
            );
        });

    if session_edited {
        SessionAction::SessionEdited
    } else if changed {
        SessionAction::Changed
    } else {
        SessionAction::None
    }
}
