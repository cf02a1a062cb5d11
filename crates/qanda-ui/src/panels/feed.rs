//! Live-comments feed — top-level messages, newest first, each with a
//! collapsible reply thread.

use egui::{self, CollapsingHeader, RichText};

use qanda_core::MessageBoard;
use qanda_types::message::{Message, SYSTEM_AUTHOR};

use crate::state::UiState;
use crate::theme::*;

/// A submission collected from the feed. Rendering never mutates the
/// board; the app layer applies these after the panels have run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedAction {
    /// A reply thread was expanded for the first time
    OpenThread { parent: String },
    /// The reply form under `parent` was submitted
    SubmitReply {
        parent: String,
        text: String,
        /// "Send also in main thread" — carried but not acted on; the
        /// flag's semantics are undecided
        include_main: bool,
    },
}

/// Render the feed for a session. Returns the actions to apply.
pub fn feed_panel(
    ui: &mut egui::Ui,
    board: &MessageBoard,
    session: &str,
    state: &mut UiState,
) -> Vec<FeedAction> {
    let mut actions = Vec::new();

    ui.heading(RichText::new("Live Comments").color(TEXT_PRIMARY).strong());

    for msg in board.main_messages(session) {
        ui.separator();
        render_header(ui, msg, true);
        render_body(ui, msg, false);
        render_thread(ui, board, msg, state, &mut actions);
    }
    ui.separator();

    actions
}

/// `[timestamp] author:` — replies render one step smaller.
fn render_header(ui: &mut egui::Ui, msg: &Message, top_level: bool) {
    let size = if top_level { 15.0 } else { 13.0 };
    let author_color = if msg.author == SYSTEM_AUTHOR {
        SYSTEM_ACCENT
    } else {
        AUTHOR_ACCENT
    };
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("[{}]", msg.timestamp()))
                .color(TEXT_SECONDARY)
                .size(size)
                .monospace(),
        );
        ui.label(
            RichText::new(format!("{}:", msg.author))
                .color(author_color)
                .size(size)
                .italics()
                .strong(),
        );
    });
}

/// Message body: quote-formatted by default, literal text in raw mode.
fn render_body(ui: &mut egui::Ui, msg: &Message, raw: bool) {
    if raw {
        ui.label(RichText::new(&msg.text).color(TEXT_PRIMARY).monospace());
        return;
    }
    egui::Frame::default()
        .fill(QUOTE_BG)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(RichText::new(msg.quoted()).color(TEXT_PRIMARY));
        });
}

/// The collapsible reply section of a top-level message: existing replies
/// oldest first, then the reply form.
fn render_thread(
    ui: &mut egui::Ui,
    board: &MessageBoard,
    parent: &Message,
    state: &mut UiState,
    actions: &mut Vec<FeedAction>,
) {
    let summary = board.thread_summary(&parent.session, &parent.id);
    let title = if summary.reply_count > 0 {
        format!("Replies 🧵 ({})", summary.reply_count)
    } else {
        "Replies 🧵".to_string()
    };

    CollapsingHeader::new(RichText::new(title).color(TEXT_SECONDARY))
        .id_salt(("thread", &parent.id))
        .show(ui, |ui| {
            if !board.thread_exists(&parent.session, &parent.id) {
                actions.push(FeedAction::OpenThread {
                    parent: parent.id.clone(),
                });
            }

            for reply in board.replies(&parent.session, &parent.id) {
                ui.add_space(4.0);
                render_header(ui, reply, false);
                render_body(ui, reply, false);
            }

            ui.add_space(6.0);
            let draft = state.draft_mut(&parent.id);
            ui.label(
                RichText::new("Reply to message:")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            let input = ui.add(
                egui::TextEdit::singleline(&mut draft.text)
                    .hint_text("Write a reply...")
                    .desired_width(f32::INFINITY),
            );
            ui.checkbox(&mut draft.include_main, "Send also in main thread");

            let submit = ui.add(
                egui::Button::new(RichText::new("Submit").color(TEXT_PRIMARY))
                    .fill(ACCENT)
                    .corner_radius(PANEL_ROUNDING),
            );
            let entered = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if (submit.clicked() || entered) && !draft.text.trim().is_empty() {
                actions.push(FeedAction::SubmitReply {
                    parent: parent.id.clone(),
                    text: draft.text.trim().to_string(),
                    include_main: draft.include_main,
                });
            }
        });
}
