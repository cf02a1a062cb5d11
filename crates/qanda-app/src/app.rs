//! Main egui application — composes the panels and owns the board.
//!
//! Every frame re-reads the board and rebuilds the whole view. Panels
//! return submissions instead of mutating anything; this layer applies
//! them to the board, persists a snapshot, and requests a repaint so the
//! new state shows up immediately.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, ScrollArea, SidePanel, TopBottomPanel};

use qanda_core::board::MessageBoard;
use qanda_core::event_bus::EventBus;
use qanda_core::ports::StatePort;
use qanda_core::snapshot::{self, BoardSnapshot};
use qanda_platform::storage::open_storage;
use qanda_types::config::BoardConfig;
use qanda_ui::panels::feed::{self, FeedAction};
use qanda_ui::panels::session::{self, SessionAction};
use qanda_ui::panels::composer;
use qanda_ui::state::UiState;
use qanda_ui::theme;

/// The main application state
pub struct QandaApp {
    ui_state: UiState,
    event_bus: EventBus,
    board: MessageBoard,
    storage: Rc<dyn StatePort>,
    /// Session whose main thread the viewer currently sees
    active_session: String,
    /// Slots filled by async restore, applied at the top of a frame
    restored_config: Rc<RefCell<Option<BoardConfig>>>,
    restored_board: Rc<RefCell<Option<BoardSnapshot>>>,
    first_frame: bool,
}

impl QandaApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = BoardConfig::default();
        let event_bus = EventBus::new();
        let storage = open_storage(&config.storage.backend);
        let active_session = config.session_key.clone();
        let board = MessageBoard::new(config, event_bus.clone());

        let app = Self {
            ui_state: UiState::new(),
            event_bus,
            board,
            storage: storage.clone(),
            active_session: active_session.clone(),
            restored_config: Rc::new(RefCell::new(None)),
            restored_board: Rc::new(RefCell::new(None)),
            first_frame: true,
        };

        Self::restore_state(
            storage,
            active_session,
            app.restored_config.clone(),
            app.restored_board.clone(),
        );

        app
    }

    /// Run a storage future. Browser: queued behind the frame via
    /// `spawn_local`. Native: the memory backend resolves immediately, so
    /// block in place.
    fn spawn(fut: impl Future<Output = ()> + 'static) {
        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(fut);
        #[cfg(not(target_arch = "wasm32"))]
        futures::executor::block_on(fut);
    }

    /// Restore config and the board of the configured session from storage.
    fn restore_state(
        storage: Rc<dyn StatePort>,
        session: String,
        config_slot: Rc<RefCell<Option<BoardConfig>>>,
        board_slot: Rc<RefCell<Option<BoardSnapshot>>>,
    ) {
        Self::spawn(async move {
            let mut session = session;
            match snapshot::load_config(storage.as_ref()).await {
                Ok(Some(config)) => {
                    log::info!("Config restored from storage");
                    session = config.session_key.clone();
                    *config_slot.borrow_mut() = Some(config);
                }
                Ok(None) => {}
                Err(e) => log::warn!("Config restore failed: {}", e),
            }
            match snapshot::load_snapshot(storage.as_ref(), &session).await {
                Ok(Some(snap)) => {
                    log::info!("Session '{}' restored from storage", session);
                    *board_slot.borrow_mut() = Some(snap);
                }
                Ok(None) => {}
                Err(e) => log::warn!("Snapshot restore failed: {}", e),
            }
        });
    }

    /// Save the active session's threads (best-effort, fire-and-forget).
    fn persist_board(&self, session: &str) {
        let snapshot = self.board.snapshot(session);
        let storage = self.storage.clone();
        Self::spawn(async move {
            if let Err(e) = snapshot::save_snapshot(storage.as_ref(), &snapshot).await {
                log::warn!("Snapshot save failed: {}", e);
            }
        });
    }

    fn persist_config(&self) {
        let config = self.board.config().clone();
        let storage = self.storage.clone();
        Self::spawn(async move {
            if let Err(e) = snapshot::save_config(storage.as_ref(), &config).await {
                log::warn!("Config save failed: {}", e);
            }
        });
    }

    /// Post a top-level comment and surface it on the next frame.
    fn submit_comment(&mut self, text: &str, ctx: &egui::Context) {
        let session = self.active_session.clone();
        let author = self.board.config().posting_author().map(str::to_string);
        if self
            .board
            .post_comment(&session, author.as_deref(), text)
            .is_some()
        {
            self.persist_board(&session);
            ctx.request_repaint();
        }
    }

    fn apply_feed_actions(&mut self, actions: Vec<FeedAction>, ctx: &egui::Context) {
        let session = self.active_session.clone();
        let author = self.board.config().posting_author().map(str::to_string);
        for action in actions {
            match action {
                FeedAction::OpenThread { parent } => {
                    self.board.open_thread(&session, &parent);
                }
                // The cross-post flag is recorded by the form but not
                // acted on; its semantics are undecided
                FeedAction::SubmitReply {
                    parent,
                    text,
                    include_main: _,
                } => match self.board.post_reply(&session, &parent, author.as_deref(), &text) {
                    Ok(Some(_)) => {
                        self.ui_state.clear_draft(&parent);
                        self.persist_board(&session);
                        ctx.request_repaint();
                    }
                    Ok(None) => {}
                    Err(e) => log::warn!("Reply rejected: {}", e),
                },
            }
        }
    }

    /// Switch to the session key the viewer just finished editing.
    fn switch_session(&mut self, ctx: &egui::Context) {
        let target = self.board.config().session_key.trim().to_string();
        if target.is_empty() || target == self.active_session {
            return;
        }
        log::info!("Switching to session '{}'", target);
        self.active_session = target.clone();
        self.persist_config();

        // Pull any stored state for the new session before it gets seeded
        let storage = self.storage.clone();
        let slot = self.restored_board.clone();
        let repaint_ctx = ctx.clone();
        Self::spawn(async move {
            match snapshot::load_snapshot(storage.as_ref(), &target).await {
                Ok(Some(snap)) => {
                    *slot.borrow_mut() = Some(snap);
                    repaint_ctx.request_repaint();
                }
                Ok(None) => {}
                Err(e) => log::warn!("Snapshot restore failed: {}", e),
            }
        });
        ctx.request_repaint();
    }
}

impl eframe::App for QandaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Apply async restore results before reading the board
        if let Some(config) = self.restored_config.borrow_mut().take() {
            self.active_session = config.session_key.clone();
            *self.board.config_mut() = config;
        }
        if let Some(snap) = self.restored_board.borrow_mut().take() {
            self.board.restore(snap);
        }

        // Seed the welcome post on first access of the session
        let session = self.active_session.clone();
        self.board.ensure_session(&session);

        // Drain board events into the status line
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Session Q&A")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                ui.label(
                    RichText::new(format!(
                        "Session: {} | {} messages",
                        session,
                        self.board.message_count(&session)
                    ))
                    .color(theme::TEXT_SECONDARY)
                    .small(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .selectable_label(self.ui_state.show_session_panel, "Session")
                        .clicked()
                    {
                        self.ui_state.show_session_panel = !self.ui_state.show_session_panel;
                    }
                    ui.label(
                        RichText::new(&self.ui_state.status_text)
                            .color(theme::TEXT_SECONDARY)
                            .small(),
                    );
                });
            });
        });

        // ── Session side panel ───────────────────────────────
        if self.ui_state.show_session_panel {
            SidePanel::right("session_panel")
                .min_width(240.0)
                .max_width(320.0)
                .show(ctx, |ui| {
                    let backend = self.storage.backend_name().to_string();
                    match session::session_panel(ui, self.board.config_mut(), &backend) {
                        SessionAction::Changed => self.persist_config(),
                        SessionAction::SessionEdited => self.switch_session(ctx),
                        SessionAction::None => {}
                    }
                });
        }

        // ── Main content ─────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            let composer_height = 130.0;
            let feed_height = (ui.available_height() - composer_height).max(120.0);

            let mut feed_actions = Vec::new();
            ScrollArea::vertical()
                .max_height(feed_height)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    feed_actions =
                        feed::feed_panel(ui, &self.board, &session, &mut self.ui_state);
                });

            ui.add_space(4.0);
            if let Some(text) = composer::composer_panel(ui, &mut self.ui_state) {
                self.submit_comment(&text, ctx);
            }
            self.apply_feed_actions(feed_actions, ctx);
        });
    }
}
