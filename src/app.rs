//! Main application UI.
//! Renders the card, navigation, unit management dialogs and the assistant panel.

use crate::clipboard::SystemClipboard;
use crate::database::SqliteStorage;
use crate::error::{GenerationError, TrainerError};
use crate::export::json::{export_json_to_path, import_json};
use crate::gateway::worker::{TutorEvent, TutorWorker};
use crate::models::FlashCard;
use crate::models::library;
use crate::trainer::Trainer;
use eframe::egui;
use std::time::{Duration, Instant};
use url::Url;

/// Time the card gets to turn back before the next one is shown.
const FLIP_BACK_DELAY: Duration = Duration::from_millis(150);
const TOAST_DURATION: Duration = Duration::from_secs(3);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(214, 40, 40);

#[derive(Clone, Copy)]
enum Step {
    Next,
    Previous,
}

/// Main application state
pub struct BabushkaApp {
    trainer: Trainer<SqliteStorage>,
    worker: TutorWorker,
    clipboard: SystemClipboard,
    share_base: Url,

    pending_step: Option<(Step, Instant)>,
    toast: Option<(String, Instant)>,
    message: Option<String>,
    pending_delete: Option<String>,

    show_create_dialog: bool,
    show_library_dialog: bool,
    show_assistant: bool,

    new_unit_name: String,
    draft_card: FlashCard,
    draft_cards: Vec<FlashCard>,
    ai_topic: String,
    share_link_input: String,
    library_search: String,
    assistant_query: String,
}

/// User-facing text for a failed generation.
fn generation_message(error: &TrainerError) -> String {
    match error {
        TrainerError::Generation(GenerationError::CredentialMissing) => {
            "Babushka needs an API key to think of new words. \
             Set GEMINI_API_KEY or start the app with --api-key."
                .to_string()
        }
        _ => "Babushka had trouble thinking of that topic. Try again!".to_string(),
    }
}

/// Bigger text for short words, like the front of a paper card.
fn front_text_size(text: &str) -> f32 {
    match text.chars().count() {
        n if n > 25 => 20.0,
        n if n > 15 => 30.0,
        n if n > 8 => 44.0,
        _ => 56.0,
    }
}

impl eframe::App for BabushkaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_tutor_events();
        self.advance_pending_step();
        self.handle_keys(ctx);

        self.render_header(ctx);
        if self.show_assistant {
            self.render_assistant(ctx);
        }
        self.render_card_screen(ctx);

        self.render_create_dialog(ctx);
        self.render_library_dialog(ctx);
        self.render_delete_dialog(ctx);
        self.render_generating_overlay(ctx);
        self.render_message(ctx);
        self.render_toast(ctx);

        // Keep polling while something is in flight or about to change
        if self.trainer.is_generating()
            || self.trainer.is_asking()
            || self.pending_step.is_some()
            || self.toast.is_some()
        {
            ctx.request_repaint_after(Duration::from_millis(50));
        }
    }
}

impl BabushkaApp {
    /// Creates the app and consumes a share link passed on start-up, if any.
    pub fn new(
        trainer: Trainer<SqliteStorage>,
        worker: TutorWorker,
        share_base: Url,
        startup_link: Option<String>,
    ) -> Self {
        let mut app = Self {
            trainer,
            worker,
            clipboard: SystemClipboard::default(),
            share_base,
            pending_step: None,
            toast: None,
            message: None,
            pending_delete: None,
            show_create_dialog: false,
            show_library_dialog: false,
            show_assistant: false,
            new_unit_name: String::new(),
            draft_card: FlashCard::default(),
            draft_cards: Vec::new(),
            ai_topic: String::new(),
            share_link_input: String::new(),
            library_search: String::new(),
            assistant_query: String::new(),
        };
        if let Some(link) = startup_link {
            app.import_share_link(&link);
        }
        app
    }

    fn show_toast(&mut self, text: impl Into<String>) {
        self.toast = Some((text.into(), Instant::now()));
    }

    fn import_share_link(&mut self, link: &str) {
        match self.trainer.import_share_link(link) {
            Ok(_) => {
                self.pending_step = None;
                self.show_toast("Babushka received a shared gift for you! Check your collection.");
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring shared unit");
                self.show_toast("That share link could not be read, dearie.");
            }
        }
    }

    fn select_unit(&mut self, id: &str) {
        self.pending_step = None;
        self.trainer.select_unit(id);
    }

    /// Turns the card face down now and moves once it has turned.
    fn queue_step(&mut self, step: Step) {
        if !self.trainer.session().can_navigate() {
            return;
        }
        self.trainer.conceal();
        self.pending_step = Some((step, Instant::now()));
    }

    fn advance_pending_step(&mut self) {
        if let Some((step, queued_at)) = self.pending_step {
            if queued_at.elapsed() >= FLIP_BACK_DELAY {
                self.pending_step = None;
                match step {
                    Step::Next => self.trainer.next(),
                    Step::Previous => self.trainer.previous(),
                }
            }
        }
    }

    fn start_generation(&mut self, topic: &str, icon: Option<String>) {
        if let Some(topic) = self.trainer.begin_generation(topic) {
            self.worker.request_deck(topic, icon);
        }
    }

    fn drain_tutor_events(&mut self) {
        for event in self.worker.poll() {
            match event {
                TutorEvent::DeckGenerated {
                    topic,
                    icon,
                    result,
                } => match self.trainer.finish_generation(&topic, icon, result) {
                    Ok(_) => {
                        self.pending_step = None;
                        self.ai_topic.clear();
                        self.show_create_dialog = false;
                        self.show_library_dialog = false;
                    }
                    Err(e) => {
                        tracing::warn!(topic = %topic, error = %e, "generation failed");
                        self.message = Some(generation_message(&e));
                    }
                },
                TutorEvent::Answered { answer } => self.trainer.finish_ask(answer),
            }
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        // Typing in a text field must not flip or move cards
        if ctx.memory(|m| m.focused().is_some()) {
            return;
        }
        let (flip, next, previous) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::ArrowLeft),
            )
        });
        if flip {
            self.trainer.toggle_flip();
        }
        if next {
            self.queue_step(Step::Next);
        }
        if previous {
            self.queue_step(Step::Previous);
        }
    }

    /// Title, unit picker and the dialog buttons
    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new("Babushka").size(32.0).strong().color(ACCENT));
                ui.label(egui::RichText::new("MASTER RUSSIAN SURVIVAL SPEECH").small().weak());
            });
            ui.add_space(8.0);

            let units = self.trainer.store().list_units();
            let active_id = self.trainer.session().active_unit_id().to_string();
            let active_label = self.trainer.store().label(&active_id);

            let mut action_select: Option<String> = None;

            ui.horizontal(|ui| {
                egui::ComboBox::from_id_salt("unit_picker")
                    .width(300.0)
                    .selected_text(active_label)
                    .show_ui(ui, |ui| {
                        for (id, label) in &units {
                            if ui.selectable_label(*id == active_id, label.as_str()).clicked() {
                                action_select = Some(id.clone());
                            }
                        }
                    });

                if ui.button("📚 Archive").on_hover_text("Unit Archive").clicked() {
                    self.show_library_dialog = true;
                }
                if ui.button("➕ New").on_hover_text("Add New Unit").clicked() {
                    self.show_create_dialog = true;
                }
                if ui
                    .selectable_label(self.show_assistant, "💬 Ask Babushka")
                    .clicked()
                {
                    self.show_assistant = !self.show_assistant;
                }
            });
            ui.add_space(8.0);

            if let Some(id) = action_select {
                self.select_unit(&id);
            }
        });
    }

    /// Renders the card and the navigation row
    fn render_card_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let session = self.trainer.session();
            let card = session.current_card().cloned();
            let flipped = session.is_flipped();
            let can_navigate = session.can_navigate();
            let position = session.position_label();
            let active_id = session.active_unit_id().to_string();
            let label = self.trainer.store().label(&active_id);
            let is_custom = self.trainer.active_is_custom();

            let mut action_flip = false;
            let mut action_step: Option<Step> = None;
            let mut action_shuffle = false;
            let mut action_share = false;
            let mut action_export = false;
            let mut action_delete = false;

            ui.add_space(16.0);
            let card_response = ui.group(|ui| {
                ui.set_min_height(360.0);
                ui.set_min_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.add_space(12.0);
                    ui.label(egui::RichText::new(&label).small().weak());
                    ui.add_space(40.0);

                    match &card {
                        None => {
                            ui.label(
                                egui::RichText::new("No cards here, dearie.")
                                    .italics()
                                    .weak(),
                            );
                        }
                        Some(card) if !flipped => {
                            ui.label(
                                egui::RichText::new(&card.front)
                                    .size(front_text_size(&card.front))
                                    .strong(),
                            );
                            ui.add_space(60.0);
                            ui.label(egui::RichText::new("TAP TO REVEAL").small().weak());
                        }
                        Some(card) => {
                            let size = if card.translation.chars().count() > 20 {
                                24.0
                            } else {
                                36.0
                            };
                            ui.label(
                                egui::RichText::new(&card.translation)
                                    .size(size)
                                    .strong()
                                    .color(ACCENT),
                            );
                            ui.label(egui::RichText::new(format!("[{}]", card.phonetic)).italics());
                            ui.separator();
                            ui.label(&card.context);
                            ui.add_space(30.0);
                            ui.label(egui::RichText::new("TAP TO FLIP BACK").small().weak());
                        }
                    }
                });
            });
            if card_response.response.interact(egui::Sense::click()).clicked() {
                action_flip = true;
            }

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                if ui.add_enabled(can_navigate, egui::Button::new("◀")).clicked() {
                    action_step = Some(Step::Previous);
                }
                if ui
                    .add_enabled(can_navigate, egui::Button::new("SHUFFLE DECK"))
                    .clicked()
                {
                    action_shuffle = true;
                }
                if ui.add_enabled(can_navigate, egui::Button::new("▶")).clicked() {
                    action_step = Some(Step::Next);
                }
            });

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&position).weak());
                if ui.button("💾 Export").on_hover_text("Save this unit as JSON").clicked() {
                    action_export = true;
                }
                if is_custom {
                    if ui.button("🔗 Share").on_hover_text("Share this Unit").clicked() {
                        action_share = true;
                    }
                    if ui.button("🗑 Delete").on_hover_text("Delete Unit").clicked() {
                        action_delete = true;
                    }
                }
            });

            // Execute deferred actions
            if action_flip {
                self.trainer.toggle_flip();
            }
            if let Some(step) = action_step {
                self.queue_step(step);
            }
            if action_shuffle {
                self.pending_step = None;
                self.trainer.shuffle();
            }
            if action_share {
                self.handle_share(&active_id);
            }
            if action_export {
                self.handle_export(&active_id);
            }
            if action_delete {
                self.pending_delete = Some(active_id);
            }
        });
    }

    fn handle_share(&mut self, id: &str) {
        match self
            .trainer
            .share_unit(id, &self.share_base, &mut self.clipboard)
        {
            Ok(_) => self.show_toast("Link copied! Send it to someone you love! ❤️"),
            Err(e) => {
                tracing::warn!(unit = id, error = %e, "share failed");
                self.message = Some(format!("Sharing failed: {e}"));
            }
        }
    }

    /// Handles unit export to JSON file
    fn handle_export(&mut self, id: &str) {
        let Some(unit) = self.trainer.store().get_unit(id) else {
            return;
        };
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!("{}.json", unit.name))
            .add_filter("JSON files", &["json"])
            .save_file()
        {
            self.message = Some(match export_json_to_path(unit, &path) {
                Ok(()) => format!("Unit '{}' exported successfully!", unit.name),
                Err(e) => format!("Export failed: {e}"),
            });
        }
    }

    /// Handles unit import from JSON file
    fn handle_import(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON files", &["json"])
            .pick_file()
        else {
            return;
        };
        let result = import_json(&path)
            .map_err(|e| e.to_string())
            .and_then(|payload| {
                let count = payload.cards.len();
                self.trainer
                    .add_unit(&payload.name, payload.cards, payload.icon)
                    .map(|_| (payload.name, count))
                    .map_err(|e| e.to_string())
            });
        match result {
            Ok((name, count)) => {
                self.pending_step = None;
                self.show_create_dialog = false;
                self.message = Some(format!(
                    "Unit '{name}' imported successfully with {count} cards!"
                ));
            }
            Err(e) => {
                self.message = Some(format!(
                    "Import failed: {e}\n\nPlease check that the file looks like:\n{{\n  \"name\": \"Unit Name\",\n  \"cards\": [{{\"f\": \"…\", \"t\": \"…\", \"p\": \"…\", \"c\": \"…\"}}]\n}}"
                ));
            }
        }
    }

    fn render_create_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_create_dialog {
            return;
        }
        let generating = self.trainer.is_generating();
        let mut action_generate = false;
        let mut action_add_card = false;
        let mut action_save = false;
        let mut action_import_link = false;
        let mut action_import_file = false;
        let mut action_close = false;

        egui::Window::new("Create New Unit")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("AI TOPIC GENERATION").small().weak());
                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.ai_topic)
                            .hint_text("e.g. Space, Cooking"),
                    );
                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    let can_generate = !generating && !self.ai_topic.trim().is_empty();
                    if ui.add_enabled(can_generate, egui::Button::new("Create")).clicked()
                        || (submitted && can_generate)
                    {
                        action_generate = true;
                    }
                });

                ui.separator();
                ui.label(egui::RichText::new("BY HAND").small().weak());
                ui.horizontal(|ui| {
                    ui.label("Unit name:");
                    ui.text_edit_singleline(&mut self.new_unit_name);
                });
                egui::Grid::new("draft_card_grid").num_columns(2).show(ui, |ui| {
                    ui.label("Russian:");
                    ui.text_edit_singleline(&mut self.draft_card.front);
                    ui.end_row();
                    ui.label("Translation:");
                    ui.text_edit_singleline(&mut self.draft_card.translation);
                    ui.end_row();
                    ui.label("Phonetic:");
                    ui.text_edit_singleline(&mut self.draft_card.phonetic);
                    ui.end_row();
                    ui.label("Context:");
                    ui.text_edit_singleline(&mut self.draft_card.context);
                    ui.end_row();
                });
                ui.horizontal(|ui| {
                    let card_ready = !self.draft_card.front.trim().is_empty()
                        && !self.draft_card.translation.trim().is_empty();
                    if ui.add_enabled(card_ready, egui::Button::new("Add Card")).clicked() {
                        action_add_card = true;
                    }
                    let unit_ready =
                        !self.new_unit_name.trim().is_empty() && !self.draft_cards.is_empty();
                    if ui
                        .add_enabled(
                            unit_ready,
                            egui::Button::new(format!(
                                "Save Unit ({} cards)",
                                self.draft_cards.len()
                            )),
                        )
                        .clicked()
                    {
                        action_save = true;
                    }
                });
                ui.push_id("draft_cards", |ui| {
                    egui::ScrollArea::vertical().max_height(120.0).show(ui, |ui| {
                        for (i, card) in self.draft_cards.iter().enumerate() {
                            ui.label(format!("{}. {} = {}", i + 1, card.front, card.translation));
                        }
                    });
                });

                ui.separator();
                ui.label(egui::RichText::new("IMPORT").small().weak());
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.share_link_input)
                            .hint_text("Paste a share link"),
                    );
                    if ui
                        .add_enabled(
                            !self.share_link_input.trim().is_empty(),
                            egui::Button::new("Import Link"),
                        )
                        .clicked()
                    {
                        action_import_link = true;
                    }
                });
                if ui.button("Import JSON File…").clicked() {
                    action_import_file = true;
                }

                ui.separator();
                if ui.button("Cancel").clicked() {
                    action_close = true;
                }
            });

        if action_generate {
            let topic = self.ai_topic.clone();
            self.start_generation(&topic, None);
        }
        if action_add_card {
            let card = std::mem::take(&mut self.draft_card);
            self.draft_cards.push(FlashCard::new(
                card.front.trim(),
                card.translation.trim(),
                card.phonetic.trim(),
                card.context.trim(),
            ));
        }
        if action_save {
            let name = self.new_unit_name.clone();
            let cards = std::mem::take(&mut self.draft_cards);
            match self.trainer.add_unit(&name, cards.clone(), None) {
                Ok(_) => {
                    self.pending_step = None;
                    self.new_unit_name.clear();
                    self.show_create_dialog = false;
                }
                Err(e) => {
                    self.draft_cards = cards;
                    self.message = Some(format!("Could not save the unit: {e}"));
                }
            }
        }
        if action_import_link {
            let link = std::mem::take(&mut self.share_link_input);
            self.import_share_link(&link);
            self.show_create_dialog = false;
        }
        if action_import_file {
            self.handle_import();
        }
        if action_close {
            self.show_create_dialog = false;
        }
    }

    fn render_library_dialog(&mut self, ctx: &egui::Context) {
        if !self.show_library_dialog {
            return;
        }
        let generating = self.trainer.is_generating();
        let custom_units: Vec<(String, String)> = self
            .trainer
            .store()
            .custom_units()
            .map(|unit| (unit.id.clone(), format!("{} {}", unit.icon_or_default(), unit.name)))
            .collect();

        let mut action_open: Option<String> = None;
        let mut action_delete: Option<String> = None;
        let mut action_topic: Option<(String, String)> = None;
        let mut action_close = false;

        egui::Window::new("Unit Archive")
            .collapsible(false)
            .default_size([600.0, 520.0])
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("MANAGE YOUR CURRICULUM").small().weak());
                ui.add(
                    egui::TextEdit::singleline(&mut self.library_search)
                        .hint_text("Search through hundreds of topics...")
                        .desired_width(f32::INFINITY),
                );
                ui.separator();

                let categories = library::search(&self.library_search);

                ui.push_id("library_scroll", |ui| {
                    egui::ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                        if !custom_units.is_empty() && self.library_search.trim().is_empty() {
                            ui.heading("Your Collection");
                            for (id, label) in &custom_units {
                                ui.horizontal(|ui| {
                                    if ui.button(label).clicked() {
                                        action_open = Some(id.clone());
                                    }
                                    if ui.small_button("🗑").on_hover_text("Delete Unit").clicked() {
                                        action_delete = Some(id.clone());
                                    }
                                });
                            }
                            ui.separator();
                        }

                        ui.heading("Topic Archive");
                        for category in &categories {
                            ui.group(|ui| {
                                ui.label(
                                    egui::RichText::new(format!(
                                        "{} {}  ({} topics)",
                                        category.icon,
                                        category.category,
                                        category.topics.len()
                                    ))
                                    .strong(),
                                );
                                ui.horizontal_wrapped(|ui| {
                                    for topic in category.topics {
                                        if ui
                                            .add_enabled(!generating, egui::Button::new(*topic))
                                            .clicked()
                                        {
                                            action_topic = Some((
                                                topic.to_string(),
                                                category.icon.to_string(),
                                            ));
                                        }
                                    }
                                });
                            });
                        }
                        if categories.is_empty() {
                            ui.label(
                                egui::RichText::new(
                                    "Nothing found in the archive, dearie. Try another word?",
                                )
                                .italics()
                                .weak(),
                            );
                        }
                    });
                });

                ui.separator();
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(
                            "Select a topic to generate it using Babushka's AI memory",
                        )
                        .small()
                        .weak(),
                    );
                    if ui.button("Close").clicked() {
                        action_close = true;
                    }
                });
            });

        if let Some(id) = action_open {
            self.select_unit(&id);
            self.show_library_dialog = false;
        }
        if let Some(id) = action_delete {
            self.pending_delete = Some(id);
        }
        if let Some((topic, icon)) = action_topic {
            self.start_generation(&topic, Some(icon));
        }
        if action_close {
            self.show_library_dialog = false;
        }
    }

    /// Confirmation before a custom unit is forgotten
    fn render_delete_dialog(&mut self, ctx: &egui::Context) {
        let Some(id) = self.pending_delete.clone() else {
            return;
        };
        let name = self
            .trainer
            .store()
            .get_unit(&id)
            .map(|unit| unit.name.clone())
            .unwrap_or_else(|| id.clone());

        let mut confirmed = None;
        egui::Window::new("Delete Unit")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!(
                    "Babushka says: Are you sure you want to forget everything about \"{name}\"?"
                ));
                ui.horizontal(|ui| {
                    if ui.button("No").clicked() {
                        confirmed = Some(false);
                    }
                    if ui.button("Yes").clicked() {
                        confirmed = Some(true);
                    }
                });
            });

        match confirmed {
            Some(true) => {
                self.pending_delete = None;
                if self.trainer.session().active_unit_id() == id {
                    self.pending_step = None;
                }
                if let Err(e) = self.trainer.delete_unit(&id) {
                    tracing::warn!(unit = %id, error = %e, "delete failed");
                    self.message = Some(format!("Could not delete the unit: {e}"));
                }
            }
            Some(false) => self.pending_delete = None,
            None => {}
        }
    }

    fn render_generating_overlay(&self, ctx: &egui::Context) {
        if !self.trainer.is_generating() {
            return;
        }
        egui::Window::new("Babushka is writing...")
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.heading(egui::RichText::new("Babushka is writing...").color(ACCENT));
                    ui.label(
                        egui::RichText::new(
                            "\"Just a moment, dearie. Fetching the best words for you.\"",
                        )
                        .italics(),
                    );
                });
            });
    }

    /// Side panel chat with the assistant about the current word
    fn render_assistant(&mut self, ctx: &egui::Context) {
        let word = self.trainer.current_word();
        let asking = self.trainer.is_asking();
        let mut action_ask = false;

        egui::SidePanel::right("assistant")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| {
                ui.heading(egui::RichText::new("Ask Babushka").color(ACCENT));
                ui.separator();

                ui.push_id("assistant_scroll", |ui| {
                    egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                        match self.trainer.last_answer() {
                            Some(answer) => {
                                ui.label(egui::RichText::new(format!("\"{answer}\"")).italics());
                            }
                            None => {
                                ui.label(
                                    egui::RichText::new(format!(
                                        "\"Hello, dearie! Want to know how to pronounce '{word}' or what it means in Moscow?\""
                                    ))
                                    .weak(),
                                );
                            }
                        }
                        if asking {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(
                                    egui::RichText::new("Babushka is thinking...").color(ACCENT),
                                );
                            });
                        }
                    });
                });

                ui.separator();
                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.assistant_query)
                            .hint_text("Ask a question..."),
                    );
                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.add_enabled(!asking, egui::Button::new("Send")).clicked() || submitted {
                        action_ask = true;
                    }
                });
            });

        if action_ask {
            let query = self.assistant_query.clone();
            if let Some(question) = self.trainer.begin_ask(&query) {
                self.assistant_query.clear();
                self.worker.request_answer(question, word);
            }
        }
    }

    fn render_message(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.message else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("Babushka says")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.message = None;
        }
    }

    fn render_toast(&mut self, ctx: &egui::Context) {
        if self
            .toast
            .as_ref()
            .is_some_and(|(_, shown_at)| shown_at.elapsed() >= TOAST_DURATION)
        {
            self.toast = None;
        }
        let Some((text, _)) = &self.toast else {
            return;
        };
        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::CENTER_TOP, [0.0, 24.0])
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(egui::RichText::new(text.as_str()).strong());
                });
            });
    }
}
