use egui::{Key, KeyboardShortcut, Modifiers};

use crate::config::SketchConfig;
use crate::input::InputHandler;
use crate::panels::{ToolAction, central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::sketchpad::{SketchEvent, Sketchpad};

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

pub struct SketchApp {
    sketchpad: Sketchpad,
    renderer: Renderer,
    input: InputHandler,
    config: SketchConfig,
    /// Text of the custom sticker prompt while it is open
    sticker_prompt: Option<String>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::with_config(config)
    }

    /// App state without a window, e.g. for tests
    pub fn with_config(config: SketchConfig) -> Self {
        Self {
            sketchpad: Sketchpad::new(&config),
            renderer: Renderer::default(),
            input: InputHandler::new(),
            config,
            sticker_prompt: None,
        }
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.sketchpad
    }

    pub fn sketchpad_mut(&mut self) -> &mut Sketchpad {
        &mut self.sketchpad
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn is_prompt_open(&self) -> bool {
        self.sticker_prompt.is_some()
    }

    /// Ask the user for a custom sticker, pre-filled with the default glyph
    pub fn open_sticker_prompt(&mut self) {
        if self.sticker_prompt.is_none() {
            self.sticker_prompt = Some(self.config.custom_sticker_default.clone());
        }
    }

    /// Close the prompt, applying its text unless it was cancelled
    pub fn answer_sticker_prompt(&mut self, accepted: bool) {
        if let Some(text) = self.sticker_prompt.take() {
            let answer = accepted.then_some(text.as_str());
            self.sketchpad.add_custom_sticker(answer);
        }
    }

    /// Run a panel or shortcut action. Nothing runs while the sticker
    /// prompt is waiting for an answer.
    pub fn apply(&mut self, action: ToolAction) {
        if self.is_prompt_open() {
            log::debug!("Ignoring {:?} while the sticker prompt is open", action);
            return;
        }
        match action {
            ToolAction::SelectThin => self.sketchpad.select_thin(),
            ToolAction::SelectThick => self.sketchpad.select_thick(),
            ToolAction::SelectSticker(glyph) => self.sketchpad.select_sticker(&glyph),
            ToolAction::CustomSticker => self.open_sticker_prompt(),
            ToolAction::Clear => self.sketchpad.clear(),
            ToolAction::Undo => self.sketchpad.undo(),
            ToolAction::Redo => self.sketchpad.redo(),
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if self.is_prompt_open() {
            return;
        }
        // Check the shifted shortcut first: Cmd+Z also matches Cmd+Shift+Z
        let action = ctx.input_mut(|i| {
            if i.consume_shortcut(&REDO) || i.consume_shortcut(&REDO_ALT) {
                Some(ToolAction::Redo)
            } else if i.consume_shortcut(&UNDO) {
                Some(ToolAction::Undo)
            } else {
                None
            }
        });
        if let Some(action) = action {
            self.apply(action);
        }
    }

    fn sticker_prompt_window(&mut self, ctx: &egui::Context) {
        let Some(text) = self.sticker_prompt.as_mut() else {
            return;
        };

        let mut answer = None;
        egui::Window::new("Custom sticker")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Custom sticker text");
                let edit = ui.text_edit_singleline(text);
                // A single-line edit gives up focus on Enter
                let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                if !submitted {
                    edit.request_focus();
                }

                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() || submitted {
                        answer = Some(true);
                    }
                    if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(Key::Escape)) {
                        answer = Some(false);
                    }
                });
            });

        if let Some(accepted) = answer {
            self.answer_sticker_prompt(accepted);
        }
    }

    /// One frame of the whole UI
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.handle_shortcuts(ctx);

        if let Some(action) = tools_panel(self, ctx) {
            self.apply(action);
        }
        central_panel(self, ctx);
        self.sticker_prompt_window(ctx);

        let events = self.sketchpad.take_events();
        if !events.is_empty() {
            let drawing_changed = events.contains(&SketchEvent::DrawingChanged);
            log::debug!(
                "{} change notifications (drawing changed: {})",
                events.len(),
                drawing_changed
            );
            ctx.request_repaint();
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
