use egui::RichText;

use crate::SketchApp;

/// Something the user asked for from the tools panel or a shortcut
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolAction {
    SelectThin,
    SelectThick,
    SelectSticker(String),
    CustomSticker,
    Clear,
    Undo,
    Redo,
}

/// Draws the tools panel and returns the action clicked this frame, if any.
/// The whole panel is disabled while the sticker prompt is open.
pub fn tools_panel(app: &SketchApp, ctx: &egui::Context) -> Option<ToolAction> {
    let mut action = None;

    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.add_enabled_ui(!app.is_prompt_open(), |ui| {
                ui.heading("Tools");
                ui.label(format!(
                    "{} (State: {})",
                    app.sketchpad().tools().kind().name(),
                    app.sketchpad().state().name()
                ));

                let tools = app.sketchpad().tools();
                ui.horizontal(|ui| {
                    if ui.selectable_label(tools.is_thin_selected(), "Thin").clicked() {
                        action = Some(ToolAction::SelectThin);
                    }
                    if ui.selectable_label(tools.is_thick_selected(), "Thick").clicked() {
                        action = Some(ToolAction::SelectThick);
                    }
                });

                ui.separator();
                ui.label("Stickers");

                ui.horizontal_wrapped(|ui| {
                    for glyph in tools.stickers() {
                        let label = RichText::new(glyph.as_str()).size(24.0);
                        if ui
                            .selectable_label(tools.is_sticker_selected(glyph), label)
                            .clicked()
                        {
                            action = Some(ToolAction::SelectSticker(glyph.clone()));
                        }
                    }
                });

                if ui.button("Custom…").clicked() {
                    action = Some(ToolAction::CustomSticker);
                }

                ui.separator();

                let history = app.sketchpad().history();
                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        action = Some(ToolAction::Clear);
                    }
                    if ui
                        .add_enabled(history.can_undo(), egui::Button::new("Undo"))
                        .clicked()
                    {
                        action = Some(ToolAction::Undo);
                    }
                    if ui
                        .add_enabled(history.can_redo(), egui::Button::new("Redo"))
                        .clicked()
                    {
                        action = Some(ToolAction::Redo);
                    }
                });

                ui.label(format!("Marks: {}", history.undo_stack().len()));
                ui.label(format!("Redo stack size: {}", history.redo_stack().len()));
            });
        });

    action
}
