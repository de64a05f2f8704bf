use egui::{Context, PointerButton, Pos2, Rect};

mod router;
pub use router::route_event;

/// Pointer edges the sketchpad cares about, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved over the canvas (with or without the button held)
    PointerMove { position: Pos2 },
    /// Primary button was released after a press on the canvas
    PointerUp,
    /// Pointer left the canvas
    PointerLeave,
}

/// Handles converting raw egui input into canvas [`InputEvent`]s
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Last position seen inside the canvas, in screen coordinates
    last_pointer_pos: Option<Pos2>,
    /// Whether a press started on the canvas and has not been released
    pressed: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget any pointer tracking, e.g. while a modal dialog owns the input
    pub fn reset(&mut self) {
        self.last_pointer_pos = None;
        self.pressed = false;
    }

    /// Process this frame's egui input for a canvas occupying `canvas_rect`
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        ctx.input(|input| {
            let hover = input.pointer.hover_pos();
            self.update(
                hover,
                input.pointer.button_pressed(PointerButton::Primary),
                input.pointer.button_released(PointerButton::Primary),
                canvas_rect,
            )
        })
    }

    /// Turn one frame of pointer state into events
    pub fn update(
        &mut self,
        hover: Option<Pos2>,
        pressed: bool,
        released: bool,
        canvas_rect: Rect,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let inside = hover.filter(|pos| canvas_rect.contains(*pos));
        let to_local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();

        match inside {
            Some(pos) => {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        position: to_local(pos),
                    });
                }
                if pressed && !self.pressed {
                    events.push(InputEvent::PointerDown {
                        position: to_local(pos),
                    });
                    self.pressed = true;
                }
            }
            None if self.last_pointer_pos.is_some() => {
                events.push(InputEvent::PointerLeave);
                self.pressed = false;
            }
            None => {}
        }

        if released && self.pressed {
            events.push(InputEvent::PointerUp);
            self.pressed = false;
        }

        self.last_pointer_pos = inside;
        events
    }
}
