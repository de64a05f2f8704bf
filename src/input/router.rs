use crate::sketchpad::Sketchpad;

use super::InputEvent;

/// Routes one canvas input event to the sketchpad's pointer handlers
pub fn route_event(event: &InputEvent, sketchpad: &mut Sketchpad) {
    match *event {
        InputEvent::PointerDown { position } => sketchpad.pointer_down(position),
        InputEvent::PointerMove { position } => sketchpad.pointer_move(position),
        InputEvent::PointerUp => sketchpad.pointer_up(),
        InputEvent::PointerLeave => sketchpad.pointer_leave(),
    }
}
