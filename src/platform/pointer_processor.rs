//=========================================================================
// Pointer Processor
//=========================================================================
//
// Converts Winit touch and mouse events into core PointerEvents.
//
// Architecture:
//   Winit Events → PointerProcessor → PointerEvent → LaunchCoordinator
//
// Stateful cursor tracking: the last cursor position is cached so a
// button press can be reported where the cursor is. Cursor moves are
// only reported while the left button is held. Other buttons are
// filtered (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton, TouchPhase, WindowEvent},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{PointerEvent, PointerId, PointerPhase};

//=== PointerProcessor ====================================================

/// Converts Winit events to pointer events with cursor tracking.
///
/// Touches keep their own ids; the mouse reports as [`PointerId::MOUSE`].
#[derive(Debug, Default)]
pub struct PointerProcessor {
    cursor: Vec2,
    left_held: bool,
}

impl PointerProcessor {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self::default()
    }

    //--- Event Processing -------------------------------------------------

    /// Converts any supported window event. Unsupported events return `None`.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::Touch(touch) => Some(self.process_touch(touch.phase, touch.location, touch.id)),
            WindowEvent::CursorMoved { position, .. } => self.process_cursor_moved(*position),
            WindowEvent::MouseInput { state, button, .. } => self.process_mouse_button(*button, *state),
            _ => None,
        }
    }

    /// Converts a touch. Cancelled touches end the drag like a lift.
    pub fn process_touch(
        &self,
        phase: TouchPhase,
        location: PhysicalPosition<f64>,
        id: u64,
    ) -> PointerEvent {
        let phase = match phase {
            TouchPhase::Started => PointerPhase::Begin,
            TouchPhase::Moved => PointerPhase::Move,
            TouchPhase::Ended | TouchPhase::Cancelled => PointerPhase::End,
        };
        PointerEvent {
            phase,
            position: to_screen(location),
            pointer: PointerId(id),
        }
    }

    /// Caches the cursor; reports a move only while the left button is held.
    pub fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>) -> Option<PointerEvent> {
        self.cursor = to_screen(position);
        self.left_held
            .then(|| PointerEvent::moved(self.cursor, PointerId::MOUSE))
    }

    /// Converts a left button press / release at the cached cursor position.
    pub fn process_mouse_button(
        &mut self,
        button: MouseButton,
        state: ElementState,
    ) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed => {
                self.left_held = true;
                Some(PointerEvent::begin(self.cursor, PointerId::MOUSE))
            }
            ElementState::Released => {
                if !self.left_held {
                    return None;
                }
                self.left_held = false;
                Some(PointerEvent::end(self.cursor, PointerId::MOUSE))
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn is_mouse_dragging(&self) -> bool {
        self.left_held
    }
}

//=== Internal Helpers ====================================================

fn to_screen(position: PhysicalPosition<f64>) -> Vec2 {
    Vec2::new(position.x as f32, position.y as f32)
}

//=========================================================================
// Tests
//=========================================================================
