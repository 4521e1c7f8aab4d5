//=========================================================================
// Pointer Events
//=========================================================================
//
// Device-agnostic touch / mouse events consumed by the launch
// coordinator.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    PointerEvent (this module)
//         ↓
//    PointerBuffer (per-frame coalescing)
//         ↓
//    LaunchCoordinator (begin / continue / end)
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== PointerId ===========================================================

/// Identifies one pointer: a touch finger or the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

impl PointerId {
    /// Reserved id for the mouse cursor.
    pub const MOUSE: Self = Self(u64::MAX);
}

//=== PointerPhase ========================================================

/// Stage of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Finger down / primary button pressed.
    Begin,

    /// Pointer moved while down.
    Move,

    /// Finger lifted, touch cancelled, or button released.
    End,
}

//=== PointerEvent ========================================================

/// A pointer event in screen space (pixels, top-left origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Vec2,
    pub pointer: PointerId,
}

impl PointerEvent {
    pub fn begin(position: Vec2, pointer: PointerId) -> Self {
        Self { phase: PointerPhase::Begin, position, pointer }
    }

    pub fn moved(position: Vec2, pointer: PointerId) -> Self {
        Self { phase: PointerPhase::Move, position, pointer }
    }

    pub fn end(position: Vec2, pointer: PointerId) -> Self {
        Self { phase: PointerPhase::End, position, pointer }
    }

    /// Whether a later event of the same pointer can replace this one.
    pub(crate) fn coalesces_with(&self, next: &PointerEvent) -> bool {
        self.phase == PointerPhase::Move
            && next.phase == PointerPhase::Move
            && self.pointer == next.pointer
    }
}
