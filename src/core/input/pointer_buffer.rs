//=========================================================================
// Pointer Buffer
//
// Collects the pointer events of one frame in arrival order.
//
// Responsibilities:
// - Keep Begin / End events in order, never dropping them
// - Coalesce consecutive Move events of the same pointer
//   (last position wins)
// - Hand the frame over to the coordinator via `drain()`
//
// Notes:
// The buffer lives across frames and is emptied every time it is
// drained, preserving its allocation.
//=========================================================================

//=== Internal Modules ====================================================
use super::pointer::PointerEvent;

//=== PointerBuffer =======================================================
pub struct PointerBuffer {
    events: Vec<PointerEvent>,
}

impl PointerBuffer {
    //--- Construction -----------------------------------------------------
    pub fn new() -> Self {
        const BASE_CAPACITY: usize = 16;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    //--- push() -----------------------------------------------------------
    //
    // Appends an event. A Move directly following a Move of the same
    // pointer replaces it instead of growing the buffer.
    //
    pub fn push(&mut self, event: PointerEvent) {
        if let Some(last) = self.events.last_mut() {
            if last.coalesces_with(&event) {
                *last = event;
                return;
            }
        }
        self.events.push(event);
    }

    //--- drain() ----------------------------------------------------------
    pub fn drain(&mut self) -> impl Iterator<Item = PointerEvent> + '_ {
        self.events.drain(..)
    }

    //--- Utilities --------------------------------------------------------
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for PointerBuffer {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
