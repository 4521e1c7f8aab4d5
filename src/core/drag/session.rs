//=========================================================================
// Drag Session
//=========================================================================
//
// State of one begin → end drag interaction.
//
// The anchor is fixed at creation. The effective target is only ever
// derived from the raw target through the tension model.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Internal Dependencies ===============================================

use crate::core::config::TensionConfig;
use crate::core::tension;

//=== DragSession =========================================================

/// Positions tracked between drag begin and drag end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    anchor: Vec3,
    raw_target: Vec3,
    effective_target: Vec3,
    is_active: bool,
}

impl DragSession {
    /// Starts a session with every position at `position`.
    pub(crate) fn start(position: Vec3) -> Self {
        Self {
            anchor: position,
            raw_target: position,
            effective_target: position,
            is_active: true,
        }
    }

    /// Records a new raw target and recomputes the effective target.
    pub(crate) fn retarget(&mut self, raw: Vec3, tension: &TensionConfig) -> Vec3 {
        self.raw_target = raw;
        self.effective_target = tension::apply(Some(self.anchor), raw, tension);
        self.effective_target
    }

    pub(crate) fn deactivate(&mut self) {
        self.is_active = false;
    }

    //--- Accessors --------------------------------------------------------

    pub fn anchor(&self) -> Vec3 {
        self.anchor
    }

    pub fn raw_target(&self) -> Vec3 {
        self.raw_target
    }

    pub fn effective_target(&self) -> Vec3 {
        self.effective_target
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

//=========================================================================
// Tests
//=========================================================================
