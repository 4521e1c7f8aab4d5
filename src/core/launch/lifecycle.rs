//=========================================================================
// Actor Lifecycle Notifications
//=========================================================================
//
// Launched / Landed reports fired by the external body simulation and
// delivered to the coordinator over a crossbeam channel.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::collaborators::ActorId;

//=== LifecycleEvent ======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// The actor left the ground under a launch.
    Launched,

    /// The actor came back to rest on the ground.
    Landed,
}

//=== ActorLifecycle ======================================================

/// Lifecycle notification for one actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorLifecycle {
    pub actor: ActorId,
    pub event: LifecycleEvent,
}

impl ActorLifecycle {
    pub fn launched(actor: ActorId) -> Self {
        Self { actor, event: LifecycleEvent::Launched }
    }

    pub fn landed(actor: ActorId) -> Self {
        Self { actor, event: LifecycleEvent::Landed }
    }
}
