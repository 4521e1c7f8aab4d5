//=========================================================================
// Collaborator Interfaces
//=========================================================================
//
// Capabilities the drag core consumes from the surrounding engine.
//
// The core depends only on these traits, never on a concrete body,
// collider or camera type:
//
//   GroundProbe      point-in-ground query
//   ActorInteractor  drag / release / respawn a controllable body
//   ScreenToWorld    camera conversion from screen to world space
//   ActorPool        fixed-capacity source of reusable actors
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Vec2, Vec3};

//=== Internal Dependencies ===============================================

use super::error::CollaboratorError;
use super::events::Release;

//=== GroundProbe =========================================================

/// Point-overlap query against ground-classified geometry.
///
/// Must be cheap and free of side effects.
pub trait GroundProbe {
    fn is_over_ground(&self, position: Vec3) -> Result<bool, CollaboratorError>;
}

impl<F> GroundProbe for F
where
    F: Fn(Vec3) -> bool,
{
    fn is_over_ground(&self, position: Vec3) -> Result<bool, CollaboratorError> {
        Ok(self(position))
    }
}

//=== ScreenToWorld =======================================================

/// Camera conversion from screen pixels to a world position at `depth`.
pub trait ScreenToWorld {
    fn screen_to_world(&self, screen: Vec2, depth: f32) -> Vec3;
}

impl<F> ScreenToWorld for F
where
    F: Fn(Vec2, f32) -> Vec3,
{
    fn screen_to_world(&self, screen: Vec2, depth: f32) -> Vec3 {
        self(screen, depth)
    }
}

//=== ActorInteractor =====================================================

/// Controllable body driven by the drag engine.
pub trait ActorInteractor {
    /// Suspends normal simulation and grabs the body at `position`.
    fn begin_drag_at(&mut self, position: Vec3);

    /// Moves the grabbed body toward `target`.
    fn update_drag_target(&mut self, target: Vec3);

    /// Lets go of the body with the given release velocity.
    fn end_drag_at(&mut self, release: Release);

    /// Places the body back at the world origin seen through `camera`.
    fn respawn_to_world_origin(
        &mut self,
        camera: &dyn ScreenToWorld,
        depth: f32,
    ) -> Result<(), CollaboratorError>;

    fn is_airborne(&self) -> Result<bool, CollaboratorError>;

    fn is_grounded(&self) -> Result<bool, CollaboratorError>;
}

/// Owned, dynamically dispatched actor.
pub type BoxedActor = Box<dyn ActorInteractor>;

//=== ActorId =============================================================

/// Identity of an actor, stable for as long as the actor is on loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u64);

impl ActorId {
    /// Id of the single actor driven when no pool is configured.
    pub const PRIMARY: Self = Self(u64::MAX);
}

//=== ActorPool ===========================================================

/// Fixed-capacity pool of reusable actors.
pub trait ActorPool {
    /// Takes one free actor on loan. Never grows the pool; returns `None`
    /// when every actor is already on loan.
    fn acquire(&mut self) -> Option<ActorId>;

    /// Creates an interactor bound to a loaned actor.
    fn bind(&mut self, actor: ActorId) -> Option<BoxedActor>;

    /// Returns a loaned actor to the pool.
    fn release(&mut self, actor: ActorId);

    /// Number of actors currently free.
    fn available(&self) -> usize;
}

//=========================================================================
// Tests
//=========================================================================
