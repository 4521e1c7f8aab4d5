//=========================================================================
// Test Support
//=========================================================================
//
// Recording collaborators shared by the unit tests of the drag engine
// and the launch coordinator. State lives behind `Rc<RefCell<_>>` so a
// test keeps a handle after the boxed collaborator is moved in.
//
//=========================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use glam::{Vec2, Vec3};

use super::collaborators::{ActorId, ActorInteractor, ActorPool, BoxedActor, GroundProbe, ScreenToWorld};
use super::error::CollaboratorError;
use super::events::Release;

//=== Actor ===============================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ActorCall {
    BeginDragAt(Vec3),
    UpdateDragTarget(Vec3),
    EndDragAt(Release),
    Respawn(f32),
}

pub(crate) struct ActorState {
    pub calls: Vec<ActorCall>,
    pub airborne: bool,
    pub grounded: bool,
    /// A launching release makes the actor airborne.
    pub airborne_on_launch: bool,
    pub fail_queries: bool,
    pub fail_respawn: bool,
}

impl ActorState {
    pub fn end_calls(&self) -> Vec<Release> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ActorCall::EndDragAt(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn respawn_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, ActorCall::Respawn(_)))
            .count()
    }
}

pub(crate) type SharedActor = Rc<RefCell<ActorState>>;

pub(crate) struct RecordingActor {
    state: SharedActor,
}

impl RecordingActor {
    pub fn new() -> (Self, SharedActor) {
        let state = Rc::new(RefCell::new(ActorState {
            calls: Vec::new(),
            airborne: false,
            grounded: false,
            airborne_on_launch: true,
            fail_queries: false,
            fail_respawn: false,
        }));
        (Self { state: Rc::clone(&state) }, state)
    }

    pub fn boxed() -> (BoxedActor, SharedActor) {
        let (actor, state) = Self::new();
        (Box::new(actor), state)
    }
}

impl ActorInteractor for RecordingActor {
    fn begin_drag_at(&mut self, position: Vec3) {
        self.state.borrow_mut().calls.push(ActorCall::BeginDragAt(position));
    }

    fn update_drag_target(&mut self, target: Vec3) {
        self.state.borrow_mut().calls.push(ActorCall::UpdateDragTarget(target));
    }

    fn end_drag_at(&mut self, release: Release) {
        let mut state = self.state.borrow_mut();
        state.calls.push(ActorCall::EndDragAt(release));
        if release.is_launch() && state.airborne_on_launch {
            state.airborne = true;
        }
    }

    fn respawn_to_world_origin(
        &mut self,
        _camera: &dyn ScreenToWorld,
        depth: f32,
    ) -> Result<(), CollaboratorError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(ActorCall::Respawn(depth));
        if state.fail_respawn {
            return Err(CollaboratorError::Actor("respawn failed".to_string()));
        }
        Ok(())
    }

    fn is_airborne(&self) -> Result<bool, CollaboratorError> {
        let state = self.state.borrow();
        if state.fail_queries {
            return Err(CollaboratorError::Actor("airborne query failed".to_string()));
        }
        Ok(state.airborne)
    }

    fn is_grounded(&self) -> Result<bool, CollaboratorError> {
        let state = self.state.borrow();
        if state.fail_queries {
            return Err(CollaboratorError::Actor("grounded query failed".to_string()));
        }
        Ok(state.grounded)
    }
}

//=== Ground ==============================================================

#[derive(Default)]
pub(crate) struct GroundState {
    pub ground: Vec<Vec3>,
    pub everywhere: bool,
    pub fail: bool,
    pub queries: Vec<Vec3>,
}

pub(crate) type SharedGround = Rc<RefCell<GroundState>>;

pub(crate) struct ScriptedGround {
    state: SharedGround,
}

impl ScriptedGround {
    pub fn boxed() -> (Box<dyn GroundProbe>, SharedGround) {
        let state = Rc::new(RefCell::new(GroundState::default()));
        (Box::new(Self { state: Rc::clone(&state) }), state)
    }
}

impl GroundProbe for ScriptedGround {
    fn is_over_ground(&self, position: Vec3) -> Result<bool, CollaboratorError> {
        let mut state = self.state.borrow_mut();
        state.queries.push(position);
        if state.fail {
            return Err(CollaboratorError::Probe("collider missing".to_string()));
        }
        Ok(state.everywhere || state.ground.iter().any(|g| g.distance(position) < 1e-4))
    }
}

//=== Camera ==============================================================

/// Screen pixels map 1:1 onto the world XY plane.
pub(crate) fn flat_camera() -> Box<dyn ScreenToWorld> {
    Box::new(|screen: Vec2, _depth: f32| Vec3::new(screen.x, screen.y, 0.0))
}

//=== Pool ================================================================

pub(crate) struct PoolState {
    pub free: Vec<ActorId>,
    pub actors: HashMap<ActorId, SharedActor>,
    pub released: Vec<ActorId>,
}

pub(crate) type SharedPool = Rc<RefCell<PoolState>>;

pub(crate) struct TestPool {
    state: SharedPool,
}

impl TestPool {
    pub fn boxed(capacity: u64) -> (Box<dyn ActorPool>, SharedPool) {
        let state = Rc::new(RefCell::new(PoolState {
            free: (0..capacity).rev().map(ActorId).collect(),
            actors: HashMap::new(),
            released: Vec::new(),
        }));
        (Box::new(Self { state: Rc::clone(&state) }), state)
    }
}

impl ActorPool for TestPool {
    fn acquire(&mut self) -> Option<ActorId> {
        self.state.borrow_mut().free.pop()
    }

    fn bind(&mut self, actor: ActorId) -> Option<BoxedActor> {
        let (interactor, shared) = RecordingActor::boxed();
        self.state.borrow_mut().actors.insert(actor, shared);
        Some(interactor)
    }

    fn release(&mut self, actor: ActorId) {
        let mut state = self.state.borrow_mut();
        state.released.push(actor);
        state.free.push(actor);
    }

    fn available(&self) -> usize {
        self.state.borrow().free.len()
    }
}
