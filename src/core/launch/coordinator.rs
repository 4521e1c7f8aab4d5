//=========================================================================
// Launch Coordinator
//=========================================================================
//
// Gates the drag engine behind the Idle / Following / Disabled state
// machine and owns actor acquisition.
//
// Architecture:
// ```text
//   PointerEvent ──► handle_pointer() ──► request_begin / continue / end
//                                              │
//   ActorLifecycle ─► pump_lifecycle() ──┐     ▼
//                                        └─► LaunchState::next(trigger)
//                                              │ exit(prev) / enter(next)
//                                              ▼
//                                         DragEngine
// ```
//
// Pool mode:
//   Every accepted begin request borrows a fresh actor from the pool
//   and binds it to the engine before the drag starts, so the frame
//   that produced the touch is not lost. Loans are tracked one by one
//   in the LoanRegistry and returned independently when they land.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use glam::Vec3;
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::lifecycle::{ActorLifecycle, LifecycleEvent};
use super::loans::LoanRegistry;
use super::state::{LaunchState, LaunchTrigger};
use crate::core::collaborators::{ActorId, ActorPool, BoxedActor};
use crate::core::drag::{BeginOutcome, DragEngine};
use crate::core::events::Release;
use crate::core::input::{PointerBuffer, PointerEvent, PointerId, PointerPhase};

//=== LaunchCoordinator ===================================================

/// State machine deciding when the drag engine may start, continue or
/// end a drag.
///
/// # Examples
///
/// ```
/// use drag_launch::prelude::*;
///
/// let engine = DragEngineBuilder::new(
///     |_: Vec3| false,
///     |screen: Vec2, _depth: f32| Vec3::new(screen.x, screen.y, 0.0),
/// )
/// .build()
/// .unwrap();
///
/// let coordinator = LaunchCoordinator::new(engine);
/// assert_eq!(coordinator.state(), LaunchState::Idle);
/// ```
pub struct LaunchCoordinator {
    state: LaunchState,
    engine: DragEngine,

    //--- Actor Tracking ---------------------------------------------------
    pool: Option<Box<dyn ActorPool>>,
    loans: LoanRegistry,
    current: Option<ActorId>,
    transitions: u64,

    //--- Input ------------------------------------------------------------
    controlling_pointer: Option<PointerId>,
    pointer_buffer: PointerBuffer,
    pointer_depth: f32,

    //--- Lifecycle Channel ------------------------------------------------
    lifecycle_tx: Sender<ActorLifecycle>,
    lifecycle_rx: Receiver<ActorLifecycle>,
}

impl LaunchCoordinator {
    //--- Construction -----------------------------------------------------

    /// Coordinates a single actor already bound to `engine`.
    ///
    /// The actor is identified as [`ActorId::PRIMARY`] in lifecycle
    /// notifications.
    pub fn new(engine: DragEngine) -> Self {
        let current = engine.has_actor().then_some(ActorId::PRIMARY);
        info!("Launch coordinator created (single actor, bound: {})", current.is_some());
        Self::assemble(engine, None, current)
    }

    /// Coordinates actors borrowed from `pool`, one per drag.
    ///
    /// An actor already bound to `engine` is discarded.
    pub fn with_pool(mut engine: DragEngine, pool: Box<dyn ActorPool>) -> Self {
        if engine.unbind_actor().is_some() {
            warn!("Discarding actor bound to engine: pool mode binds its own actors");
        }
        info!("Launch coordinator created (pool mode, {} available)", pool.available());
        Self::assemble(engine, Some(pool), None)
    }

    fn assemble(
        engine: DragEngine,
        pool: Option<Box<dyn ActorPool>>,
        current: Option<ActorId>,
    ) -> Self {
        let (lifecycle_tx, lifecycle_rx) = unbounded();
        Self {
            state: LaunchState::Idle,
            engine,
            pool,
            loans: LoanRegistry::new(),
            current,
            transitions: 0,
            controlling_pointer: None,
            pointer_buffer: PointerBuffer::new(),
            pointer_depth: 10.0,
            lifecycle_tx,
            lifecycle_rx,
        }
    }

    /// Sets the camera depth at which pointer positions are projected.
    ///
    /// Default: 10.0
    ///
    /// # Panics
    ///
    /// Panics if `depth` is not finite.
    pub fn with_pointer_depth(mut self, depth: f32) -> Self {
        assert!(depth.is_finite(), "Pointer depth must be finite, got {}", depth);
        self.pointer_depth = depth;
        self
    }

    //--- Drag Requests ----------------------------------------------------

    /// Asks to start a drag at `position`. Returns `true` if it started.
    pub fn request_begin(&mut self, position: Vec3) -> bool {
        if !self.state.accepts_begin() {
            debug!("Begin request ignored in {:?}", self.state);
            return false;
        }

        let started = if self.pool.is_some() {
            self.begin_pooled(position)
        } else {
            self.gate_passes() && self.engine.begin(position) == BeginOutcome::Started
        };

        self.apply(if started {
            LaunchTrigger::BeginAccepted
        } else {
            LaunchTrigger::BeginRejected
        });
        started
    }

    /// Forwards a drag move. Ignored unless following.
    pub fn request_continue(&mut self, position: Vec3) {
        if self.state == LaunchState::Following {
            self.engine.continue_drag(position);
        }
    }

    /// Forwards a drag end. Ignored unless following.
    ///
    /// Returns the release handed to the actor.
    pub fn request_end(&mut self, override_velocity: Option<Vec3>) -> Option<Release> {
        if self.state != LaunchState::Following {
            debug!("End request ignored in {:?}", self.state);
            return None;
        }

        let release = self.engine.end(override_velocity);
        let trigger = if self.engine.actor_airborne() {
            LaunchTrigger::EndAirborne
        } else {
            LaunchTrigger::EndGrounded
        };
        self.apply(trigger);
        release
    }

    //--- Pointer Input ----------------------------------------------------

    /// Routes one pointer event. Only the pointer that started the drag
    /// may move or end it.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let world = self
            .engine
            .camera()
            .screen_to_world(event.position, self.pointer_depth);

        match event.phase {
            PointerPhase::Begin => {
                if self.controlling_pointer.is_some() {
                    debug!("Pointer {:?} ignored: another pointer controls the drag", event.pointer);
                    return;
                }
                if self.request_begin(world) {
                    self.controlling_pointer = Some(event.pointer);
                }
            }
            PointerPhase::Move => {
                if self.controlling_pointer == Some(event.pointer) {
                    self.request_continue(world);
                }
            }
            PointerPhase::End => {
                if self.controlling_pointer == Some(event.pointer) {
                    self.request_continue(world);
                    self.request_end(None);
                    self.controlling_pointer = None;
                }
            }
        }
    }

    /// Buffers a pointer event for the next [`process_frame`](Self::process_frame).
    pub fn queue_pointer(&mut self, event: PointerEvent) {
        self.pointer_buffer.push(event);
    }

    /// Processes one frame: lifecycle notifications first, then the
    /// buffered pointer events in arrival order.
    pub fn process_frame(&mut self) {
        self.pump_lifecycle();

        let mut buffer = std::mem::take(&mut self.pointer_buffer);
        for event in buffer.drain() {
            self.handle_pointer(event);
        }
        self.pointer_buffer = buffer;
    }

    //--- Actor Lifecycle --------------------------------------------------

    /// Sender the body simulation uses to report launches and landings.
    pub fn lifecycle_sender(&self) -> Sender<ActorLifecycle> {
        self.lifecycle_tx.clone()
    }

    /// Applies every queued lifecycle notification.
    pub fn pump_lifecycle(&mut self) {
        while let Ok(notification) = self.lifecycle_rx.try_recv() {
            match notification.event {
                LifecycleEvent::Launched => self.on_actor_launched(notification.actor),
                LifecycleEvent::Landed => self.on_actor_landed(notification.actor),
            }
        }
    }

    /// The simulation launched `actor`.
    pub fn on_actor_launched(&mut self, actor: ActorId) {
        if self.pool.is_some() && !self.loans.mark_in_flight(actor) {
            debug!("Launch of untracked actor {:?} ignored", actor);
            return;
        }

        if self.current == Some(actor) {
            self.apply(LaunchTrigger::ExternalLaunched);
        }
    }

    /// The simulation reports `actor` landed.
    pub fn on_actor_landed(&mut self, actor: ActorId) {
        if self.pool.is_none() {
            if self.current == Some(actor) {
                self.apply(LaunchTrigger::ExternalLanded);
            }
            return;
        }

        if self.loans.remove(actor).is_none() {
            debug!("Landing of untracked actor {:?} ignored", actor);
            return;
        }

        if self.current == Some(actor) {
            self.engine.cancel();
            self.engine.unbind_actor();
            self.current = None;
        }
        if let Some(pool) = self.pool.as_mut() {
            pool.release(actor);
        }
        debug!("Actor {:?} returned to pool ({} still on loan)", actor, self.loans.len());

        if self.current.is_none() {
            self.apply(LaunchTrigger::ActorReturned);
        }
    }

    /// Returns every loaned actor to the pool and goes back to Idle.
    pub fn return_all_loans(&mut self) {
        let Some(pool) = self.pool.as_mut() else {
            return;
        };

        self.engine.cancel();
        self.engine.unbind_actor();
        self.current = None;

        for actor in self.loans.snapshot() {
            self.loans.remove(actor);
            pool.release(actor);
        }
        info!("All loaned actors returned to pool");

        self.apply(LaunchTrigger::ActorReturned);
    }

    /// Binds a new single actor. Refused while a drag is active.
    pub fn bind_actor(&mut self, actor: BoxedActor) -> Result<(), BoxedActor> {
        if self.pool.is_some() {
            warn!("Manual actor binding refused in pool mode");
            return Err(actor);
        }
        self.engine.bind_actor(actor)?;
        self.current = Some(ActorId::PRIMARY);
        Ok(())
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> LaunchState {
        self.state
    }

    pub fn engine(&self) -> &DragEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut DragEngine {
        &mut self.engine
    }

    pub fn current_actor(&self) -> Option<ActorId> {
        self.current
    }

    pub fn controlling_pointer(&self) -> Option<PointerId> {
        self.controlling_pointer
    }

    pub fn loans(&self) -> &LoanRegistry {
        &self.loans
    }

    pub fn is_pooled(&self) -> bool {
        self.pool.is_some()
    }

    /// Number of state changes since construction. Self-transitions are
    /// not counted.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    //--- Internal Helpers -------------------------------------------------

    /// Single-actor gate: actor present and not airborne. An actor in
    /// flight keeps the coordinator Disabled, so it never reaches here.
    fn gate_passes(&self) -> bool {
        if self.current.is_none() || !self.engine.has_actor() {
            debug!("Begin rejected: no actor");
            return false;
        }
        if self.engine.actor_airborne() {
            debug!("Begin rejected: actor airborne");
            return false;
        }
        true
    }

    /// Borrows a fresh actor, binds it and starts the drag. On failure
    /// the loan is returned and the previous actor restored.
    fn begin_pooled(&mut self, position: Vec3) -> bool {
        let Some(pool) = self.pool.as_mut() else {
            return false;
        };

        let Some(actor) = pool.acquire() else {
            debug!("Begin rejected: pool exhausted");
            return false;
        };
        let Some(interactor) = pool.bind(actor) else {
            warn!("Pool could not bind actor {:?}", actor);
            pool.release(actor);
            return false;
        };

        let previous = match self.engine.bind_actor(interactor) {
            Ok(previous) => previous,
            Err(_) => {
                pool.release(actor);
                return false;
            }
        };

        if self.engine.begin(position) == BeginOutcome::Started {
            self.loans.insert(actor);
            self.current = Some(actor);
            debug!("Actor {:?} borrowed from pool", actor);
            return true;
        }

        // Drag refused: hand the loan back and restore the previous actor.
        self.engine.unbind_actor();
        if let Some(previous) = previous {
            if self.engine.bind_actor(previous).is_err() {
                warn!("Previous actor could not be restored after refused drag");
            }
        }
        pool.release(actor);
        false
    }

    /// Runs the transition for `trigger`, calling exit / enter once when
    /// the state changes.
    fn apply(&mut self, trigger: LaunchTrigger) {
        let Some(next) = self.state.next(trigger) else {
            debug!("Trigger {:?} ignored in {:?}", trigger, self.state);
            return;
        };
        if next == self.state {
            return;
        }

        let previous = self.state;
        self.exit(previous);
        self.state = next;
        self.transitions += 1;
        debug!("Launch state {:?} -> {:?} ({:?})", previous, next, trigger);
        self.enter(next);
    }

    fn enter(&mut self, state: LaunchState) {
        if state == LaunchState::Disabled {
            self.engine.cancel();
        }
    }

    /// Leaving Following hands the drag back: no pointer controls it.
    fn exit(&mut self, state: LaunchState) {
        if state == LaunchState::Following {
            self.controlling_pointer = None;
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
