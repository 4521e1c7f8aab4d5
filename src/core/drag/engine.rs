//=========================================================================
// Drag Engine
//=========================================================================
//
// Owns the drag lifecycle and decides how each release plays out.
//
// Flow:
//   begin()          → ground check → session → actor.begin/update
//   continue_drag()  → tension::apply → actor.update
//   end()            → over ground?  → respawn + Stop
//                    → slingshot?    → Launch(anchor - released)
//                    → otherwise     → override velocity or NoLaunch
//
// Collaborator query failures degrade to "not over ground" and
// "not airborne". Every end() with a session calls end_drag_at once.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::session::DragSession;
use crate::core::collaborators::{ActorInteractor, BoxedActor, GroundProbe, ScreenToWorld};
use crate::core::config::DragSettings;
use crate::core::error::ConfigError;
use crate::core::events::{DragEvent, DragEvents, Release};

//=== Constants ===========================================================

/// Launch vectors with a squared length below this are treated as zero.
const LAUNCH_EPSILON_SQ: f32 = 1e-10;

//=== BeginOutcome ========================================================

/// Result of a [`DragEngine::begin`] request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeginOutcome {
    /// A new session was created.
    Started,

    /// The begin position is over ground and starting there is blocked.
    BlockedOverGround,

    /// A session is already running; its anchor is left untouched.
    AlreadyActive,

    /// No actor is bound to the engine.
    NoActor,
}

//=== DragEngineBuilder ===================================================

/// Builder for a [`DragEngine`].
///
/// # Examples
///
/// ```
/// use drag_launch::prelude::*;
///
/// let engine = DragEngineBuilder::new(
///     |p: Vec3| p.y < 0.0,
///     |screen: Vec2, depth: f32| Vec3::new(screen.x, screen.y, depth),
/// )
/// .with_settings(DragSettings::new().with_prevent_start_over_ground(false))
/// .build()
/// .unwrap();
///
/// assert!(!engine.is_dragging());
/// ```
pub struct DragEngineBuilder {
    ground: Box<dyn GroundProbe>,
    camera: Box<dyn ScreenToWorld>,
    actor: Option<BoxedActor>,
    settings: DragSettings,
}

impl DragEngineBuilder {
    /// Starts a builder with default [`DragSettings`] and no actor.
    pub fn new<G, C>(ground: G, camera: C) -> Self
    where
        G: GroundProbe + 'static,
        C: ScreenToWorld + 'static,
    {
        Self::from_boxed(Box::new(ground), Box::new(camera))
    }

    /// Like [`new`](Self::new) for already boxed collaborators.
    pub fn from_boxed(ground: Box<dyn GroundProbe>, camera: Box<dyn ScreenToWorld>) -> Self {
        Self {
            ground,
            camera,
            actor: None,
            settings: DragSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: DragSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Binds the initial actor.
    pub fn with_actor(mut self, actor: BoxedActor) -> Self {
        self.actor = Some(actor);
        self
    }

    /// Validates the settings and builds the engine.
    pub fn build(self) -> Result<DragEngine, ConfigError> {
        self.settings.validate()?;
        info!("Building drag engine: {:?}", self.settings);

        Ok(DragEngine {
            session: None,
            actor: self.actor,
            ground: self.ground,
            camera: self.camera,
            settings: self.settings,
            events: DragEvents::new(),
        })
    }
}

//=== DragEngine ==========================================================

/// Drag, tension and release decision engine.
///
/// At most one [`DragSession`] exists at a time. The bound actor can only
/// be swapped while no session is active.
pub struct DragEngine {
    session: Option<DragSession>,
    actor: Option<BoxedActor>,
    ground: Box<dyn GroundProbe>,
    camera: Box<dyn ScreenToWorld>,
    settings: DragSettings,
    events: DragEvents,
}

impl DragEngine {
    //--- Drag Lifecycle ---------------------------------------------------

    /// Starts a drag at `position`.
    pub fn begin(&mut self, position: Vec3) -> BeginOutcome {
        if self.session.is_some() {
            warn!("Drag begin at {:?} ignored: a session is already active", position);
            return BeginOutcome::AlreadyActive;
        }

        if self.settings.prevent_start_over_ground()
            && probe_ground(self.ground.as_ref(), position)
        {
            debug!("Drag begin at {:?} blocked: over ground", position);
            self.events.emit(DragEvent::StartBlocked(position));
            return BeginOutcome::BlockedOverGround;
        }

        let Some(actor) = self.actor.as_mut() else {
            debug!("Drag begin at {:?} ignored: no actor bound", position);
            return BeginOutcome::NoActor;
        };

        let session = DragSession::start(position);
        actor.begin_drag_at(position);
        actor.update_drag_target(session.effective_target());
        self.session = Some(session);

        self.events.emit(DragEvent::Started(position));
        BeginOutcome::Started
    }

    /// Moves the drag target to `position`. No-op without a session.
    pub fn continue_drag(&mut self, position: Vec3) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let effective = session.retarget(position, self.settings.tension());
        if let Some(actor) = self.actor.as_mut() {
            actor.update_drag_target(effective);
        }

        self.events.emit(DragEvent::Updated(effective));
    }

    /// Ends the drag and releases the actor.
    ///
    /// Returns the release handed to the actor, or `None` when no session
    /// was active.
    pub fn end(&mut self, override_velocity: Option<Vec3>) -> Option<Release> {
        let mut session = self.session.take()?;
        session.deactivate();

        let Some(actor) = self.actor.as_mut() else {
            warn!("Drag ended without a bound actor");
            return None;
        };

        //--- Release over ground: respawn, no slingshot -------------------
        if released_over_ground(&**actor, self.ground.as_ref(), &session) {
            debug!("Released over ground, respawning actor");
            if let Err(e) = actor.respawn_to_world_origin(
                self.camera.as_ref(),
                self.settings.respawn_depth(),
            ) {
                warn!("Actor respawn failed: {}", e);
            }
            actor.end_drag_at(Release::Stop);
            self.events.emit(DragEvent::Ended(Release::NoLaunch));
            return Some(Release::Stop);
        }

        //--- Slingshot or plain drop -------------------------------------
        let release = match slingshot_velocity(&session, &self.settings) {
            Some(launch) => Release::Launch(launch),
            None => override_velocity.map_or(Release::NoLaunch, Release::Launch),
        };

        debug!("Drag released: {:?}", release);
        actor.end_drag_at(release);
        self.events.emit(DragEvent::Ended(release));
        Some(release)
    }

    /// Ends any active drag without an override velocity.
    pub fn cancel(&mut self) -> Option<Release> {
        if self.session.is_some() {
            debug!("Cancelling active drag");
        }
        self.end(None)
    }

    //--- Actor Binding ----------------------------------------------------

    /// Swaps in a new actor, returning the previous one.
    ///
    /// Refused while a session is active: the new actor is handed back
    /// in `Err`.
    pub fn bind_actor(&mut self, actor: BoxedActor) -> Result<Option<BoxedActor>, BoxedActor> {
        if self.is_dragging() {
            warn!("Actor swap refused: a drag session is active");
            return Err(actor);
        }
        Ok(self.actor.replace(actor))
    }

    /// Removes the bound actor. Returns `None` if none was bound or a
    /// session is active.
    pub fn unbind_actor(&mut self) -> Option<BoxedActor> {
        if self.is_dragging() {
            warn!("Actor unbind refused: a drag session is active");
            return None;
        }
        self.actor.take()
    }

    //--- Queries ----------------------------------------------------------

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn has_actor(&self) -> bool {
        self.actor.is_some()
    }

    pub fn actor(&self) -> Option<&dyn ActorInteractor> {
        self.actor.as_deref()
    }

    /// Whether the bound actor is airborne. Failures and a missing actor
    /// read as `false`.
    pub fn actor_airborne(&self) -> bool {
        self.actor.as_ref().is_some_and(|actor| {
            actor.is_airborne().unwrap_or_else(|e| {
                warn!("Airborne query failed, assuming not airborne: {}", e);
                false
            })
        })
    }

    pub fn settings(&self) -> &DragSettings {
        &self.settings
    }

    pub fn camera(&self) -> &dyn ScreenToWorld {
        self.camera.as_ref()
    }

    /// Observer list for [`DragEvent`]s.
    pub fn events_mut(&mut self) -> &mut DragEvents {
        &mut self.events
    }
}

//=== Internal Helpers ====================================================

fn probe_ground(ground: &dyn GroundProbe, position: Vec3) -> bool {
    ground.is_over_ground(position).unwrap_or_else(|e| {
        warn!("Ground probe failed at {:?}, assuming no ground: {}", position, e);
        false
    })
}

/// Actor grounded state first, then a probe at the release position.
fn released_over_ground(
    actor: &dyn ActorInteractor,
    ground: &dyn GroundProbe,
    session: &DragSession,
) -> bool {
    let grounded = actor.is_grounded().unwrap_or_else(|e| {
        warn!("Grounded query failed, assuming not grounded: {}", e);
        false
    });
    if grounded {
        return true;
    }

    let release_position = if session.raw_target() != Vec3::ZERO {
        session.raw_target()
    } else {
        session.anchor()
    };
    probe_ground(ground, release_position)
}

/// Launch velocity pointing from the released position back to the anchor.
fn slingshot_velocity(session: &DragSession, settings: &DragSettings) -> Option<Vec3> {
    let slingshot = settings.slingshot();
    if !slingshot.enabled() {
        return None;
    }

    let released = if settings.tension().enabled() {
        session.effective_target()
    } else {
        session.raw_target()
    };

    let pull = released.distance(session.anchor());
    if pull < slingshot.min_pull_distance() {
        debug!("Pull {} below minimum {}, no launch", pull, slingshot.min_pull_distance());
        return None;
    }

    let launch = (session.anchor() - released) * slingshot.force_multiplier();
    (launch.length_squared() > LAUNCH_EPSILON_SQ).then_some(launch)
}

//=========================================================================
// Tests
//=========================================================================
