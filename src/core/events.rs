//=========================================================================
// Drag Events
//=========================================================================
//
// Lifecycle notifications emitted by the drag engine for the
// presentation layer.
//
// Architecture:
//   DragEngine → emit(DragEvent) → DragEvents
//                                    ├─ observer closures (in order)
//                                    └─ channel senders (crossbeam)
//
// Observers run synchronously inside the engine call that emitted
// the event.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use glam::Vec3;
use log::debug;

//=== Release =============================================================

/// Velocity handed to the actor when a drag ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// No velocity is imposed; the actor keeps whatever motion it has.
    NoLaunch,

    /// The actor is brought to rest (explicit zero velocity).
    Stop,

    /// The actor is launched with this velocity.
    Launch(Vec3),
}

impl Release {
    /// The velocity to impose, if any. `Stop` yields zero.
    pub fn velocity(&self) -> Option<Vec3> {
        match self {
            Self::NoLaunch => None,
            Self::Stop => Some(Vec3::ZERO),
            Self::Launch(v) => Some(*v),
        }
    }

    pub fn is_launch(&self) -> bool {
        matches!(self, Self::Launch(_))
    }
}

//=== DragEvent ===========================================================

/// Event emitted at each drag lifecycle step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// A session began at this world position.
    Started(Vec3),

    /// The effective (tensioned) target moved.
    Updated(Vec3),

    /// The session ended with this release.
    Ended(Release),

    /// A begin was refused because the position is over ground.
    StartBlocked(Vec3),
}

//=== DragEvents ==========================================================

/// Handle returned by [`DragEvents::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&DragEvent)>;

/// Explicit observer list for [`DragEvent`]s.
pub struct DragEvents {
    observers: Vec<(ObserverId, Observer)>,
    next_id: u64,
}

impl DragEvents {
    /// Creates an empty observer list.
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_id: 0,
        }
    }

    //--- Subscription -----------------------------------------------------

    /// Registers a callback invoked for every emitted event.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&DragEvent) + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Registers a channel observer and returns its receiving end.
    ///
    /// Events are dropped silently once the receiver is gone.
    pub fn channel(&mut self) -> (ObserverId, Receiver<DragEvent>) {
        let (tx, rx): (Sender<DragEvent>, Receiver<DragEvent>) = unbounded();
        let id = self.subscribe(move |event| {
            let _ = tx.send(*event);
        });
        (id, rx)
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    //--- Emission ---------------------------------------------------------

    /// Delivers `event` to every observer in registration order.
    pub(crate) fn emit(&mut self, event: DragEvent) {
        debug!("Drag event: {:?}", event);
        for (_, observer) in self.observers.iter_mut() {
            observer(&event);
        }
    }
}

impl Default for DragEvents {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Tests
//=========================================================================
