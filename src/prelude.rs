//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use drag_launch::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Math
pub use glam::{Vec2, Vec3};

// Drag engine
pub use crate::core::drag::{BeginOutcome, DragEngine, DragEngineBuilder, DragSession};

// Configuration and errors
pub use crate::core::config::{DragSettings, SlingshotConfig, TensionConfig};
pub use crate::core::error::{CollaboratorError, ConfigError};

// Events
pub use crate::core::events::{DragEvent, DragEvents, ObserverId, Release};

// Collaborators
pub use crate::core::collaborators::{
    ActorId, ActorInteractor, ActorPool, BoxedActor, GroundProbe, ScreenToWorld,
};

// Launch coordination
pub use crate::core::launch::{ActorLifecycle, LaunchCoordinator, LaunchState, LifecycleEvent};

// Pointer input
pub use crate::core::input::{PointerEvent, PointerId, PointerPhase};
pub use crate::platform::PointerProcessor;
