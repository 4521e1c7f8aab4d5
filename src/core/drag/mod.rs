//=========================================================================
// Drag System
//=========================================================================
//
// Drag session state and the engine that drives it.
//
// Architecture:
//   DragEngine
//     ├─ session: Option<DragSession>
//     ├─ actor:   Option<Box<dyn ActorInteractor>>
//     ├─ ground:  Box<dyn GroundProbe>
//     └─ events:  DragEvents
//
//=========================================================================

//=== Module Declarations =================================================

mod engine;
mod session;

//=== Public API ==========================================================

pub use engine::{BeginOutcome, DragEngine, DragEngineBuilder};
pub use session::DragSession;
