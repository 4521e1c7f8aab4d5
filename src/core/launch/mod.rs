//=========================================================================
// Launch Coordination
//=========================================================================
//
// State machine gating the drag engine, actor loans and lifecycle
// notifications from the body simulation.
//
// Architecture:
//   LaunchCoordinator
//     ├─ state:  LaunchState (Idle / Following / Disabled)
//     ├─ engine: DragEngine
//     ├─ pool:   Option<Box<dyn ActorPool>>
//     └─ loans:  LoanRegistry
//
//=========================================================================

//=== Module Declarations =================================================

mod coordinator;
mod lifecycle;
mod loans;
mod state;

//=== Public API ==========================================================

pub use coordinator::LaunchCoordinator;
pub use lifecycle::{ActorLifecycle, LifecycleEvent};
pub use loans::{LoanBinding, LoanRegistry};
pub use state::{LaunchState, LaunchTrigger};
