//=========================================================================
// Core Systems
//
// Platform-independent drag and launch logic.
//
// Responsibilities:
// - Map raw pointer drags through the tension curve
// - Decide between launch, drop and respawn on release
// - Gate drags behind the launch state machine and actor loans
//
// Notes:
// Everything here runs on the caller's update thread. The surrounding
// engine is reached only through the traits in `collaborators`.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod collaborators;
pub mod config;
pub mod drag;
pub mod error;
pub mod events;
pub mod input;
pub mod launch;
pub mod tension;

#[cfg(test)]
pub(crate) mod test_support;
