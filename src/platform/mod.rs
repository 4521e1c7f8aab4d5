//=========================================================================
// Platform Subsystem
//
// Bridges Winit window events with the core pointer input.
//
// Architecture:
// ```text
//  Winit Event Loop
//   ↓ WindowEvent::{Touch, CursorMoved, MouseInput}
//  PointerProcessor
//   ├─ Converts Winit positions to screen Vec2
//   └─ Tracks cursor and left button
//   ↓ PointerEvent
//  LaunchCoordinator::queue_pointer
//   ↓ (process_frame at the frame boundary)
//  DragEngine
// ```
//
// The host application owns the event loop; this module only converts.
//
//=========================================================================

//=== Submodules ==========================================================

mod pointer_processor;

//=== Public API ==========================================================

pub use pointer_processor::PointerProcessor;
