//=========================================================================
// Drag Launch: Library Root
//
// Touch / mouse driven drag-and-launch core for 2D physics games.
//
// Responsibilities:
// - Expose the drag engine, launch coordinator and their collaborators
// - Provide a winit adapter turning window events into pointer events
//
// Typical usage:
// ```no_run
// use drag_launch::prelude::*;
//
// let engine = DragEngineBuilder::new(
//     |_: Vec3| false,
//     |screen: Vec2, _depth: f32| Vec3::new(screen.x, screen.y, 0.0),
// )
// .build()
// .unwrap();
//
// let mut coordinator = LaunchCoordinator::new(engine);
// coordinator.queue_pointer(PointerEvent::begin(Vec2::ZERO, PointerId::MOUSE));
// coordinator.process_frame();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the drag engine, tension model and launch state machine.
// `platform` converts winit window events into core pointer events.
//
pub mod core;
pub mod platform;
pub mod prelude;
