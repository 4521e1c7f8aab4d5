//=========================================================================
// Pointer Input
//
// Touch / mouse event shape consumed by the launch coordinator and the
// per-frame buffer that batches it.
//
//=========================================================================

//=== Submodules ==========================================================
mod pointer;
mod pointer_buffer;

//=== Public API ==========================================================
pub use pointer::{PointerEvent, PointerId, PointerPhase};
pub use pointer_buffer::PointerBuffer;
