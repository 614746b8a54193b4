//! Pointer interaction on the glyph canvas
//!
//! - `event.rs` - the tagged input events a host delivers
//! - `drawing_mode.rs` - what a drag does to each cell it crosses
//! - `controller.rs` - the drag state machine and zoom/resize handling

mod controller;
mod drawing_mode;
mod event;

pub use controller::{DragState, InteractionController};
pub use drawing_mode::DrawingMode;
pub use event::{CanvasEvent, PointerButton};
