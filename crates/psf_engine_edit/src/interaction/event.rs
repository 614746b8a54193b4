//! Input events understood by the interaction controller

use serde::{Deserialize, Serialize};

use crate::{Position, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    /// Usually the left mouse button; paints
    Primary,
    /// Usually the right mouse button; erases
    Secondary,
    /// Not bound to any canvas action
    Middle,
}

/// One input event, in widget coordinates.
///
/// Serialized with a `type` tag so event sequences can be recorded and
/// replayed, e.g. `{ type = "pointer_down", button = "primary", position = { x = 15, y = 15 } }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CanvasEvent {
    PointerDown { button: PointerButton, position: Position },
    PointerMove { position: Position },
    PointerUp,
    /// Positive delta zooms in, negative zooms out
    Wheel { delta: i32 },
    Resize { size: Size },
}
