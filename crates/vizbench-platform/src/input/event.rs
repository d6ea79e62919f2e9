use serde::{Deserialize, Serialize};
use vizbench_common::types::{PaneId, Point};

/// Kinds of raw input delivered by the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    PointerDown,
    PointerUp,
    PointerMove,
    DoubleClick,
    Wheel,
    Hover,
    KeyDown,
    KeyUp,
    Enter,
    Exit,
    MenuRequested,
}

/// One raw input event, tagged with the pane surface it happened on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    pub kind: InputKind,
    pub point: Point,
    /// Pointer button, 1-based. Zero when no button is involved.
    pub button: u32,
    pub key_code: u32,
    /// Wheel clicks, positive away from the user.
    pub wheel_delta: i32,
    pub surface: PaneId,
}

impl InputEvent {
    pub fn new(kind: InputKind, surface: PaneId) -> Self {
        Self {
            kind,
            point: Point::default(),
            button: 0,
            key_code: 0,
            wheel_delta: 0,
            surface,
        }
    }

    pub fn pointer(kind: InputKind, surface: PaneId, x: i32, y: i32, button: u32) -> Self {
        Self {
            point: Point::new(x, y),
            button,
            ..Self::new(kind, surface)
        }
    }

    pub fn pointer_down(surface: PaneId, x: i32, y: i32, button: u32) -> Self {
        Self::pointer(InputKind::PointerDown, surface, x, y, button)
    }

    pub fn pointer_up(surface: PaneId, x: i32, y: i32, button: u32) -> Self {
        Self::pointer(InputKind::PointerUp, surface, x, y, button)
    }

    pub fn pointer_move(surface: PaneId, x: i32, y: i32) -> Self {
        Self::pointer(InputKind::PointerMove, surface, x, y, 0)
    }

    pub fn wheel(surface: PaneId, x: i32, y: i32, delta: i32) -> Self {
        Self {
            wheel_delta: delta,
            ..Self::pointer(InputKind::Wheel, surface, x, y, 0)
        }
    }

    pub fn key(kind: InputKind, surface: PaneId, key_code: u32) -> Self {
        Self {
            key_code,
            ..Self::new(kind, surface)
        }
    }

    pub fn menu_requested(surface: PaneId) -> Self {
        Self::new(InputKind::MenuRequested, surface)
    }

    /// The same event re-tagged as a pointer move, carrying `button`.
    pub(super) fn as_move(&self, button: u32) -> Self {
        Self {
            kind: InputKind::PointerMove,
            button,
            ..self.clone()
        }
    }
}
