use serde::{Deserialize, Serialize};

use crate::{
    tracking::{PointerTracker, TrackerError},
    Point2D, PointerId,
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub id: PointerId,
    pub position: Point2D,
}

/// One raw event record as delivered by the host input system.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PointerEvent {
    /// First contact down on an empty surface
    Begin { id: PointerId, position: Point2D },
    /// Another contact down while others are already active
    BeginAdditional { id: PointerId, position: Point2D },
    /// New positions for some or all active contacts
    MoveAll { pointers: Vec<PointerPosition> },
    /// Last contact up
    End {
        id: PointerId,
        position: Point2D,
        #[serde(default)]
        cancelled: bool,
    },
    /// One of several contacts up
    EndAdditional {
        id: PointerId,
        position: Point2D,
        #[serde(default)]
        cancelled: bool,
    },
    Cancel { id: PointerId },
}

impl PointerEvent {
    pub fn ids(&self) -> Vec<PointerId> {
        match self {
            PointerEvent::MoveAll { pointers } => pointers.iter().map(|p| p.id).collect(),
            PointerEvent::Begin { id, .. }
            | PointerEvent::BeginAdditional { id, .. }
            | PointerEvent::End { id, .. }
            | PointerEvent::EndAdditional { id, .. }
            | PointerEvent::Cancel { id } => vec![*id],
        }
    }
}

/// Whatever owns the surface; told to repaint once per processed event.
pub trait RedrawHost {
    fn request_redraw(&mut self);
}

/// Apply one event to the tracker and, if it was accepted, ask the host
/// for a repaint. A rejected event changes nothing and requests nothing;
/// reporting it is left to the caller.
pub fn dispatch<H: RedrawHost + ?Sized>(
    tracker: &mut PointerTracker,
    event: &PointerEvent,
    host: &mut H,
) -> Result<(), TrackerError> {
    tracker.handle_event(event)?;
    host.request_redraw();
    Ok(())
}
