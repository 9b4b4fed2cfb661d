use indexmap::IndexMap;
use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

use crate::{
    events::{PointerEvent, PointerPosition},
    Point2D, PointerId,
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerError {
    /// A move/end/cancel referenced an id with no active entry; the host
    /// delivered events out of order
    #[error("no active entry for pointer {0}")]
    UnknownPointer(PointerId),
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TrackedStroke {
    points: Vec<Point2D>,
    active: bool,
}

impl TrackedStroke {
    fn begin(first_point: Option<Point2D>) -> Self {
        TrackedStroke {
            points: first_point.into_iter().collect(),
            active: true,
        }
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

pub type TrackerState = IndexMap<PointerId, TrackedStroke>;

#[derive(Debug, Clone, Copy, Default)]
pub struct TrackerSettings {
    /// Use the begin position as the first point of a stroke, rather than
    /// waiting for the first move
    pub record_begin_point: bool,
}

/// Owns one stroke per pointer id, in the order the contacts began.
#[derive(Debug, Default)]
pub struct PointerTracker {
    settings: TrackerSettings,
    strokes: TrackerState,
}

impl PointerTracker {
    pub fn new(settings: TrackerSettings) -> Self {
        PointerTracker {
            settings,
            strokes: IndexMap::new(),
        }
    }

    /// Start a fresh stroke for this id. Any previous entry for the same id
    /// is discarded: a reused id is a new contact.
    pub fn on_begin(&mut self, id: PointerId, position: Point2D) {
        if let Some(previous) = self.strokes.shift_remove(&id) {
            if previous.active {
                warn!("Pointer {} began again while still active; discarding its stroke", id);
            } else {
                debug!("Pointer {} reused; replacing its ended stroke", id);
            }
        }
        let first_point = self.settings.record_begin_point.then_some(position);
        self.strokes.insert(id, TrackedStroke::begin(first_point));
        debug!("Begin pointer {} at {:?}", id, position);
    }

    pub fn on_move(&mut self, id: PointerId, position: Point2D) -> Result<(), TrackerError> {
        let stroke = self.active_stroke_mut(id)?;
        stroke.points.push(position);
        Ok(())
    }

    /// Append one point per reported pointer. Every id is checked before
    /// anything is appended, so a bad id leaves all strokes untouched.
    pub fn on_move_all(&mut self, pointers: &[PointerPosition]) -> Result<(), TrackerError> {
        if let Some(unknown) = pointers.iter().find(|p| !self.is_active(p.id)) {
            return Err(TrackerError::UnknownPointer(unknown.id));
        }
        for PointerPosition { id, position } in pointers {
            self.active_stroke_mut(*id)?.points.push(*position);
        }
        Ok(())
    }

    /// End a contact. A cancelled contact vanishes along with its last
    /// position; otherwise the final point is appended and the stroke freezes.
    pub fn on_end(
        &mut self,
        id: PointerId,
        position: Point2D,
        is_cancel: bool,
    ) -> Result<(), TrackerError> {
        self.active_stroke_mut(id)?;
        if is_cancel {
            self.strokes.shift_remove(&id);
            debug!("Cancel pointer {}; stroke removed", id);
        } else {
            let stroke = self.active_stroke_mut(id)?;
            stroke.points.push(position);
            stroke.active = false;
            debug!("End pointer {} with {} points", id, stroke.points.len());
        }
        Ok(())
    }

    pub fn on_cancel(&mut self, id: PointerId) -> Result<(), TrackerError> {
        if !self.is_active(id) {
            return Err(TrackerError::UnknownPointer(id));
        }
        self.strokes.shift_remove(&id);
        debug!("Cancel pointer {}; stroke removed", id);
        Ok(())
    }

    pub fn handle_event(&mut self, event: &PointerEvent) -> Result<(), TrackerError> {
        match event {
            PointerEvent::Begin { id, position }
            | PointerEvent::BeginAdditional { id, position } => {
                self.on_begin(*id, *position);
                Ok(())
            }
            PointerEvent::MoveAll { pointers } => self.on_move_all(pointers),
            PointerEvent::End {
                id,
                position,
                cancelled,
            }
            | PointerEvent::EndAdditional {
                id,
                position,
                cancelled,
            } => self.on_end(*id, *position, *cancelled),
            PointerEvent::Cancel { id } => self.on_cancel(*id),
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            strokes: &self.strokes,
        }
    }

    /// Drop every ended stroke, keeping contacts that are still down.
    /// Returns how many strokes were removed.
    pub fn clear(&mut self) -> usize {
        let before = self.strokes.len();
        self.strokes.retain(|_id, stroke| stroke.active);
        let removed = before - self.strokes.len();
        debug!("Cleared {} ended strokes", removed);
        removed
    }

    pub fn active_count(&self) -> usize {
        self.strokes.values().filter(|s| s.active).count()
    }

    pub fn ended_count(&self) -> usize {
        self.strokes.values().filter(|s| !s.active).count()
    }

    pub fn settings(&self) -> &TrackerSettings {
        &self.settings
    }

    fn is_active(&self, id: PointerId) -> bool {
        self.strokes.get(&id).is_some_and(|s| s.active)
    }

    fn active_stroke_mut(&mut self, id: PointerId) -> Result<&mut TrackedStroke, TrackerError> {
        match self.strokes.get_mut(&id) {
            Some(stroke) if stroke.active => Ok(stroke),
            _ => Err(TrackerError::UnknownPointer(id)),
        }
    }
}

/// Read-only view of the tracker, borrowed for the duration of a redraw.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct Snapshot<'a> {
    strokes: &'a TrackerState,
}

impl<'a> Snapshot<'a> {
    pub fn get(&self, id: PointerId) -> Option<&'a TrackedStroke> {
        self.strokes.get(&id)
    }

    pub fn contains(&self, id: PointerId) -> bool {
        self.strokes.contains_key(&id)
    }

    pub fn iter(self) -> impl Iterator<Item = (PointerId, &'a TrackedStroke)> + 'a {
        self.strokes.iter().map(|(id, stroke)| (*id, stroke))
    }

    pub fn ids(&self) -> Vec<PointerId> {
        self.strokes.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn to_state(&self) -> TrackerState {
        self.strokes.clone()
    }
}
