use std::collections::HashSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    events::{PointerEvent, PointerPosition},
    Point2D, PointerId,
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// A single touch change as reported by a windowing system
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RawTouch {
    pub id: PointerId,
    pub phase: TouchPhase,
    pub position: Point2D,
}

/// Turns per-touch phase changes into pointer event records. Consecutive
/// moves are grouped into a single multi-pointer move.
#[derive(Debug, Default)]
pub struct TouchTranslator {
    down: HashSet<PointerId>,
}

impl TouchTranslator {
    pub fn new() -> Self {
        TouchTranslator::default()
    }

    pub fn translate(&mut self, touches: &[RawTouch]) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let mut moves: Vec<PointerPosition> = Vec::new();

        for touch in touches {
            let RawTouch {
                id,
                phase,
                position,
            } = *touch;

            if phase != TouchPhase::Move || moves.iter().any(|m| m.id == id) {
                flush_moves(&mut moves, &mut events);
            }

            match phase {
                TouchPhase::Start => {
                    let event = if self.down.is_empty() {
                        PointerEvent::Begin { id, position }
                    } else {
                        PointerEvent::BeginAdditional { id, position }
                    };
                    if !self.down.insert(id) {
                        warn!("Touch {} started twice without ending", id);
                    }
                    events.push(event);
                }
                TouchPhase::Move => moves.push(PointerPosition { id, position }),
                TouchPhase::End => {
                    self.down.remove(&id);
                    let event = if self.down.is_empty() {
                        PointerEvent::End {
                            id,
                            position,
                            cancelled: false,
                        }
                    } else {
                        PointerEvent::EndAdditional {
                            id,
                            position,
                            cancelled: false,
                        }
                    };
                    events.push(event);
                }
                TouchPhase::Cancel => {
                    self.down.remove(&id);
                    events.push(PointerEvent::Cancel { id });
                }
            }
        }
        flush_moves(&mut moves, &mut events);

        if !events.is_empty() {
            debug!("Translated {} touches into {} events", touches.len(), events.len());
        }
        events
    }

    pub fn down_count(&self) -> usize {
        self.down.len()
    }
}

fn flush_moves(moves: &mut Vec<PointerPosition>, events: &mut Vec<PointerEvent>) {
    if !moves.is_empty() {
        events.push(PointerEvent::MoveAll {
            pointers: std::mem::take(moves),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(id: PointerId, phase: TouchPhase, x: f32) -> RawTouch {
        RawTouch {
            id,
            phase,
            position: (x, x),
        }
    }

    #[test]
    fn test_begin_kinds_depend_on_contacts_down() {
        let mut translator = TouchTranslator::new();
        let events = translator.translate(&[
            touch(3, TouchPhase::Start, 0.),
            touch(4, TouchPhase::Start, 1.),
        ]);
        assert_eq!(
            events,
            vec![
                PointerEvent::Begin {
                    id: 3,
                    position: (0., 0.)
                },
                PointerEvent::BeginAdditional {
                    id: 4,
                    position: (1., 1.)
                },
            ]
        );
        assert_eq!(translator.down_count(), 2);
    }

    #[test]
    fn test_moves_grouped_until_id_repeats() {
        let mut translator = TouchTranslator::new();
        translator.translate(&[touch(1, TouchPhase::Start, 0.), touch(2, TouchPhase::Start, 0.)]);

        let events = translator.translate(&[
            touch(1, TouchPhase::Move, 1.),
            touch(2, TouchPhase::Move, 2.),
            touch(1, TouchPhase::Move, 3.),
        ]);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].ids(), vec![1, 2]);
        assert_eq!(events[1].ids(), vec![1]);
    }

    #[test]
    fn test_end_kinds_depend_on_contacts_left() {
        let mut translator = TouchTranslator::new();
        translator.translate(&[touch(1, TouchPhase::Start, 0.), touch(2, TouchPhase::Start, 0.)]);

        let events = translator.translate(&[
            touch(2, TouchPhase::Move, 1.),
            touch(1, TouchPhase::End, 2.),
            touch(2, TouchPhase::End, 3.),
        ]);
        assert_eq!(
            events,
            vec![
                PointerEvent::MoveAll {
                    pointers: vec![PointerPosition {
                        id: 2,
                        position: (1., 1.)
                    }]
                },
                PointerEvent::EndAdditional {
                    id: 1,
                    position: (2., 2.),
                    cancelled: false
                },
                PointerEvent::End {
                    id: 2,
                    position: (3., 3.),
                    cancelled: false
                },
            ]
        );
        assert_eq!(translator.down_count(), 0);
    }

    #[test]
    fn test_cancel_passes_through() {
        let mut translator = TouchTranslator::new();
        let events = translator.translate(&[
            touch(1, TouchPhase::Start, 0.),
            touch(1, TouchPhase::Cancel, 5.),
            touch(9, TouchPhase::Move, 5.),
        ]);
        assert_eq!(events[1], PointerEvent::Cancel { id: 1 });
        // Unknown ids are not filtered out here; the tracker rejects them
        assert_eq!(events[2].ids(), vec![9]);
        assert_eq!(translator.down_count(), 0);
    }
}
