use std::collections::HashSet;

use egui::{Event, PointerButton, Pos2, Rect};
use log::debug;
use multitouch_strokes::{
    input::{RawTouch, TouchPhase},
    Point2D, PointerId,
};

/// Picks out the touches (and, optionally, the mouse) that belong to the
/// drawing surface. A touch only counts if it started inside the surface;
/// after that it is followed wherever it goes until it ends.
#[derive(Debug, Default)]
pub struct SurfaceInput {
    mouse_pointer_id: Option<PointerId>,
    mouse_down: bool,
    touches_down: HashSet<PointerId>,
}

fn phase_from_egui(phase: egui::TouchPhase) -> TouchPhase {
    match phase {
        egui::TouchPhase::Start => TouchPhase::Start,
        egui::TouchPhase::Move => TouchPhase::Move,
        egui::TouchPhase::End => TouchPhase::End,
        egui::TouchPhase::Cancel => TouchPhase::Cancel,
    }
}

impl SurfaceInput {
    pub fn new(mouse_pointer_id: Option<PointerId>) -> Self {
        SurfaceInput {
            mouse_pointer_id,
            ..Default::default()
        }
    }

    /// Surface-local touches for one frame of egui events
    pub fn collect(&mut self, events: &[Event], surface: Rect) -> Vec<RawTouch> {
        let local = |pos: &Pos2| -> Point2D { (pos.x - surface.min.x, pos.y - surface.min.y) };

        // egui-winit also reports the first finger as pointer events; those
        // must not become a second stroke
        let simulated_pointer = !self.touches_down.is_empty()
            || events.iter().any(|e| matches!(e, Event::Touch { .. }));

        let mut touches = Vec::new();
        for event in events {
            match event {
                Event::Touch { id, phase, pos, .. } => {
                    let id = id.0;
                    let phase = phase_from_egui(*phase);
                    let accepted = match phase {
                        TouchPhase::Start => {
                            let inside = surface.contains(*pos);
                            if inside {
                                self.touches_down.insert(id);
                            } else {
                                debug!("Ignoring touch {} that started outside the surface", id);
                            }
                            inside
                        }
                        TouchPhase::Move => self.touches_down.contains(&id),
                        TouchPhase::End | TouchPhase::Cancel => self.touches_down.remove(&id),
                    };
                    if accepted {
                        touches.push(RawTouch {
                            id,
                            phase,
                            position: local(pos),
                        });
                    }
                }
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    let Some(id) = self.mouse_pointer_id else {
                        continue;
                    };
                    if *pressed && !self.mouse_down && !simulated_pointer && surface.contains(*pos)
                    {
                        self.mouse_down = true;
                        touches.push(RawTouch {
                            id,
                            phase: TouchPhase::Start,
                            position: local(pos),
                        });
                    } else if !*pressed && self.mouse_down {
                        self.mouse_down = false;
                        touches.push(RawTouch {
                            id,
                            phase: TouchPhase::End,
                            position: local(pos),
                        });
                    }
                }
                Event::PointerMoved(pos) => {
                    if let (Some(id), true) = (self.mouse_pointer_id, self.mouse_down) {
                        touches.push(RawTouch {
                            id,
                            phase: TouchPhase::Move,
                            position: local(pos),
                        });
                    }
                }
                Event::PointerGone => {
                    if let (Some(id), true) = (self.mouse_pointer_id, self.mouse_down) {
                        self.mouse_down = false;
                        touches.push(RawTouch {
                            id,
                            phase: TouchPhase::Cancel,
                            position: (0., 0.),
                        });
                    }
                }
                _ => {}
            }
        }
        touches
    }
}
