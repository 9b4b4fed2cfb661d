use anyhow::{anyhow, Result};

use crate::{
    palette::{Colour, Palette},
    tracking::Snapshot,
    Point2D, PointerId,
};

pub const ACTIVE_STROKE_WIDTH: f32 = 30.;
pub const ENDED_STROKE_WIDTH: f32 = 15.;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub colour: Colour,
    pub width: f32,
}

/// The drawing primitive provided by the host.
pub trait Canvas {
    fn draw_line(&mut self, from: Point2D, to: Point2D, style: &LineStyle);
}

pub struct StrokeRenderer {
    palette: Palette,
    active_width: f32,
    ended_width: f32,
}

impl StrokeRenderer {
    pub fn new(palette: Palette, active_width: f32, ended_width: f32) -> Result<Self> {
        // Written positively so NaN is rejected too
        if !(ended_width > 0.) {
            return Err(anyhow!("Stroke widths must be above 0"));
        }
        if !(active_width > ended_width) {
            return Err(anyhow!(
                "Active stroke width ({}) must be wider than ended stroke width ({})",
                active_width,
                ended_width
            ));
        }
        Ok(StrokeRenderer {
            palette,
            active_width,
            ended_width,
        })
    }

    pub fn style_for(&self, id: PointerId, active: bool) -> LineStyle {
        LineStyle {
            colour: self.palette.colour_for(id),
            width: if active {
                self.active_width
            } else {
                self.ended_width
            },
        }
    }

    /// Draw every stroke as segments between consecutive points. Colour and
    /// width both come from the stroke's own id and entry.
    pub fn render<C: Canvas + ?Sized>(&self, snapshot: Snapshot<'_>, canvas: &mut C) {
        for (id, stroke) in snapshot.iter() {
            let style = self.style_for(id, stroke.is_active());
            for segment in stroke.points().windows(2) {
                canvas.draw_line(segment[0], segment[1], &style);
            }
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Default for StrokeRenderer {
    fn default() -> Self {
        StrokeRenderer {
            palette: Palette::default(),
            active_width: ACTIVE_STROKE_WIDTH,
            ended_width: ENDED_STROKE_WIDTH,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::tracking::PointerTracker;

    #[derive(Default)]
    pub(crate) struct RecordingCanvas {
        pub lines: Vec<(Point2D, Point2D, LineStyle)>,
    }

    impl Canvas for RecordingCanvas {
        fn draw_line(&mut self, from: Point2D, to: Point2D, style: &LineStyle) {
            self.lines.push((from, to, *style));
        }
    }

    fn renderer() -> StrokeRenderer {
        let palette = Palette::new(vec![[1, 0, 0], [0, 1, 0], [0, 0, 1]]).unwrap();
        StrokeRenderer::new(palette, 30., 15.).unwrap()
    }

    #[test]
    fn test_widths_must_be_ordered() {
        assert!(StrokeRenderer::new(Palette::default(), 15., 30.).is_err());
        assert!(StrokeRenderer::new(Palette::default(), 15., 15.).is_err());
        assert!(StrokeRenderer::new(Palette::default(), 15., 0.).is_err());
    }

    #[test]
    fn test_nan_widths_rejected() {
        assert!(StrokeRenderer::new(Palette::default(), f32::NAN, 15.).is_err());
        assert!(StrokeRenderer::new(Palette::default(), 30., f32::NAN).is_err());
        assert!(StrokeRenderer::new(Palette::default(), f32::NAN, f32::NAN).is_err());
    }

    #[test]
    fn test_short_strokes_draw_nothing() {
        let mut tracker = PointerTracker::default();
        tracker.on_begin(0, (0., 0.));
        tracker.on_begin(1, (0., 0.));
        tracker.on_move(1, (1., 1.)).unwrap();

        let mut canvas = RecordingCanvas::default();
        renderer().render(tracker.snapshot(), &mut canvas);
        assert!(canvas.lines.is_empty());
    }

    #[test]
    fn test_segments_between_consecutive_points() {
        let mut tracker = PointerTracker::default();
        tracker.on_begin(4, (0., 0.));
        for p in [(0., 0.), (1., 0.), (1., 1.)] {
            tracker.on_move(4, p).unwrap();
        }

        let mut canvas = RecordingCanvas::default();
        renderer().render(tracker.snapshot(), &mut canvas);
        let style = LineStyle {
            colour: [0, 1, 0],
            width: 30.,
        };
        assert_eq!(
            canvas.lines,
            vec![((0., 0.), (1., 0.), style), ((1., 0.), (1., 1.), style)]
        );
    }

    #[test]
    fn test_active_flag_follows_id_not_position() {
        // Non-contiguous ids, the first one removed out of order: liveness
        // must still follow each stroke's own entry
        let mut tracker = PointerTracker::default();
        for id in [7, 2, 9] {
            tracker.on_begin(id, (0., 0.));
            tracker.on_move(id, (0., 0.)).unwrap();
            tracker.on_move(id, (1., 1.)).unwrap();
        }
        tracker.on_cancel(7).unwrap();
        tracker.on_end(9, (2., 2.), false).unwrap();

        let mut canvas = RecordingCanvas::default();
        let renderer = renderer();
        renderer.render(tracker.snapshot(), &mut canvas);

        let by_colour = |colour: Colour| -> Vec<f32> {
            canvas
                .lines
                .iter()
                .filter(|(_, _, s)| s.colour == colour)
                .map(|(_, _, s)| s.width)
                .collect()
        };
        // id 2 -> [0,0,1], still active
        assert_eq!(by_colour([0, 0, 1]), vec![30.]);
        // id 9 -> [1,0,0], ended, two segments
        assert_eq!(by_colour([1, 0, 0]), vec![15., 15.]);
        assert_eq!(canvas.lines.len(), 3);
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut tracker = PointerTracker::default();
        tracker.on_begin(1, (0., 0.));
        tracker.on_move(1, (0., 0.)).unwrap();
        tracker.on_end(1, (3., 4.), false).unwrap();
        let before = tracker.snapshot().to_state();

        let renderer = renderer();
        let mut first = RecordingCanvas::default();
        let mut second = RecordingCanvas::default();
        renderer.render(tracker.snapshot(), &mut first);
        renderer.render(tracker.snapshot(), &mut second);
        assert_eq!(first.lines, second.lines);
        assert_eq!(tracker.snapshot().to_state(), before);
    }
}
