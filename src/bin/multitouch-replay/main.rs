use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::{debug, info, warn};
use serde::Serialize;

use multitouch_strokes::{
    config::load_config_from_file,
    events::{dispatch, RedrawHost},
    palette::{to_hex_colour, Colour},
    recording::load_recording,
    render::{Canvas, LineStyle},
    tracking::TrackedStroke,
    Point2D, PointerId,
};

mod cli;

use cli::Cli;

/// Stands in for a window: counts repaint requests instead of painting
#[derive(Default)]
struct HeadlessHost {
    redraws_requested: usize,
}

impl RedrawHost for HeadlessHost {
    fn request_redraw(&mut self) {
        self.redraws_requested += 1;
    }
}

#[derive(Default)]
struct SegmentCounter {
    segments: usize,
    total_length: f32,
}

impl Canvas for SegmentCounter {
    fn draw_line(&mut self, from: Point2D, to: Point2D, _style: &LineStyle) {
        self.segments += 1;
        self.total_length += ((to.0 - from.0).powi(2) + (to.1 - from.1).powi(2)).sqrt();
    }
}

#[derive(Serialize)]
struct StrokeReport<'a> {
    id: PointerId,
    colour: String,
    #[serde(flatten)]
    stroke: &'a TrackedStroke,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize the logger from the environment

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level)).init();

    debug!("Started; args: {:?}", cli);

    let config = load_config_from_file(&cli.config_path)?;
    let renderer = config.build_renderer()?;
    let mut tracker = config.build_tracker();
    let mut host = HeadlessHost::default();

    let events = load_recording(&cli.recording)?;
    let mut rejected = 0;

    for (i, event) in events.iter().enumerate() {
        match dispatch(&mut tracker, event, &mut host) {
            Ok(()) => debug!("#{} applied; {} strokes", i, tracker.snapshot().len()),
            Err(e) => {
                if cli.strict {
                    return Err(anyhow::Error::new(e).context(format!("event #{} rejected", i)));
                }
                warn!("Skipping event #{} {:?}: {}", i, event, e);
                rejected += 1;
            }
        }
    }

    let snapshot = tracker.snapshot();
    let mut counter = SegmentCounter::default();
    renderer.render(snapshot, &mut counter);

    info!(
        "Replayed {} events ({} rejected, {} redraws): {} active, {} ended, {} segments, length {:.1}",
        events.len(),
        rejected,
        host.redraws_requested,
        tracker.active_count(),
        tracker.ended_count(),
        counter.segments,
        counter.total_length
    );

    let report: Vec<StrokeReport> = snapshot
        .iter()
        .map(|(id, stroke)| {
            let colour: Colour = renderer.palette().colour_for(id);
            StrokeReport {
                id,
                colour: to_hex_colour(colour),
                stroke,
            }
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
