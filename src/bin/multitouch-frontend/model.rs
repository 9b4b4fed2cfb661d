use anyhow::Result;
use log::{error, info};
use multitouch_strokes::{
    config::StrokesConfig,
    events::{dispatch, RedrawHost},
    input::{RawTouch, TouchTranslator},
    recording::Recorder,
    render::StrokeRenderer,
    tracking::PointerTracker,
};

use crate::{cli::Cli, surface_input::SurfaceInput, ui::render_ui};

pub struct Model {
    pub config: StrokesConfig,
    pub config_path: String,
    pub tracker: PointerTracker,
    pub renderer: StrokeRenderer,
    pub translator: TouchTranslator,
    pub recorder: Option<Recorder>,
    pub record_to: Option<String>,
    pub surface_input: SurfaceInput,
    pub rejected_events: usize,
}

/// Repaint requests go straight to egui
struct Repaint<'a>(&'a egui::Context);

impl RedrawHost for Repaint<'_> {
    fn request_redraw(&mut self) {
        self.0.request_repaint();
    }
}

impl Model {
    pub fn new(cli: &Cli, config: StrokesConfig) -> Result<Self> {
        let renderer = config.build_renderer()?;
        let tracker = config.build_tracker();
        info!("Multitouch Frontend started OK");

        Ok(Model {
            config,
            config_path: cli.config_path.clone(),
            tracker,
            renderer,
            translator: TouchTranslator::new(),
            recorder: cli.record_to.as_ref().map(|_| Recorder::new()),
            record_to: cli.record_to.clone(),
            surface_input: SurfaceInput::new(cli.mouse.then_some(cli.mouse_pointer_id)),
            rejected_events: 0,
        })
    }

    /// Feed one frame's worth of touches through the tracker. A rejected
    /// event is logged and skipped so the window stays up.
    pub fn apply_touches(&mut self, touches: &[RawTouch], ctx: &egui::Context) {
        let mut host = Repaint(ctx);
        for event in self.translator.translate(touches) {
            match dispatch(&mut self.tracker, &event, &mut host) {
                Ok(()) => {
                    if let Some(recorder) = self.recorder.as_mut() {
                        recorder.push(event);
                    }
                }
                Err(e) => {
                    error!("Input out of order, rejected {:?}: {}", event, e);
                    self.rejected_events += 1;
                }
            }
        }
    }

    /// Rebuild the renderer after a palette or width edit; keep the old one
    /// if the edit is invalid
    pub fn update_renderer(&mut self) {
        match self.config.build_renderer() {
            Ok(renderer) => self.renderer = renderer,
            Err(e) => error!("Ignoring config change: {}", e),
        }
    }

    pub fn save_recording(&self) {
        if let (Some(recorder), Some(path)) = (&self.recorder, &self.record_to) {
            if let Err(e) = recorder.save(path) {
                error!("Failed to save recording: {}", e);
            }
        }
    }
}

impl eframe::App for Model {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        render_ui(ctx, self);
    }

    fn on_close_event(&mut self) -> bool {
        self.save_recording();
        true
    }
}
