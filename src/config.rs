use std::{fs, io::ErrorKind};

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    palette::{to_hex_colour, Palette, DEFAULT_COLOURS},
    render::{StrokeRenderer, ACTIVE_STROKE_WIDTH, ENDED_STROKE_WIDTH},
    tracking::{PointerTracker, TrackerSettings},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StrokesConfig {
    /// Stroke colours as "#rrggbb"; a pointer id picks palette[id % len]
    pub palette: Vec<String>,

    /// Width of a stroke whose contact is still down
    pub active_stroke_width: f32,

    /// Width of a stroke whose contact has ended; must be narrower than
    /// the active width
    pub ended_stroke_width: f32,

    /// Start each stroke at the begin position instead of the first move
    pub record_begin_point: bool,
}

impl Default for StrokesConfig {
    fn default() -> Self {
        StrokesConfig {
            palette: DEFAULT_COLOURS.iter().map(|c| to_hex_colour(*c)).collect(),
            active_stroke_width: ACTIVE_STROKE_WIDTH,
            ended_stroke_width: ENDED_STROKE_WIDTH,
            record_begin_point: false,
        }
    }
}

impl StrokesConfig {
    pub fn build_palette(&self) -> Result<Palette> {
        Palette::from_hex_strs(&self.palette)
    }

    pub fn build_renderer(&self) -> Result<StrokeRenderer> {
        StrokeRenderer::new(
            self.build_palette()?,
            self.active_stroke_width,
            self.ended_stroke_width,
        )
    }

    pub fn build_tracker(&self) -> PointerTracker {
        PointerTracker::new(TrackerSettings {
            record_begin_point: self.record_begin_point,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.build_renderer().map(|_| ())
    }

    pub fn write_config_to_file(&self, config_file_path: &str) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(config_file_path, text)
            .with_context(|| format!("Error writing config to file {}", config_file_path))?;
        info!("Wrote config to file: {:?}", config_file_path);
        Ok(())
    }
}

pub fn load_config_from_file(config_file_path: &str) -> Result<StrokesConfig> {
    match fs::read_to_string(config_file_path) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(
                "Config file not found at {}, using defaults",
                &config_file_path
            );
            Ok(StrokesConfig::default())
        }
        Err(e) => Err(anyhow!(
            "Failed to load config from {}: {}",
            config_file_path,
            e
        )),
        Ok(s) => {
            info!("Loaded config OK from \"{}\"", config_file_path);
            let config = serde_json::from_str::<StrokesConfig>(&s)
                .map_err(|e| anyhow!("Failed to parse config data: {}", e))?;
            debug!("Config parsed data from file: {:?}", &config);
            config.validate()?;
            Ok(config)
        }
    }
}
