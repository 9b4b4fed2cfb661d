use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::events::PointerEvent;

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a sequence of pointer events; JSON for `.json` files, MessagePack
/// for anything else
pub fn load_recording<P: AsRef<Path>>(path: P) -> Result<Vec<PointerEvent>> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read recording {:?}", path))?;
    let events: Vec<PointerEvent> = if is_json(path) {
        serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse JSON recording {:?}", path))?
    } else {
        rmp_serde::from_slice(&bytes)
            .with_context(|| format!("Failed to decode MessagePack recording {:?}", path))?
    };
    info!("Loaded {} events from {:?}", events.len(), path);
    Ok(events)
}

pub fn save_recording<P: AsRef<Path>>(path: P, events: &[PointerEvent]) -> Result<()> {
    let path = path.as_ref();
    let bytes = if is_json(path) {
        serde_json::to_vec_pretty(events)?
    } else {
        rmp_serde::to_vec_named(events)?
    };
    fs::write(path, bytes).with_context(|| format!("Failed to write recording {:?}", path))?;
    info!("Saved {} events to {:?}", events.len(), path);
    Ok(())
}

/// Keeps every accepted event so a session can be replayed later
#[derive(Debug, Default)]
pub struct Recorder {
    events: Vec<PointerEvent>,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder::default()
    }

    pub fn push(&mut self, event: PointerEvent) {
        debug!("Recorded {:?}", event);
        self.events.push(event);
    }

    pub fn events(&self) -> &[PointerEvent] {
        &self.events
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_recording(path, &self.events)
    }
}
