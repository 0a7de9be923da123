//! JSON frame exporter — writes per-frame placements for visual inspection.
//!
//! Implements the `Renderer` trait. Captures both bodies' transforms and
//! positions at each frame, then serializes the entire animation to a
//! JSON file on `finalize()`. The output can be replayed by an external
//! viewer or diffed between runs.

use serde::Serialize;

use cogspin_types::{CogspinError, CogspinResult};

use crate::renderer::{RenderFrame, Renderer};

/// Complete animation data for JSON export.
#[derive(Serialize)]
struct AnimationData {
    frame_count: u32,
    frames: Vec<RenderFrame>,
}

/// Exports simulation frames to a JSON file for visual inspection.
///
/// Usage:
/// ```text
/// let mut exporter = JsonFrameExporter::new("output.json");
/// exporter.init()?;
/// // ... run simulation, calling submit_frame() each step ...
/// exporter.finalize()?; // Writes the JSON file
/// ```
pub struct JsonFrameExporter {
    output_path: String,
    frames: Vec<RenderFrame>,
    submitted: u32,
}

impl JsonFrameExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new(output_path: &str) -> Self {
        Self {
            output_path: output_path.to_string(),
            frames: Vec::new(),
            submitted: 0,
        }
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self) -> CogspinResult<()> {
        self.frames.clear();
        self.submitted = 0;
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> CogspinResult<()> {
        self.frames.push(frame.clone());
        self.submitted += 1;
        Ok(())
    }

    fn finalize(&mut self) -> CogspinResult<()> {
        let data = AnimationData {
            frame_count: self.frames.len() as u32,
            frames: std::mem::take(&mut self.frames),
        };
        let json = serde_json::to_string(&data)
            .map_err(|e| CogspinError::Serialization(e.to_string()))?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.submitted
    }
}
