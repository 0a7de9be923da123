//! # cogspin-render
//!
//! The render boundary of the Cogspin simulation.
//!
//! The frame loop produces a [`RenderFrame`] per frame — one 4×4
//! orientation transform and x position per body, plus a HUD spin
//! readout — and hands it to a [`Renderer`]:
//! - [`HeadlessRenderer`] — discards frames (headless runs, CI)
//! - [`JsonFrameExporter`] — captures the animation to a JSON file
//! - the Bevy viewer consumes frames directly (cogspin-viewer)

pub mod hud;
pub mod json_exporter;
pub mod renderer;

pub use hud::{SpinDirection, SpinReadout};
pub use json_exporter::JsonFrameExporter;
pub use renderer::{BodyFrame, HeadlessRenderer, RenderFrame, Renderer};
