//! # cogspin-telemetry
//!
//! Event bus for simulation telemetry. The frame loop emits structured
//! events (phase transitions, coupling residuals, spin readouts) that can
//! be consumed by pluggable sinks (tracing output, in-memory capture).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
