//! # cogspin-gpu
//!
//! Accelerator abstraction for the Cogspin mesh-coupling kernel.
//!
//! Provides a [`CouplingBackend`] trait with the CPU reference
//! implementation [`CpuFallback`] (always available). The simulation
//! dispatches the per-frame coupling step through the trait, so the
//! same frame loop runs against a real accelerator backend or the CPU
//! fallback without changing the pipeline.
//!
//! The kernel itself ([`kernel::mesh_coupling_step`]) is a pure function
//! over a snapshot of both bodies' angular velocities; device-resident
//! mutation is an optimization detail of a given backend.

pub mod backend;
pub mod buffers;
pub mod kernel;

pub use backend::{CouplingBackend, CpuFallback};
pub use buffers::BodyBuffer;
pub use kernel::{mesh_coupling_step, tangential_residual, CouplingParams};
