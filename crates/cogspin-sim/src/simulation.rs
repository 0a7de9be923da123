//! Per-frame orchestration.
//!
//! One `Simulation` value owns all state the frame loop needs: both body
//! records, the approach controller, the accelerator backend, and the
//! telemetry bus. `step()` runs the strict per-frame sequence — gate
//! check, optional coupling dispatch, device read-back, orientation
//! integration, render handoff — and nothing overlaps across frames.

use std::time::Instant;

use cogspin_gpu::{tangential_residual, CouplingBackend, CouplingParams};
use cogspin_render::{BodyFrame, RenderFrame, SpinReadout};
use cogspin_math::orientation_matrix;
use cogspin_telemetry::{EventBus, EventKind, SimulationEvent};
use cogspin_types::ids::BODY_COUNT;
use cogspin_types::{BodyId, CogspinResult};

use crate::approach::{ApproachController, Phase};
use crate::body::BodyState;
use crate::config::SimConfig;

/// The simulation: two bodies, the approach gate, and the accelerator.
pub struct Simulation {
    config: SimConfig,
    params: CouplingParams,
    bodies: [BodyState; BODY_COUNT],
    approach: ApproachController,
    backend: Box<dyn CouplingBackend>,
    bus: EventBus,
    frame: u32,
    contact_frame: Option<u32>,
}

impl Simulation {
    /// Builds a simulation and allocates the device-side body records.
    ///
    /// Backend init failure is fatal and surfaces here, before any frame
    /// runs.
    pub fn new(config: SimConfig, mut backend: Box<dyn CouplingBackend>) -> CogspinResult<Self> {
        config.validate()?;
        backend.init(config.left_omega(), config.right_omega())?;

        let bodies = [
            BodyState::new(config.left_omega(), config.left_start_x),
            BodyState::new(config.right_omega(), config.right_start_x),
        ];
        let approach = ApproachController::new(
            config.left_start_x,
            config.right_start_x,
            config.contact_threshold,
            config.approach_step,
        );

        Ok(Self {
            params: config.coupling_params(),
            config,
            bodies,
            approach,
            backend,
            bus: EventBus::new(),
            frame: 0,
            contact_frame: None,
        })
    }

    /// Advances the simulation by one frame and returns the render frame.
    ///
    /// A dispatch or read-back failure aborts the run: the host must not
    /// integrate against stale device state.
    pub fn step(&mut self) -> CogspinResult<RenderFrame> {
        let start = Instant::now();
        self.frame += 1;
        let frame = self.frame;

        let phase = self.approach.update();
        let meshed = phase == Phase::Meshed;
        self.bus
            .emit(SimulationEvent::new(frame, EventKind::FrameBegin { meshed }));

        if meshed {
            if self.contact_frame.is_none() {
                self.contact_frame = Some(frame);
                self.bus.emit(SimulationEvent::new(
                    frame,
                    EventKind::PhaseTransition {
                        left_x: self.approach.left_x(),
                    },
                ));
            }

            // Read-back happens after the dispatch and before integration;
            // device state persists, so nothing is uploaded between frames.
            self.backend.dispatch(&self.params)?;
            let (left, right) = self.backend.read_back()?;
            self.bodies[BodyId::Left.index()].angular_velocity = left;
            self.bodies[BodyId::Right.index()].angular_velocity = right;

            self.bus.emit(SimulationEvent::new(
                frame,
                EventKind::CouplingApplied {
                    residual: tangential_residual(left, right),
                },
            ));
        }

        self.bodies[BodyId::Left.index()].position_x = self.approach.left_x();
        self.bodies[BodyId::Right.index()].position_x = self.approach.right_x();

        for body in &mut self.bodies {
            body.integrate(self.config.dt);
        }

        let render_frame = self.render_frame(meshed);
        for body_frame in &render_frame.bodies {
            self.bus.emit(SimulationEvent::new(
                frame,
                EventKind::SpinReadout {
                    body: body_frame.body,
                    spin_z: body_frame.spin.signed(),
                },
            ));
        }

        self.bus.emit(SimulationEvent::new(
            frame,
            EventKind::FrameEnd {
                wall_time: start.elapsed().as_secs_f64(),
            },
        ));
        self.bus.flush();

        Ok(render_frame)
    }

    fn render_frame(&self, meshed: bool) -> RenderFrame {
        let body_frame = |id: BodyId| {
            let body = &self.bodies[id.index()];
            BodyFrame {
                body: id,
                transform: orientation_matrix(body.orientation),
                position_x: body.position_x,
                spin: SpinReadout::from_angular_velocity(body.angular_velocity),
            }
        };
        RenderFrame {
            frame: self.frame,
            meshed,
            bodies: [body_frame(BodyId::Left), body_frame(BodyId::Right)],
        }
    }

    /// Current state of the given body.
    pub fn body(&self, id: BodyId) -> &BodyState {
        &self.bodies[id.index()]
    }

    /// Frames stepped so far.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Current contact phase.
    pub fn phase(&self) -> Phase {
        self.approach.phase()
    }

    /// The frame on which the bodies made contact, if they have.
    pub fn contact_frame(&self) -> Option<u32> {
        self.contact_frame
    }

    /// The active configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The backend executing the coupling kernel.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Telemetry bus, for registering sinks before the run.
    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Flushes telemetry and finalizes all sinks. Call once at shutdown.
    pub fn shutdown(&mut self) {
        self.bus.finalize();
    }
}
