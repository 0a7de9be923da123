//! Simulation configuration.
//!
//! Parameters that control the approach, the coupling kernel, and the
//! integration timestep. Loadable from TOML for the CLI; defaults match
//! the constants in `cogspin-types`.

use serde::{Deserialize, Serialize};

use cogspin_gpu::CouplingParams;
use cogspin_math::Vec3;
use cogspin_types::{constants, CogspinError, CogspinResult};

/// Configuration for a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Integration timestep (seconds).
    pub dt: f32,

    /// Relaxation factor for the coupling correction, in (0, 1].
    pub softness: f32,

    /// Per-step angular velocity damping factor, in (0, 1].
    pub damping_factor: f32,

    /// Clamp bound on every angular velocity component (rad/s).
    pub max_angular_speed: f32,

    /// Left-body x position at which the spheres make contact.
    pub contact_threshold: f32,

    /// Per-frame translation step during the approach phase.
    pub approach_step: f32,

    /// Starting x position of the left body.
    pub left_start_x: f32,

    /// Starting x position of the right body.
    pub right_start_x: f32,

    /// Initial angular velocity of the left body [x, y, z].
    pub left_angular_velocity: [f32; 3],

    /// Initial angular velocity of the right body [x, y, z].
    pub right_angular_velocity: [f32; 3],
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: constants::DEFAULT_DT,
            softness: constants::SOFTNESS,
            damping_factor: constants::DAMPING_FACTOR,
            max_angular_speed: constants::MAX_ANGULAR_SPEED,
            contact_threshold: constants::CONTACT_THRESHOLD,
            approach_step: constants::APPROACH_STEP,
            left_start_x: -2.0,
            right_start_x: 2.0,
            // The left body drives: fast spin with distinct tangential
            // components so the coupling has spin to exchange.
            left_angular_velocity: [0.0, 1.5, 4.0],
            right_angular_velocity: [0.0, -0.5, -1.0],
        }
    }
}

impl SimConfig {
    /// Loads a config from a TOML file.
    pub fn from_toml_path(path: &str) -> CogspinResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Parses a config from TOML text.
    pub fn from_toml_str(text: &str) -> CogspinResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| CogspinError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects parameter values the model cannot run with.
    pub fn validate(&self) -> CogspinResult<()> {
        if self.dt <= 0.0 {
            return Err(CogspinError::InvalidConfig(format!(
                "dt must be positive, got {}",
                self.dt
            )));
        }
        if !(0.0..=1.0).contains(&self.softness) || self.softness == 0.0 {
            return Err(CogspinError::InvalidConfig(format!(
                "softness must be in (0, 1], got {}",
                self.softness
            )));
        }
        if !(0.0..=1.0).contains(&self.damping_factor) || self.damping_factor == 0.0 {
            return Err(CogspinError::InvalidConfig(format!(
                "damping_factor must be in (0, 1], got {}",
                self.damping_factor
            )));
        }
        if self.max_angular_speed <= 0.0 {
            return Err(CogspinError::InvalidConfig(format!(
                "max_angular_speed must be positive, got {}",
                self.max_angular_speed
            )));
        }
        if self.approach_step <= 0.0 {
            return Err(CogspinError::InvalidConfig(format!(
                "approach_step must be positive, got {}",
                self.approach_step
            )));
        }
        if self.left_start_x > self.contact_threshold {
            return Err(CogspinError::InvalidConfig(format!(
                "left body must start before the contact threshold ({} > {})",
                self.left_start_x, self.contact_threshold
            )));
        }
        Ok(())
    }

    /// Kernel parameters derived from this config.
    pub fn coupling_params(&self) -> CouplingParams {
        CouplingParams {
            softness: self.softness,
            damping_factor: self.damping_factor,
            max_angular_speed: self.max_angular_speed,
        }
    }

    /// Initial left angular velocity as a vector.
    pub fn left_omega(&self) -> Vec3 {
        Vec3::from_array(self.left_angular_velocity)
    }

    /// Initial right angular velocity as a vector.
    pub fn right_omega(&self) -> Vec3 {
        Vec3::from_array(self.right_angular_velocity)
    }
}
