//! Configuration types for the simulation.

use crate::float::Float;
use crate::vec::Vec2;

/// Configuration for a simulation: timestep, iteration budget, forces and
/// pool capacities.
///
/// # Builder Pattern
/// ```
/// use drape::config::SimConfig;
/// use drape::vec::Vec2;
///
/// let config: SimConfig<f32> = SimConfig::new()
///     .with_target_fps(60.0)
///     .with_sub_steps(2)
///     .with_relaxation_passes(4)
///     .with_gravity(Vec2::new(0.0, 9.81));
/// ```
pub struct SimConfig<F: Float> {
    /// Fixed timestep advanced by each integration sub-step. Derived from the
    /// host's target frame rate, never from wall-clock deltas. Default: 1/60.
    pub timestep: F,
    /// Integration sub-steps per `step` call. Default: 2.
    pub sub_steps: usize,
    /// Full relaxation passes over all constraints after each sub-step.
    /// More passes = stiffer, more accurate meshes. Default: 4.
    pub relaxation_passes: usize,
    /// Gravity acceleration, y-down screen convention. Default: (0, 9.81).
    pub gravity: Vec2<F>,
    /// Implicit-velocity scale in [0, 1]. 1.0 = no damping. Default: 1.0.
    pub damping: F,
    /// Magnitude of the steering acceleration per held direction. Default: 10.
    pub steer_accel: F,
    /// Fixed point pool capacity. Default: 1024.
    pub point_capacity: usize,
    /// Fixed constraint pool capacity. Default: 4096.
    pub constraint_capacity: usize,
}

impl<F: Float> SimConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimConfig {
            timestep: F::from_f32(1.0 / 60.0),
            sub_steps: 2,
            relaxation_passes: 4,
            gravity: Vec2::new(F::zero(), F::from_f32(9.81)),
            damping: F::one(),
            steer_accel: F::from_f32(10.0),
            point_capacity: 1024,
            constraint_capacity: 4096,
        }
    }

    /// Set the timestep directly.
    pub fn with_timestep(mut self, timestep: F) -> Self {
        self.timestep = timestep;
        self
    }

    /// Derive the timestep from a target frame rate.
    pub fn with_target_fps(mut self, fps: f32) -> Self {
        self.timestep = F::from_f32(1.0 / fps);
        self
    }

    /// Set the number of integration sub-steps per step.
    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }

    /// Set the number of relaxation passes per sub-step.
    pub fn with_relaxation_passes(mut self, passes: usize) -> Self {
        self.relaxation_passes = passes.max(1);
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    /// Set the steering acceleration magnitude.
    pub fn with_steer_accel(mut self, steer_accel: F) -> Self {
        self.steer_accel = steer_accel;
        self
    }

    /// Set the point pool capacity.
    pub fn with_point_capacity(mut self, capacity: usize) -> Self {
        self.point_capacity = capacity;
        self
    }

    /// Set the constraint pool capacity.
    pub fn with_constraint_capacity(mut self, capacity: usize) -> Self {
        self.constraint_capacity = capacity;
        self
    }
}

impl<F: Float> Default for SimConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
