//! Per-step steering input.

use crate::float::Float;
use crate::vec::Vec2;

/// Directional steering held during one simulation step.
///
/// The host samples its own key states once per frame and passes the snapshot
/// to `Simulation::step`; the core never polls input devices. Held directions
/// become an acceleration added to gravity for every unpinned point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SteerInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl SteerInput {
    /// No direction held.
    pub const NONE: SteerInput = SteerInput {
        left: false,
        right: false,
        up: false,
        down: false,
    };

    /// Acceleration vector for the held directions, y-down screen convention.
    pub fn acceleration<F: Float>(self, magnitude: F) -> Vec2<F> {
        let mut accel = Vec2::zero();
        if self.left {
            accel.x = accel.x - magnitude;
        }
        if self.right {
            accel.x = accel.x + magnitude;
        }
        if self.up {
            accel.y = accel.y - magnitude;
        }
        if self.down {
            accel.y = accel.y + magnitude;
        }
        accel
    }
}
