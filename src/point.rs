//! Verlet points with position-based dynamics.

use crate::float::Float;
use crate::vec::Vec2;

/// A Verlet point: current and previous position, velocity implied.
///
/// Velocity is never stored; it is reconstructed each sub-step as
/// `curr - prev`. All points share the same implicit unit mass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point<F: Float> {
    pub prev: Vec2<F>,
    pub curr: Vec2<F>,
    pub pinned: bool,
}

impl<F: Float> Point<F> {
    /// Point at rest: previous and current position coincide.
    pub fn at_rest(pos: Vec2<F>) -> Self {
        Point { prev: pos, curr: pos, pinned: false }
    }

    /// Point with a non-zero initial velocity of `curr - prev` per step.
    pub fn moving(prev: Vec2<F>, curr: Vec2<F>) -> Self {
        Point { prev, curr, pinned: false }
    }

    /// Pinned anchor point. Its position is frozen for the whole run.
    pub fn anchored(pos: Vec2<F>) -> Self {
        Point { prev: pos, curr: pos, pinned: true }
    }

    /// Implicit per-step velocity.
    pub fn velocity(&self) -> Vec2<F> {
        self.curr - self.prev
    }

    pub fn pin(&mut self) {
        self.pinned = true;
        self.prev = self.curr;
    }

    pub fn unpin(&mut self) {
        self.pinned = false;
    }

    /// Advance one fixed sub-step under the given external acceleration.
    ///
    /// Carries the implicit velocity forward (scaled by `damping`) and adds
    /// `accel * dt^2`. Pinned points do not move.
    pub fn integrate(&mut self, accel: Vec2<F>, dt: F, damping: F) {
        if self.pinned {
            return;
        }
        let velocity = (self.curr - self.prev).scale(damping);
        let next = self.curr + velocity + accel.scale(dt * dt);
        self.prev = self.curr;
        self.curr = next;
    }
}
