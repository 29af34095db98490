//! Simulation context: pools, configuration, and step orchestration.

use crate::config::SimConfig;
use crate::constraint::{Constraint, ConstraintKind};
use crate::error::SimError;
use crate::float::Float;
use crate::input::SteerInput;
use crate::observer::StepObserver;
use crate::point::Point;
use crate::store::{ConstraintId, PointId, Pool, SlotKey};
use crate::vec::Vec2;

/// A self-contained simulation: point and constraint pools plus config.
///
/// There is no global state; any number of independent simulations can
/// coexist. Pool memory is allocated once here and never grows, so stepping
/// performs no allocation.
pub struct Simulation<F: Float> {
    points: Pool<PointId, Point<F>>,
    constraints: Pool<ConstraintId, Constraint<F>>,
    config: SimConfig<F>,
}

impl<F: Float> Simulation<F> {
    /// Allocate a simulation with the pool capacities in `config`.
    pub fn new(config: SimConfig<F>) -> Result<Self, SimError> {
        let points = Pool::with_capacity(config.point_capacity)?;
        let constraints = Pool::with_capacity(config.constraint_capacity)?;
        Ok(Simulation { points, constraints, config })
    }

    pub fn config(&self) -> &SimConfig<F> {
        &self.config
    }

    /// Insert a point into the lowest free slot.
    pub fn add_point(&mut self, point: Point<F>) -> Result<PointId, SimError> {
        self.points.insert(point)
    }

    /// Insert a constraint between two existing points.
    ///
    /// Endpoints are validated eagerly: both must refer to occupied point
    /// slots and must be distinct. A dangling reference is rejected here so
    /// it can never surface as silent corruption during relaxation.
    pub fn add_constraint(
        &mut self,
        kind: ConstraintKind<F>,
        rest_length: F,
        a: PointId,
        b: PointId,
    ) -> Result<ConstraintId, SimError> {
        if a == b {
            return Err(SimError::DegenerateConstraint);
        }
        if !self.points.contains(a) {
            return Err(SimError::InvalidPointRef { index: a.index() });
        }
        if !self.points.contains(b) {
            return Err(SimError::InvalidPointRef { index: b.index() });
        }
        self.constraints.insert(Constraint::new(kind, rest_length, a, b))
    }

    pub fn point(&self, id: PointId) -> &Point<F> {
        self.points.get(id)
    }

    pub fn point_mut(&mut self, id: PointId) -> &mut Point<F> {
        self.points.get_mut(id)
    }

    pub fn constraint(&self, id: ConstraintId) -> &Constraint<F> {
        self.constraints.get(id)
    }

    /// Occupied points in ascending slot order.
    pub fn points(&self) -> impl Iterator<Item = (PointId, &Point<F>)> {
        self.points.iter()
    }

    /// Occupied constraints in ascending slot order.
    pub fn constraints(&self) -> impl Iterator<Item = (ConstraintId, &Constraint<F>)> {
        self.constraints.iter()
    }

    /// Endpoint position pairs for every constraint, for line rendering.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        self.constraints
            .iter()
            .map(move |(_, c)| (self.points.get(c.a).curr, self.points.get(c.b).curr))
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Advance one full step: `sub_steps` integrations, each followed by
    /// `relaxation_passes` passes over all constraints in slot order.
    ///
    /// The steering snapshot applies for the whole step. Everything here is
    /// deterministic: fixed timestep, fixed iteration counts, fixed order.
    pub fn step<O: StepObserver>(&mut self, input: SteerInput, observer: &mut O) {
        let dt = self.config.timestep;
        let damping = self.config.damping;
        let accel = self.config.gravity + input.acceleration(self.config.steer_accel);

        for _sub in 0..self.config.sub_steps {
            for (_, point) in self.points.iter_mut() {
                point.integrate(accel, dt, damping);
            }
            observer.on_integrate();

            for pass in 0..self.config.relaxation_passes {
                for (_, constraint) in self.constraints.iter() {
                    constraint.satisfy(&mut self.points);
                }
                observer.on_relaxation_pass(pass);
            }
        }

        observer.on_step_complete();
    }
}
