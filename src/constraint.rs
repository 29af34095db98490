//! Distance constraints and their relaxation behavior.

use crate::float::Float;
use crate::point::Point;
use crate::store::{PointId, Pool};

/// How a constraint responds to deviation from its rest length.
///
/// Closed dispatch: each kind maps the signed length error to an optional
/// correction scale, so new kinds slot in without touching the relaxation
/// loop's control flow.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConstraintKind<F: Float> {
    /// Rigid link: fully corrects both stretching and compression.
    Line,
    /// Elastic link: corrects a `stiffness` fraction of the error per pass,
    /// in both directions. Stiffness is expected in (0, 1].
    Spring { stiffness: F },
    /// Slack cord: fully corrects stretching, ignores compression.
    Rope,
}

impl<F: Float> ConstraintKind<F> {
    /// Correction scale for a signed length error, or `None` to skip.
    pub fn correction_scale(&self, diff: F) -> Option<F> {
        match self {
            ConstraintKind::Line => Some(F::one()),
            ConstraintKind::Spring { stiffness } => Some(*stiffness),
            ConstraintKind::Rope => {
                if diff < F::zero() {
                    None
                } else {
                    Some(F::one())
                }
            }
        }
    }
}

/// A distance constraint between two point slots.
///
/// Immutable after insertion. Endpoint validity is checked when the
/// constraint enters the simulation, not here.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Constraint<F: Float> {
    pub kind: ConstraintKind<F>,
    pub rest_length: F,
    pub a: PointId,
    pub b: PointId,
}

impl<F: Float> Constraint<F> {
    pub fn new(kind: ConstraintKind<F>, rest_length: F, a: PointId, b: PointId) -> Self {
        Constraint { kind, rest_length, a, b }
    }

    /// Relax this constraint one step toward its rest length.
    ///
    /// Pinned endpoints never move: with both pinned this is a no-op, with
    /// one pinned the free endpoint takes the whole correction, otherwise the
    /// correction splits evenly (equal implicit mass). Coincident endpoints
    /// have no defined direction and are skipped so no NaN enters the state.
    pub fn satisfy(&self, points: &mut Pool<PointId, Point<F>>) {
        let a = *points.get(self.a);
        let b = *points.get(self.b);

        if a.pinned && b.pinned {
            return;
        }

        let delta = a.curr - b.curr;
        let dist = delta.length();
        if dist.is_near_zero(F::from_f32(1e-10)) {
            return;
        }

        let diff = dist - self.rest_length;
        let scale = match self.kind.correction_scale(diff) {
            Some(scale) => scale,
            None => return,
        };

        // Unit direction from b toward a.
        let dir = delta.scale(F::one() / dist);
        let correction = dir.scale(diff * scale);

        if a.pinned {
            points.get_mut(self.b).curr = b.curr + correction;
        } else if b.pinned {
            points.get_mut(self.a).curr = a.curr - correction;
        } else {
            points.get_mut(self.a).curr = a.curr - correction.scale(F::half());
            points.get_mut(self.b).curr = b.curr + correction.scale(F::half());
        }
    }
}
