//! Scene builders: cloth grids and rope lines.
//!
//! Builders run once at setup and populate a `Simulation`'s pools. They are
//! not part of the hot path, but the exact grid indexing they produce is
//! load-bearing for everything that follows, so the layout arithmetic here
//! is fixed: row-major identity `row * cols + col`, horizontal neighbor at
//! `index + 1`, vertical neighbor at `index + cols`.

use crate::constraint::ConstraintKind;
use crate::error::SimError;
use crate::float::Float;
use crate::point::Point;
use crate::sim::Simulation;
use crate::store::PointId;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Configuration for a rectangular cloth mesh.
pub struct ClothConfig<F: Float> {
    /// Grid width in points. Must be at least 2.
    pub cols: usize,
    /// Grid height in points. Must be at least 2.
    pub rows: usize,
    /// Rest distance between adjacent points.
    pub spacing: F,
    /// Every `anchor_stride`-th top-row point is pinned, in addition to the
    /// two top corners. Default in `ClothConfig::new`: 4.
    pub anchor_stride: usize,
    /// Constraint kind used for the mesh edges.
    pub kind: ConstraintKind<F>,
}

impl<F: Float> ClothConfig<F> {
    /// Cloth config with the default anchor stride and Rope edges.
    pub fn new(cols: usize, rows: usize, spacing: F) -> Self {
        ClothConfig {
            cols,
            rows,
            spacing,
            anchor_stride: 4,
            kind: ConstraintKind::Rope,
        }
    }
}

/// Handles into a cloth built by `build_cloth`, row-major.
pub struct Cloth {
    cols: usize,
    rows: usize,
    points: AllocVec<PointId>,
}

impl Cloth {
    pub fn point_at(&self, col: usize, row: usize) -> PointId {
        self.points[row * self.cols + col]
    }

    pub fn points(&self) -> &[PointId] {
        &self.points
    }

    pub fn cols(&self) -> usize { self.cols }
    pub fn rows(&self) -> usize { self.rows }
}

/// Build a `cols x rows` cloth mesh centered on the origin.
///
/// Top-row points are pinned at the corners and at every `anchor_stride`-th
/// column; all other points start at rest. Each point is connected to its
/// right and lower neighbor, skipping edges that would leave the grid.
pub fn build_cloth<F: Float>(
    sim: &mut Simulation<F>,
    config: &ClothConfig<F>,
) -> Result<Cloth, SimError> {
    if config.cols < 2 || config.rows < 2 {
        return Err(SimError::InvalidGridDimensions);
    }
    let cols = config.cols;
    let rows = config.rows;
    let stride = config.anchor_stride.max(1);

    let half_w = F::from_f32((cols - 1) as f32) * F::half();
    let half_h = F::from_f32((rows - 1) as f32) * F::half();

    let mut points = AllocVec::with_capacity(cols * rows);
    for i in 0..(cols * rows) {
        let col = i % cols;
        let row = i / cols;

        let x = (F::from_f32(col as f32) - half_w) * config.spacing;
        let y = (F::from_f32(row as f32) - half_h) * config.spacing;
        let pos = Vec2::new(x, y);

        let anchored = row == 0 && (col == 0 || col == cols - 1 || col % stride == 0);
        let point = if anchored {
            Point::anchored(pos)
        } else {
            Point::at_rest(pos)
        };

        points.push(insert_point(sim, point)?);
    }

    for i in 0..(cols * rows) {
        let col = i % cols;
        let row = i / cols;

        if col != cols - 1 {
            insert_edge(sim, config.kind, config.spacing, points[i], points[i + 1])?;
        }
        if row != rows - 1 {
            insert_edge(sim, config.kind, config.spacing, points[i], points[i + cols])?;
        }
    }

    log::debug!(
        "built {}x{} cloth: {} points, {} constraints",
        cols,
        rows,
        sim.point_count(),
        sim.constraint_count()
    );

    Ok(Cloth { cols, rows, points })
}

/// Configuration for a rope line.
pub struct RopeConfig<F: Float> {
    pub start: Vec2<F>,
    pub end: Vec2<F>,
    /// Number of segments; the rope has `segments + 1` points. Must be >= 1.
    pub segments: usize,
    /// Constraint kind used for the segments.
    pub kind: ConstraintKind<F>,
    /// Pin the start point in place.
    pub pin_start: bool,
}

impl<F: Float> RopeConfig<F> {
    /// Rope config with Rope segments and a pinned start.
    pub fn new(start: Vec2<F>, end: Vec2<F>, segments: usize) -> Self {
        RopeConfig {
            start,
            end,
            segments,
            kind: ConstraintKind::Rope,
            pin_start: true,
        }
    }
}

/// Handles into a rope built by `build_rope`, start to end.
pub struct Rope {
    points: AllocVec<PointId>,
}

impl Rope {
    pub fn points(&self) -> &[PointId] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Build a straight rope between two endpoints.
pub fn build_rope<F: Float>(
    sim: &mut Simulation<F>,
    config: &RopeConfig<F>,
) -> Result<Rope, SimError> {
    if config.segments == 0 {
        return Err(SimError::InsufficientSegments);
    }
    let segments = config.segments;
    let segment_length = config.start.distance(config.end) / F::from_f32(segments as f32);

    let mut points = AllocVec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = F::from_f32(i as f32) / F::from_f32(segments as f32);
        let pos = config.start.lerp(config.end, t);
        let point = if config.pin_start && i == 0 {
            Point::anchored(pos)
        } else {
            Point::at_rest(pos)
        };
        points.push(insert_point(sim, point)?);
    }

    for i in 0..segments {
        insert_edge(sim, config.kind, segment_length, points[i], points[i + 1])?;
    }

    Ok(Rope { points })
}

fn insert_point<F: Float>(sim: &mut Simulation<F>, point: Point<F>) -> Result<PointId, SimError> {
    sim.add_point(point).map_err(|err| {
        log::warn!("scene build stopped: {}", err);
        err
    })
}

fn insert_edge<F: Float>(
    sim: &mut Simulation<F>,
    kind: ConstraintKind<F>,
    rest_length: F,
    a: PointId,
    b: PointId,
) -> Result<(), SimError> {
    sim.add_constraint(kind, rest_length, a, b).map_err(|err| {
        log::warn!("scene build stopped: {}", err);
        err
    })?;
    Ok(())
}
