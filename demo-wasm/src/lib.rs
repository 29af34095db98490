//! Browser host for the drape simulator.
//!
//! The canvas page supplies the host services the core treats as external:
//! it creates the window,
//! polls key state into a steering snapshot, paces frames, applies the 2D
//! camera transform, and draws the point/edge buffers exposed here.

use drape::{
    build_cloth, build_rope, ClothConfig, NoOpStepObserver, RopeConfig, SimConfig, Simulation,
    SteerInput, Vec2,
};
use wasm_bindgen::prelude::*;

fn flatten(points: impl Iterator<Item = Vec2<f32>>) -> Vec<f32> {
    let mut out = Vec::new();
    for p in points {
        out.push(p.x);
        out.push(p.y);
    }
    out
}

// ---- Cloth Demo ----

#[wasm_bindgen]
pub struct ClothDemo {
    sim: Simulation<f32>,
    input: SteerInput,
}

#[wasm_bindgen]
impl ClothDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(cols: usize, rows: usize, spacing: f32) -> Self {
        let mut sim = Simulation::new(SimConfig::new()).expect("pool allocation failed");
        build_cloth(&mut sim, &ClothConfig::new(cols, rows, spacing))
            .expect("cloth exceeds pool capacity");
        ClothDemo { sim, input: SteerInput::NONE }
    }

    /// Record the key state sampled by the page for the next update.
    pub fn set_input(&mut self, left: bool, right: bool, up: bool, down: bool) {
        self.input = SteerInput { left, right, up, down };
    }

    /// Advance one fixed step (the page calls this once per frame).
    pub fn update(&mut self) {
        self.sim.step(self.input, &mut NoOpStepObserver);
    }

    /// Returns flat [x0, y0, x1, y1, ...] point positions in slot order.
    pub fn positions(&self) -> Vec<f32> {
        flatten(self.sim.points().map(|(_, p)| p.curr))
    }

    /// Returns flat [ax, ay, bx, by, ...] endpoint pairs, one per constraint.
    pub fn edges(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.sim.constraint_count() * 4);
        for (a, b) in self.sim.edges() {
            out.push(a.x);
            out.push(a.y);
            out.push(b.x);
            out.push(b.y);
        }
        out
    }

    pub fn point_count(&self) -> usize {
        self.sim.point_count()
    }

    pub fn edge_count(&self) -> usize {
        self.sim.constraint_count()
    }
}

// ---- Rope Demo ----

#[wasm_bindgen]
pub struct RopeDemo {
    sim: Simulation<f32>,
    anchor: drape::PointId,
    input: SteerInput,
}

#[wasm_bindgen]
impl RopeDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(segments: usize) -> Self {
        let mut sim = Simulation::new(SimConfig::new()).expect("pool allocation failed");
        let rope = build_rope(
            &mut sim,
            &RopeConfig::new(Vec2::new(-50.0f32, 0.0), Vec2::new(50.0, 0.0), segments),
        )
        .expect("rope exceeds pool capacity");
        let anchor = rope.points()[0];
        RopeDemo { sim, anchor, input: SteerInput::NONE }
    }

    pub fn set_input(&mut self, left: bool, right: bool, up: bool, down: bool) {
        self.input = SteerInput { left, right, up, down };
    }

    pub fn update(&mut self) {
        self.sim.step(self.input, &mut NoOpStepObserver);
    }

    /// Drag the pinned end of the rope (e.g. to follow the mouse).
    pub fn move_anchor(&mut self, x: f32, y: f32) {
        let point = self.sim.point_mut(self.anchor);
        point.curr = Vec2::new(x, y);
        point.prev = point.curr;
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions from anchor to tail.
    pub fn positions(&self) -> Vec<f32> {
        flatten(self.sim.points().map(|(_, p)| p.curr))
    }

    pub fn particle_count(&self) -> usize {
        self.sim.point_count()
    }
}
