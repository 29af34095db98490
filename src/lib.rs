//! Fixed-timestep Verlet cloth and rope simulation.
//!
//! `drape` simulates particle meshes with position-based (Verlet) integration
//! and iterative distance-constraint relaxation. Points and constraints live
//! in fixed-capacity pools allocated once at startup, so stepping never
//! allocates and step timing stays flat.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Constraint relaxation**: Rope, spring and rigid-line distance
//!   constraints, iteratively relaxed per sub-step
//! - **Fixed-capacity pools**: Typed handles, no per-frame allocation
//! - **Scene builders**: Cloth grids with pinned anchors, rope lines
//! - **Deterministic**: Fixed timestep and iteration order, identical runs
//! - **Observable**: Monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! Window creation, input polling and rendering are host concerns: the host
//! samples key state into a [`SteerInput`] snapshot each frame and reads
//! point positions and constraint edges back for drawing.

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod store;
pub mod point;
pub mod constraint;
pub mod sim;
pub mod scene;
pub mod input;
pub mod config;
pub mod error;
pub mod observer;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use store::{PointId, ConstraintId};
pub use point::Point;
pub use constraint::{Constraint, ConstraintKind};
pub use sim::Simulation;
pub use scene::{build_cloth, build_rope, Cloth, ClothConfig, Rope, RopeConfig};
pub use input::SteerInput;
pub use config::SimConfig;
pub use error::SimError;
pub use observer::{NoOpStepObserver, StepObserver};
