//! A spaceship orbiting a fixed circle, steered by pointer position.
//!
//! Pressing or dragging on the left part of the screen moves the ship one
//! way around the ring, the right part moves it the other way, and the
//! central band does nothing.

pub mod animation;
pub mod graphics;
pub mod math;
pub mod orbit;
pub mod state;
pub mod widget;

pub use math::{project, Projection, Viewport};
pub use orbit::{OrbitController, Zone};
