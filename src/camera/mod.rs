//! Camera module — frustum derivation, view construction, and the camera
//! that composes them.
//!
//! The matrix builders are pure functions; the Camera is a passive owner of
//! their results. The crate does NOT manage camera state over time — a
//! camera is computed from a configuration at construction and read back.
//! Moving or resizing means building a new camera through the same pure
//! functions.

mod camera;
mod frustum;
mod view;

pub use camera::{Camera, CameraConfig, CameraMatrices};
pub use frustum::{perspective, Frustum};
pub use view::look_at;
