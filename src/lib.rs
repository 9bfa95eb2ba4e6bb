/*!
# Vantage 3D Camera

Camera matrix core for 3D renderers.

This crate computes the two matrices a renderer needs each frame to project a
scene onto a 2D viewport from a virtual camera:

- **Perspective matrix**: a vertical field of view, aspect ratio, and
  near/far clipping distances are turned into a symmetric view frustum, then
  into an OpenGL-style projection matrix.
- **View matrix**: an eye position, target point, and up direction are turned
  into an orthonormal camera basis composed with a translation: the
  world-to-camera transform.

## Architecture

- **RenderSurface**: collaborator trait reporting the viewport dimensions the
  camera derives its aspect ratio from
- **Frustum** / **perspective**: projection matrix builders
- **look_at**: view matrix builder
- **Camera**: owns one perspective and one view matrix, both computed once at
  construction and exposed through read accessors

All camera math is `f64` (`glam::DMat4`); `Camera::matrices()` converts to
`f32` at the GPU-upload boundary.
*/

// Internal modules
mod error;
pub mod camera;
pub mod log;
pub mod surface;

// Main vantage3d namespace module
pub mod vantage3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and dispatch functions, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
        pub use crate::log::{log, log_detailed, reset_logger, set_logger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Render surface sub-module
    pub mod surface {
        pub use crate::surface::*;
    }
}

// Re-export math library at crate root
pub use glam;
