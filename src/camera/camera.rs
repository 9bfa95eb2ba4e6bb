//! Camera — owns the perspective and view matrices for one configuration.
//!
//! A Camera computes both matrices exactly once, at construction, from a
//! render surface and a `CameraConfig`. The accessors never recompute;
//! repeated reads return bit-identical values. The engine does NOT store or
//! manage cameras — they are tools owned and driven by the caller.

use glam::{DMat4, DVec3};

use super::frustum;
use super::view;
use crate::error::{Error, Result};
use crate::surface::{self, RenderSurface};

/// Log source for camera construction messages
const LOG_SOURCE: &str = "vantage3d::Camera";

/// Camera construction parameters.
///
/// The defaults place the eye at distance 100 on the +Z axis looking at the
/// origin, Y-up, with a 45° vertical field of view and clipping planes at 1
/// and 10000.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Vertical field of view in degrees, expected in (0, 180)
    pub fov_y_degrees: f64,

    /// Near clipping plane distance, expected > 0
    pub z_near: f64,

    /// Far clipping plane distance, expected > z_near
    pub z_far: f64,

    /// Camera position in world space
    pub eye: DVec3,

    /// Point the camera looks at
    pub target: DVec3,

    /// Approximate up direction; re-orthogonalized during view construction
    pub up: DVec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            z_near: 1.0,
            z_far: 10000.0,
            eye: DVec3::new(0.0, 0.0, 100.0),
            target: DVec3::ZERO,
            up: DVec3::Y,
        }
    }
}

/// Perspective + view matrix pair for one camera configuration.
///
/// Both matrices are immutable for the camera's lifetime. To move or resize,
/// build a new camera from an updated configuration; the builders are pure,
/// so no state carries over between constructions.
///
/// # Example
///
/// ```no_run
/// use vantage_3d_camera::vantage3d::camera::Camera;
/// use vantage_3d_camera::vantage3d::surface::RenderSurface;
///
/// struct Window { width: f64, height: f64 }
///
/// impl RenderSurface for Window {
///     fn width(&self) -> f64 { self.width }
///     fn height(&self) -> f64 { self.height }
/// }
///
/// let window = Window { width: 1920.0, height: 1080.0 };
/// let camera = Camera::new(&window)?;
/// let projection = camera.perspective();
/// let view = camera.view();
/// # Ok::<(), vantage_3d_camera::vantage3d::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Camera {
    config: CameraConfig,
    aspect_ratio: f64,
    perspective: DMat4,
    view: DMat4,
}

impl Camera {
    /// Create a camera with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` if the surface reports
    /// unusable dimensions.
    pub fn new(surface: &dyn RenderSurface) -> Result<Self> {
        Self::with_config(surface, CameraConfig::default())
    }

    /// Create a camera with an explicit configuration.
    ///
    /// Derives the aspect ratio from the surface, then computes the
    /// perspective and view matrices. Failures are logged and returned; no
    /// partial camera is produced.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidConfiguration` for unusable surface dimensions
    /// - `Error::DegenerateFrustum` for zero-extent frustum bounds
    /// - `Error::InvalidGeometry` for degenerate eye/target/up geometry
    pub fn with_config(surface: &dyn RenderSurface, config: CameraConfig) -> Result<Self> {
        let aspect_ratio = surface::aspect_ratio(surface).map_err(Self::log_and_return_error)?;

        let perspective = frustum::perspective(
            config.fov_y_degrees,
            aspect_ratio,
            config.z_near,
            config.z_far,
        )
        .map_err(Self::log_and_return_error)?;

        let view =
            view::look_at(config.eye, config.target, config.up).map_err(Self::log_and_return_error)?;

        crate::camera_debug!(
            LOG_SOURCE,
            "Camera created: fov {}°, aspect {:.4}, near {}, far {}",
            config.fov_y_degrees,
            aspect_ratio,
            config.z_near,
            config.z_far
        );

        Ok(Self {
            config,
            aspect_ratio,
            perspective,
            view,
        })
    }

    /// Helper to log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        crate::camera_error!(LOG_SOURCE, "Camera construction failed: {}", error);
        error
    }

    // ===== GETTERS =====

    /// Perspective projection matrix (camera space → clip space).
    pub fn perspective(&self) -> &DMat4 {
        &self.perspective
    }

    /// View matrix (world space → camera space).
    pub fn view(&self) -> &DMat4 {
        &self.view
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection(&self) -> DMat4 {
        self.perspective * self.view
    }

    /// Aspect ratio derived from the surface at construction time.
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Configuration this camera was built from.
    ///
    /// Rebuilding with the same configuration and surface reproduces the
    /// same matrices exactly.
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Both matrices as an `f32` uniform block for GPU upload.
    pub fn matrices(&self) -> CameraMatrices {
        CameraMatrices {
            view: self.view.as_mat4().to_cols_array_2d(),
            projection: self.perspective.as_mat4().to_cols_array_2d(),
        }
    }
}

/// Uniform-buffer layout of the camera matrices (`f32`, column-major).
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraMatrices {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
