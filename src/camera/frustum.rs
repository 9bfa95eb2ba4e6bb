//! Frustum bounds and the perspective projection matrix.
//!
//! A perspective camera sees a truncated pyramid of space between its near
//! and far clipping planes. `Frustum` holds the six bounds of that volume
//! on the near plane; `projection_matrix` turns them into the clip-space
//! transform, and `perspective` derives symmetric bounds from a vertical
//! field of view first.

use glam::{DMat4, DVec4};

use crate::error::{Error, Result};

/// Viewing volume bounds: a truncated pyramid between the near and far
/// clipping planes.
///
/// `left`/`right`/`bottom`/`top` bound the visible rectangle on the near
/// plane. For a valid projection: `right > left`, `top > bottom`,
/// `far > near > 0`. The bounds are plain data; the zero-extent violations
/// surface as `DegenerateFrustum` when the projection matrix is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub near: f64,
    pub far: f64,
}

impl Frustum {
    /// Derive symmetric bounds from a vertical field of view.
    ///
    /// The near plane spans `[-ymax, ymax]` vertically, with
    /// `ymax = near * tan(fov_y / 2)`, and that span scaled by
    /// `aspect_ratio` (width / height) horizontally. This is the standard
    /// vertical-FOV perspective convention (`gluPerspective`).
    pub fn symmetric(fov_y_degrees: f64, aspect_ratio: f64, z_near: f64, z_far: f64) -> Self {
        let ymax = z_near * (fov_y_degrees * std::f64::consts::PI / 360.0).tan();
        let ymin = -ymax;

        Self {
            left: ymin * aspect_ratio,
            right: ymax * aspect_ratio,
            bottom: ymin,
            top: ymax,
            near: z_near,
            far: z_far,
        }
    }

    /// Build the OpenGL-style perspective projection for these bounds.
    ///
    /// In math (row, column) notation the result is
    ///
    /// ```text
    /// | X  0  A  0 |      X = 2n/(r-l)    A = (r+l)/(r-l)
    /// | 0  Y  B  0 |      Y = 2n/(t-b)    B = (t+b)/(t-b)
    /// | 0  0  C  D |      C = -(f+n)/(f-n)
    /// | 0  0 -1  0 |      D = -2fn/(f-n)
    /// ```
    ///
    /// mapping camera space into a clip space whose depth is remapped
    /// non-linearly, with greater precision near the near plane.
    ///
    /// # Errors
    ///
    /// Returns `Error::DegenerateFrustum` when `right == left`,
    /// `top == bottom`, or `far == near`: the volume has zero extent along
    /// an axis and the closed forms above divide by zero.
    pub fn projection_matrix(&self) -> Result<DMat4> {
        if self.right == self.left {
            return Err(Error::DegenerateFrustum(format!(
                "left and right planes coincide at {}",
                self.left
            )));
        }
        if self.top == self.bottom {
            return Err(Error::DegenerateFrustum(format!(
                "top and bottom planes coincide at {}",
                self.top
            )));
        }
        if self.far == self.near {
            return Err(Error::DegenerateFrustum(format!(
                "near and far planes coincide at {}",
                self.near
            )));
        }

        let x = 2.0 * self.near / (self.right - self.left);
        let y = 2.0 * self.near / (self.top - self.bottom);
        let a = (self.right + self.left) / (self.right - self.left);
        let b = (self.top + self.bottom) / (self.top - self.bottom);
        let c = -(self.far + self.near) / (self.far - self.near);
        let d = -2.0 * self.far * self.near / (self.far - self.near);

        // DMat4 is column-major; these are the columns of the matrix above.
        Ok(DMat4::from_cols(
            DVec4::new(x, 0.0, 0.0, 0.0),
            DVec4::new(0.0, y, 0.0, 0.0),
            DVec4::new(a, b, c, -1.0),
            DVec4::new(0.0, 0.0, d, 0.0),
        ))
    }
}

/// Perspective projection from a vertical field of view.
///
/// Derives a symmetric frustum with [`Frustum::symmetric`] and builds its
/// projection with [`Frustum::projection_matrix`].
///
/// `fov_y_degrees` is expected in (0, 180), `aspect_ratio` > 0, and
/// `0 < z_near < z_far`; the degenerate collapses of those ranges are
/// reported as `DegenerateFrustum` by the projection step.
pub fn perspective(
    fov_y_degrees: f64,
    aspect_ratio: f64,
    z_near: f64,
    z_far: f64,
) -> Result<DMat4> {
    Frustum::symmetric(fov_y_degrees, aspect_ratio, z_near, z_far).projection_matrix()
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
