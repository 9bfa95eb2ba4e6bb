//! Render surface collaborator
//!
//! The camera consumes exactly two scalar readouts from the renderer: the
//! drawable width and height. `RenderSurface` is that slice of the renderer,
//! kept as a trait so any backend (window, swapchain, offscreen target) can
//! provide it without the camera knowing about windowing.

use crate::error::{Error, Result};

/// Viewport dimension provider.
///
/// Implemented by whatever owns the drawable area. The camera derives its
/// aspect ratio from these two readouts at construction time and never
/// queries the surface again.
pub trait RenderSurface {
    /// Drawable width in pixels.
    fn width(&self) -> f64;

    /// Drawable height in pixels.
    fn height(&self) -> f64;
}

/// Derive the aspect ratio (width / height) of a surface.
///
/// # Errors
///
/// Returns `Error::InvalidConfiguration` if either dimension is non-positive
/// or non-finite, or if the quotient is not a finite positive number.
pub fn aspect_ratio(surface: &dyn RenderSurface) -> Result<f64> {
    let width = surface.width();
    let height = surface.height();

    if !width.is_finite() || width <= 0.0 {
        return Err(Error::InvalidConfiguration(format!(
            "surface width must be a positive finite number, got {}",
            width
        )));
    }
    if !height.is_finite() || height <= 0.0 {
        return Err(Error::InvalidConfiguration(format!(
            "surface height must be a positive finite number, got {}",
            height
        )));
    }

    let aspect = width / height;
    if !aspect.is_finite() || aspect <= 0.0 {
        return Err(Error::InvalidConfiguration(format!(
            "aspect ratio of {}x{} surface is not a finite positive number",
            width, height
        )));
    }

    Ok(aspect)
}

// ============================================================================
// Mock surface (unit tests only, no GPU or window required)
// ============================================================================

/// Fixed-size surface for unit tests
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct MockSurface {
    pub width: f64,
    pub height: f64,
}

#[cfg(test)]
impl MockSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
impl RenderSurface for MockSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
#[path = "surface_tests.rs"]
mod tests;
