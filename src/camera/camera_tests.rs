//! Unit tests for camera.rs
//!
//! Tests construction from a mock surface, accessor behavior, error
//! propagation, and the GPU upload block.

use super::*;
use crate::error::Error;
use crate::surface::MockSurface;
use glam::DVec3;

const TOLERANCE: f64 = 1e-9;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_camera_new_uses_defaults() {
    let surface = MockSurface::new(1920.0, 1080.0);
    let camera = Camera::new(&surface).unwrap();

    assert_eq!(camera.aspect_ratio(), 1920.0 / 1080.0);
    assert_eq!(camera.config().fov_y_degrees, 45.0);
    assert_eq!(camera.config().z_near, 1.0);
    assert_eq!(camera.config().z_far, 10000.0);
    assert_eq!(camera.config().eye, DVec3::new(0.0, 0.0, 100.0));
    assert_eq!(camera.config().target, DVec3::ZERO);
    assert_eq!(camera.config().up, DVec3::Y);
}

#[test]
fn test_default_view_is_axis_aligned() {
    let surface = MockSurface::new(800.0, 600.0);
    let camera = Camera::new(&surface).unwrap();

    // Default eye looks down the Z axis at the origin: identity rotation,
    // translation -100 along Z. m[col][row].
    let m = camera.view().to_cols_array_2d();
    assert!((m[0][0] - 1.0).abs() < TOLERANCE);
    assert!((m[1][1] - 1.0).abs() < TOLERANCE);
    assert!((m[2][2] - 1.0).abs() < TOLERANCE);
    assert!((m[3][2] + 100.0).abs() < TOLERANCE);
    assert!(m[3][0].abs() < TOLERANCE);
    assert!(m[3][1].abs() < TOLERANCE);
}

#[test]
fn test_with_config_overrides_defaults() {
    let surface = MockSurface::new(1000.0, 500.0);
    let config = CameraConfig {
        fov_y_degrees: 60.0,
        z_near: 0.5,
        z_far: 200.0,
        eye: DVec3::new(10.0, 0.0, 0.0),
        target: DVec3::ZERO,
        up: DVec3::Y,
    };
    let camera = Camera::with_config(&surface, config).unwrap();

    assert_eq!(camera.aspect_ratio(), 2.0);
    assert_eq!(camera.config().fov_y_degrees, 60.0);

    // Eye on the +X axis: the eye maps to the camera-space origin and the
    // target sits 10 units down the -Z camera axis
    let at_eye = camera.view().transform_point3(DVec3::new(10.0, 0.0, 0.0));
    assert!(at_eye.abs_diff_eq(DVec3::ZERO, TOLERANCE));
    let at_target = camera.view().transform_point3(DVec3::ZERO);
    assert!(at_target.abs_diff_eq(DVec3::new(0.0, 0.0, -10.0), TOLERANCE));
}

#[test]
fn test_camera_clone() {
    let surface = MockSurface::new(1280.0, 720.0);
    let camera = Camera::new(&surface).unwrap();
    let cloned = camera.clone();

    assert_eq!(
        camera.perspective().to_cols_array(),
        cloned.perspective().to_cols_array()
    );
    assert_eq!(camera.view().to_cols_array(), cloned.view().to_cols_array());
    assert_eq!(camera.aspect_ratio(), cloned.aspect_ratio());
}

// ============================================================================
// Accessors
// ============================================================================

#[test]
fn test_accessors_are_idempotent() {
    let surface = MockSurface::new(1024.0, 768.0);
    let camera = Camera::new(&surface).unwrap();

    // Repeated reads return bit-identical matrices
    assert_eq!(
        camera.perspective().to_cols_array(),
        camera.perspective().to_cols_array()
    );
    assert_eq!(camera.view().to_cols_array(), camera.view().to_cols_array());
    assert_eq!(
        camera.view_projection().to_cols_array(),
        camera.view_projection().to_cols_array()
    );
}

#[test]
fn test_view_projection_composition() {
    let surface = MockSurface::new(640.0, 480.0);
    let camera = Camera::new(&surface).unwrap();

    let composed = *camera.perspective() * *camera.view();
    assert_eq!(
        camera.view_projection().to_cols_array(),
        composed.to_cols_array()
    );
}

#[test]
fn test_rebuild_from_config_reproduces_matrices() {
    let surface = MockSurface::new(1600.0, 900.0);
    let camera = Camera::new(&surface).unwrap();

    // The builders are pure: same surface + same config = same matrices
    let rebuilt = Camera::with_config(&surface, camera.config().clone()).unwrap();
    assert_eq!(
        camera.perspective().to_cols_array(),
        rebuilt.perspective().to_cols_array()
    );
    assert_eq!(camera.view().to_cols_array(), rebuilt.view().to_cols_array());
}

// ============================================================================
// Error propagation
// ============================================================================

#[test]
fn test_zero_width_surface_is_rejected() {
    let surface = MockSurface::new(0.0, 1080.0);
    assert!(matches!(
        Camera::new(&surface),
        Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn test_zero_height_surface_is_rejected() {
    let surface = MockSurface::new(1920.0, 0.0);
    assert!(matches!(
        Camera::new(&surface),
        Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn test_nan_surface_is_rejected() {
    let surface = MockSurface::new(f64::NAN, 1080.0);
    assert!(matches!(
        Camera::new(&surface),
        Err(Error::InvalidConfiguration(_))
    ));
}

#[test]
fn test_with_config_propagates_geometry_errors() {
    let surface = MockSurface::new(640.0, 480.0);
    let config = CameraConfig {
        eye: DVec3::ZERO,
        target: DVec3::ZERO,
        ..Default::default()
    };
    assert!(matches!(
        Camera::with_config(&surface, config),
        Err(Error::InvalidGeometry(_))
    ));
}

#[test]
fn test_with_config_propagates_frustum_errors() {
    let surface = MockSurface::new(640.0, 480.0);
    let config = CameraConfig {
        z_near: 5.0,
        z_far: 5.0,
        ..Default::default()
    };
    assert!(matches!(
        Camera::with_config(&surface, config),
        Err(Error::DegenerateFrustum(_))
    ));
}

// ============================================================================
// CameraMatrices
// ============================================================================

#[test]
fn test_matrices_upload_block() {
    let surface = MockSurface::new(1280.0, 720.0);
    let camera = Camera::new(&surface).unwrap();

    let block = camera.matrices();
    assert_eq!(block.view, camera.view().as_mat4().to_cols_array_2d());
    assert_eq!(
        block.projection,
        camera.perspective().as_mat4().to_cols_array_2d()
    );
}

#[test]
fn test_matrices_block_layout() {
    // Two column-major f32 matrices, tightly packed
    assert_eq!(std::mem::size_of::<CameraMatrices>(), 128);

    let surface = MockSurface::new(1280.0, 720.0);
    let camera = Camera::new(&surface).unwrap();
    let block = camera.matrices();

    let bytes: &[u8] = bytemuck::bytes_of(&block);
    assert_eq!(bytes.len(), 128);
}
