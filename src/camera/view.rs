//! View matrix construction (look-at).

use glam::{DMat4, DVec3, DVec4};

use crate::error::{Error, Result};

/// Build a right-handed world-to-camera view matrix.
///
/// The camera basis is derived from the three inputs:
///
/// - `forward = normalize(eye - target)`: the camera's local +Z axis,
///   pointing *away* from the look direction
/// - `right = normalize(up × forward)`: local X
/// - `true_up = forward × right`: re-derived local Y, orthogonal to both
///   even when the input `up` is only approximate
///
/// The basis vectors are placed in the **rows** of the rotation, so the
/// matrix is already the inverse (world-to-camera) rotation; composing with
/// a translation by `-eye` then yields the full view transform without a
/// separate inversion step:
///
/// ```text
/// View = Rotation · Translate(-eye)
/// ```
///
/// # Errors
///
/// Returns `Error::InvalidGeometry` when any input component is non-finite,
/// when `eye` and `target` coincide (the forward direction is undefined), or
/// when `up` is parallel or anti-parallel to the view axis (the cross
/// product collapses and no basis exists).
pub fn look_at(eye: DVec3, target: DVec3, up: DVec3) -> Result<DMat4> {
    if !eye.is_finite() || !target.is_finite() || !up.is_finite() {
        return Err(Error::InvalidGeometry(
            "eye, target, and up must have finite components".to_string(),
        ));
    }

    let forward = (eye - target).try_normalize().ok_or_else(|| {
        Error::InvalidGeometry(format!("eye and target coincide at {}", eye))
    })?;

    let right = up.cross(forward).try_normalize().ok_or_else(|| {
        Error::InvalidGeometry(format!(
            "up direction {} is parallel to the view axis {}",
            up, forward
        ))
    })?;

    let true_up = forward.cross(right).normalize();

    // Basis vectors across the rows: this rotation is world-to-camera
    // already, no inversion needed.
    let rotation = DMat4::from_cols(
        DVec4::new(right.x, true_up.x, forward.x, 0.0),
        DVec4::new(right.y, true_up.y, forward.y, 0.0),
        DVec4::new(right.z, true_up.z, forward.z, 0.0),
        DVec4::new(0.0, 0.0, 0.0, 1.0),
    );

    Ok(rotation * DMat4::from_translation(-eye))
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
