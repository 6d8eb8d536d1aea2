//! Free-standing vector helpers used by shading and intersection code.

use crate::Vec3;

/// Return `v` scaled to unit length.
///
/// A zero-length (or non-finite) vector has no direction, so the zero vector
/// is returned instead of letting NaN leak into shading.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let len = v.length();
    if len > 0.0 && len.is_finite() {
        v / len
    } else {
        Vec3::ZERO
    }
}

/// Mirror `v` about the unit normal `n`.
///
/// Returns `v - 2 (v . n) n`. If both inputs are unit length the result is
/// too, up to rounding.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
