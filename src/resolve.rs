//! Magnitude resolution: picking one reading out of several feeding the same role.

use glam::Vec2;

/// The value with the largest absolute size, sign preserved.
///
/// Ties keep the earliest value; an empty input resolves to `0.0`.
pub fn max_magnitude(values: impl IntoIterator<Item = f32>) -> f32 {
    values
        .into_iter()
        .fold(0.0, |best, v| if v.abs() > best.abs() { v } else { best })
}

/// The vector with the largest squared length.
///
/// Ties keep the earliest vector; an empty input resolves to [`Vec2::ZERO`].
pub fn max_magnitude_2d(values: impl IntoIterator<Item = Vec2>) -> Vec2 {
    values.into_iter().fold(Vec2::ZERO, |best, v| {
        if v.length_squared() > best.length_squared() {
            v
        } else {
            best
        }
    })
}
