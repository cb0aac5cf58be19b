//! Reusable formation fixtures.
//!
//! - [`equilateral_triangle`]: three agents evenly spaced on a circle.
//! - [`right_triangle`]: legs along the axes.
//! - [`collinear`]: `n` agents on one line (degenerate formation).
//! - [`ring`]: `n` agents evenly spaced on a circle.

use std::f64::consts::{FRAC_PI_2, TAU};

use plume_core::Vec2;

/// Vertices of an equilateral triangle inscribed in the circle of
/// `radius` around `center`, first vertex straight up.
pub fn equilateral_triangle(center: Vec2, radius: f64) -> Vec<Vec2> {
    (0..3)
        .map(|k| center + Vec2::from_angle(FRAC_PI_2 + k as f64 * TAU / 3.0) * radius)
        .collect()
}

/// Right triangle with the right angle at `corner` and legs of length
/// `leg` along +x and +y.
pub fn right_triangle(corner: Vec2, leg: f64) -> Vec<Vec2> {
    vec![
        corner,
        corner + Vec2::new(leg, 0.0),
        corner + Vec2::new(0.0, leg),
    ]
}

/// `n` points starting at `start`, spaced by `step`.
pub fn collinear(n: usize, start: Vec2, step: Vec2) -> Vec<Vec2> {
    (0..n).map(|i| start + step * i as f64).collect()
}

/// `n` points evenly spaced on the circle of `radius` around `center`.
pub fn ring(n: usize, center: Vec2, radius: f64) -> Vec<Vec2> {
    (0..n)
        .map(|k| center + Vec2::from_angle(k as f64 * TAU / n as f64) * radius)
        .collect()
}
