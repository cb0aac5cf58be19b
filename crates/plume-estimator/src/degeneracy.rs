//! Formation degeneracy index.
//!
//! The centroid-relative positions `xᵢ = rᵢ − r_c` form an N×2 matrix
//! `X`. Its smallest singular value measures how well the formation
//! spans the plane: near zero means the agents are (close to) collinear
//! and the gradient is only observed along one direction.
//!
//! `X` has only two columns, so a one-sided Jacobi rotation (Hestenes)
//! orthogonalizes it in a single step; the singular values are then the
//! norms of the rotated columns:
//!
//! ```text
//! α = Σx²   β = Σy²   γ = Σxy
//! ζ = (β − α) / 2γ,   t = sign(ζ) / (|ζ| + sqrt(1 + ζ²))
//! c = 1 / sqrt(1 + t²),   s = c·t
//! x' = c·x − s·y,   y' = s·x + c·y
//! σ_min = min(‖x'‖, ‖y'‖)
//! ```
//!
//! Working on the rows directly keeps full precision for near-collinear
//! formations. Going through `det(XᵀX)` instead squares the condition
//! number and certifies collinear formations with a radius around `1e6`
//! as non-degenerate.

use plume_core::Vec2;

/// Default cut-off below which a formation counts as degenerate.
///
/// Absolute, not relative to the formation radius; override it with
/// [`SwarmEstimator::with_degeneracy_threshold`](crate::SwarmEstimator::with_degeneracy_threshold).
pub const DEFAULT_DEGENERACY_THRESHOLD: f64 = 1e-3;

/// Upper bound on rotations before the columns are taken as orthogonal.
/// One is exact in exact arithmetic; later ones only absorb rounding.
const MAX_SWEEPS: usize = 4;

/// Smallest singular value of the matrix whose rows are `offsets`.
///
/// Returns `0.0` for fewer than two linearly independent rows, and for
/// rows with non-finite components.
pub fn smallest_singular_value<I>(offsets: I) -> f64
where
    I: IntoIterator<Item = Vec2>,
{
    let mut rows: Vec<Vec2> = offsets.into_iter().collect();

    for _ in 0..MAX_SWEEPS {
        let (alpha, beta, gamma) = column_products(&rows);
        if !(alpha.is_finite() && beta.is_finite() && gamma.is_finite()) {
            return 0.0;
        }
        if gamma == 0.0 || gamma.abs() <= f64::EPSILON * (alpha * beta).sqrt() {
            break;
        }
        let zeta = (beta - alpha) / (2.0 * gamma);
        let t = zeta.signum() / (zeta.abs() + 1.0f64.hypot(zeta));
        let c = 1.0 / (1.0 + t * t).sqrt();
        let s = c * t;
        for row in &mut rows {
            *row = Vec2::new(c * row.x - s * row.y, s * row.x + c * row.y);
        }
    }

    let (alpha, beta, _) = column_products(&rows);
    let sigma = alpha.min(beta).sqrt();
    if sigma.is_finite() {
        sigma
    } else {
        0.0
    }
}

/// `(Σx², Σy², Σxy)` over the rows.
fn column_products(rows: &[Vec2]) -> (f64, f64, f64) {
    rows.iter().fold((0.0, 0.0, 0.0), |(xx, yy, xy), r| {
        (xx + r.x * r.x, yy + r.y * r.y, xy + r.x * r.y)
    })
}
