//! Monte Carlo approximation of π.

use rand::Rng;

use crate::error::EstimateError;

/// Area of the `[-1, 1] x [-1, 1]` sampling square.
const SQUARE_AREA: f64 = 4.0;

/// Estimate π by throwing `points` uniform samples into the square
/// `[-1, 1] x [-1, 1]` and scaling the fraction inside the unit circle.
pub fn estimate_pi<R: Rng + ?Sized>(rng: &mut R, points: u64) -> Result<f64, EstimateError> {
    if points == 0 {
        return Err(EstimateError::NoPoints);
    }

    let mut inside = 0u64;
    for _ in 0..points {
        let x = rng.random::<f64>() * 2.0 - 1.0;
        let y = rng.random::<f64>() * 2.0 - 1.0;
        if x * x + y * y <= 1.0 {
            inside += 1;
        }
    }

    let estimate = SQUARE_AREA * (inside as f64 / points as f64);
    tracing::debug!(points, inside, estimate, "pi estimated");
    Ok(estimate)
}
