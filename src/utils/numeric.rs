// src/utils/numeric.rs

/// Rounds to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Integer percentage of score over max points; 0 when the denominator is
/// not positive.
pub fn percentage(total_score: f64, total_points: f64) -> u32 {
    if total_points > 0.0 {
        ((total_score / total_points) * 100.0).round() as u32
    } else {
        0
    }
}
