use approx::assert_relative_eq;
use heliopos::Position3D;

pub fn assert_position_close(actual: &Position3D, expected: &Position3D, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Julian Dates spread over ±2 centuries around J2000.0.
#[allow(dead_code)]
pub fn sample_dates() -> Vec<f64> {
    (-20..=20).map(|k| 2451545.0 + k as f64 * 3652.5 + 0.37).collect()
}
