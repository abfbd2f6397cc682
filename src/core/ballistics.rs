use log::debug;
use serde::{Deserialize, Serialize};

pub const EARTH_GRAVITY_MPS2: f64 = 9.8;
pub const SAMPLE_STEP_S: f64 = 0.05;
/// Flights shorter than this are treated as never leaving the ground, which
/// absorbs the `sin(pi)` residue of a 180 degree launch.
pub const MIN_FLIGHT_TIME_S: f64 = 1e-9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Sampled flight path plus the closed-form scalars of one launch.
///
/// `points` always ends with the exact landing point `(range, 0)`, even when
/// the fixed-step samples never reach the ground.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryResult {
    pub points: Vec<Point>,
    pub range: f64,
    pub max_height: f64,
    pub time_of_flight: f64,
}

impl TrajectoryResult {
    pub fn landing_point(&self) -> Point {
        Point::new(self.range, 0.0)
    }
}

pub fn velocity_components(angle_deg: f64, speed_mps: f64) -> (f64, f64) {
    let theta = angle_deg.to_radians();
    let vx = speed_mps * theta.cos();
    let vy = speed_mps * theta.sin();
    (vx, vy)
}

pub fn position_at_time(vx: f64, vy: f64, time_s: f64) -> Point {
    let x = vx * time_s;
    let y = (vy * time_s) - (0.5 * EARTH_GRAVITY_MPS2 * time_s * time_s);
    Point::new(x, y)
}

/// Samples the flight of a projectile launched from the origin over flat
/// ground.
///
/// Total over every real input. A non-positive vertical velocity (angle of
/// 0 or 180 degrees, negative angles, zero or negative speed) yields a
/// single-point path holding only `(range, 0)`. Non-finite inputs carry NaN
/// or infinity into the scalars and also collapse the path to that single
/// point.
pub fn compute(angle_deg: f64, speed_mps: f64) -> TrajectoryResult {
    let (vx, vy) = velocity_components(angle_deg, speed_mps);
    let time_of_flight = (2.0 * vy) / EARTH_GRAVITY_MPS2;
    let range =
        (speed_mps * speed_mps * (2.0 * angle_deg.to_radians()).sin()) / EARTH_GRAVITY_MPS2;
    let max_height = (vy * vy) / (2.0 * EARTH_GRAVITY_MPS2);

    // An infinite flight time would never end the step loop.
    let airborne = time_of_flight.is_finite() && time_of_flight > MIN_FLIGHT_TIME_S;
    let mut points: Vec<Point> = if airborne {
        // Step index instead of accumulating t, so long flights don't drift.
        (0u64..)
            .map(|i| i as f64 * SAMPLE_STEP_S)
            .take_while(|&t| t <= time_of_flight)
            .map(|t| position_at_time(vx, vy, t))
            .filter(|p| p.y >= 0.0)
            .collect()
    } else {
        Vec::new()
    };
    points.push(Point::new(range, 0.0));

    debug!(
        "Sampled {} points for angle={angle_deg} deg, speed={speed_mps} m/s \
         (range={range:.3}, max_height={max_height:.3}, time={time_of_flight:.3})",
        points.len()
    );

    TrajectoryResult {
        points,
        range,
        max_height,
        time_of_flight,
    }
}

#[cfg(test)]
mod tests {
    use super::{EARTH_GRAVITY_MPS2, Point, compute};

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn computes_known_values_for_45_degrees() {
        let result = compute(45.0, 20.0);

        assert_close(result.range, 40.8163, 0.001);
        assert_close(result.max_height, 10.2041, 0.001);
        assert_close(result.time_of_flight, 2.8862, 0.001);

        assert_eq!(result.points[0], Point::new(0.0, 0.0));
        assert_close(result.points[1].x, 0.7071, 0.001);
        assert_close(result.points[1].y, 0.6948, 0.001);
    }

    #[test]
    fn path_ends_exactly_at_landing_point() {
        for angle in [1.0, 15.0, 45.0, 60.0, 89.0, 120.0, 179.0] {
            let result = compute(angle, 30.0);
            let last = *result.points.last().unwrap();
            assert_eq!(last, result.landing_point(), "angle={angle}");
            assert_eq!(last.y, 0.0);
        }
    }

    #[test]
    fn landing_point_is_appended_once() {
        let result = compute(45.0, 20.0);
        let landings = result
            .points
            .iter()
            .filter(|p| **p == result.landing_point())
            .count();
        assert_eq!(landings, 1);
    }

    #[test]
    fn scalars_are_non_negative_for_upward_launches() {
        for angle in [0.5, 10.0, 45.0, 90.0, 135.0, 179.5] {
            for speed in [0.1, 5.0, 50.0] {
                let result = compute(angle, speed);
                // sin(2θ) is negative past 90 degrees, matching the leftward flight.
                if angle <= 90.0 {
                    assert!(result.range >= -1e-9, "angle={angle} speed={speed}");
                }
                assert!(result.max_height >= 0.0);
                assert!(result.time_of_flight >= 0.0);
            }
        }
    }

    #[test]
    fn retained_samples_stay_above_ground() {
        let result = compute(70.0, 42.0);
        assert!(result.points.iter().all(|p| p.y >= 0.0));
    }

    #[test]
    fn samples_are_ordered_by_time() {
        let result = compute(30.0, 25.0);
        let interior = &result.points[..result.points.len() - 1];
        assert!(interior.windows(2).all(|w| w[1].x > w[0].x));
    }

    #[test]
    fn last_sample_approximates_range() {
        let result = compute(45.0, 20.0);
        let last_sample = result.points[result.points.len() - 2];
        let (vx, _) = super::velocity_components(45.0, 20.0);
        assert!((result.range - last_sample.x).abs() <= vx * super::SAMPLE_STEP_S);
    }

    #[test]
    fn flat_launch_collapses_to_single_point() {
        for angle in [0.0, 180.0] {
            let result = compute(angle, 20.0);
            assert_eq!(result.points.len(), 1, "angle={angle}");
            assert_eq!(result.points[0], result.landing_point());
        }
        assert_close(compute(0.0, 20.0).range, 0.0, 1e-9);
    }

    #[test]
    fn downward_launch_collapses_to_single_point() {
        let result = compute(-30.0, 20.0);
        assert_eq!(result.points.len(), 1);
        assert!(result.time_of_flight < 0.0);
    }

    #[test]
    fn non_positive_speed_collapses_to_single_point() {
        let zero = compute(45.0, 0.0);
        assert_eq!(zero.points, vec![Point::new(0.0, 0.0)]);
        assert_close(zero.range, 0.0, 1e-12);

        let negative = compute(45.0, -10.0);
        assert_eq!(negative.points.len(), 1);
        assert_eq!(negative.points[0], negative.landing_point());
    }

    #[test]
    fn non_finite_inputs_do_not_hang() {
        let result = compute(f64::NAN, 20.0);
        assert_eq!(result.points.len(), 1);
        assert!(result.range.is_nan());

        for (angle, speed) in [
            (45.0, f64::INFINITY),
            (45.0, f64::NEG_INFINITY),
            (f64::INFINITY, 20.0),
            (45.0, f64::NAN),
        ] {
            let result = compute(angle, speed);
            assert_eq!(result.points.len(), 1, "angle={angle} speed={speed}");
            assert_eq!(result.points[0].y, 0.0);
        }
    }

    #[test]
    fn range_is_symmetric_about_vertical() {
        for angle in [5.0, 20.0, 37.5, 60.0, 85.0] {
            let low = compute(angle, 18.0).range;
            let high = compute(180.0 - angle, 18.0).range;
            // The mirrored launch travels left, so compare magnitudes.
            assert_close(low.abs(), high.abs(), 1e-9);
        }
    }

    #[test]
    fn range_grows_with_speed_at_45_degrees() {
        let ranges: Vec<f64> = [1.0, 2.0, 5.0, 10.0, 25.0, 50.0]
            .iter()
            .map(|&speed| compute(45.0, speed).range)
            .collect();
        assert!(ranges.windows(2).all(|w| w[1] > w[0]));
        assert_close(ranges[3], 100.0 / EARTH_GRAVITY_MPS2, 1e-9);
    }
}
