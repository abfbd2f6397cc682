use log::debug;

use crate::core::ballistics::{TrajectoryResult, compute};
use crate::core::units::SpeedUnit;

pub const DEFAULT_ANGLE_DEG: f64 = 45.0;
pub const DEFAULT_SPEED_MPS: f64 = 20.0;
pub const ANGLE_MIN_DEG: f64 = 0.0;
pub const ANGLE_MAX_DEG: f64 = 90.0;

/// Converts the displayed speed to m/s and samples the launch.
pub fn on_parameter_change(angle_deg: f64, speed: f64, unit: SpeedUnit) -> TrajectoryResult {
    compute(angle_deg, unit.to_mps(speed))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchParameters {
    pub angle_deg: f64,
    /// Speed as the user sees it, in `unit`.
    pub display_speed: f64,
    pub unit: SpeedUnit,
}

impl Default for LaunchParameters {
    fn default() -> Self {
        Self {
            angle_deg: DEFAULT_ANGLE_DEG,
            display_speed: DEFAULT_SPEED_MPS,
            unit: SpeedUnit::MetersPerSecond,
        }
    }
}

/// Current launch inputs. The physical velocity is kept in m/s so toggling
/// the display unit never changes the flight.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    params: LaunchParameters,
    velocity_mps: f64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(LaunchParameters::default())
    }
}

impl Session {
    pub fn new(params: LaunchParameters) -> Self {
        Self {
            velocity_mps: params.unit.to_mps(params.display_speed),
            params,
        }
    }

    pub fn params(&self) -> LaunchParameters {
        self.params
    }

    pub fn velocity_mps(&self) -> f64 {
        self.velocity_mps
    }

    pub fn set_angle(&mut self, angle_deg: f64) -> TrajectoryResult {
        self.params.angle_deg = angle_deg;
        self.recompute()
    }

    pub fn set_display_speed(&mut self, display_speed: f64) -> TrajectoryResult {
        self.params.display_speed = display_speed;
        self.velocity_mps = self.params.unit.to_mps(display_speed);
        self.recompute()
    }

    /// Switches the display unit, re-expressing the stored velocity in it
    /// rounded to one decimal.
    pub fn set_unit(&mut self, unit: SpeedUnit) -> TrajectoryResult {
        if unit != self.params.unit {
            self.params.unit = unit;
            self.params.display_speed = round_to_tenth(unit.from_mps(self.velocity_mps));
            debug!(
                "Speed unit changed to {unit}, showing {} {unit}",
                self.params.display_speed
            );
        }
        self.recompute()
    }

    pub fn recompute(&self) -> TrajectoryResult {
        compute(self.params.angle_deg, self.velocity_mps)
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
