use std::path::Path;

use log::info;
use plotters::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::core::ballistics::{Point, TrajectoryResult};
use crate::core::playback::{PlaybackFrame, PlaybackSink};
use crate::core::window::{AxisBounds, padded_axis_bounds};

pub const PATH_SERIES_LABEL: &str = "Projectile Path";
pub const MARKER_SERIES_LABEL: &str = "Projectile";
pub const MARKER_RADIUS_PX: u32 = 6;
pub const EXPORT_SIZE_PX: (u32, u32) = (960, 540);

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to draw chart to '{path}': {message}")]
    Draw { path: String, message: String },
}

/// Scalars shown next to the chart, each with two decimals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Readout {
    pub range: String,
    pub max_height: String,
    pub time_of_flight: String,
}

impl Readout {
    pub fn from_result(result: &TrajectoryResult) -> Self {
        Self {
            range: format!("{:.2}", result.range),
            max_height: format!("{:.2}", result.max_height),
            time_of_flight: format!("{:.2}", result.time_of_flight),
        }
    }
}

/// Chart-side state: the two series plus the per-computation axis bounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartView {
    pub path: Vec<Point>,
    pub marker: Option<Point>,
    pub bounds: AxisBounds,
    pub readout: Option<Readout>,
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rescales the axes for a fresh computation and clears both series so
    /// playback can redraw from the launch point.
    pub fn apply(&mut self, result: &TrajectoryResult) {
        self.bounds = padded_axis_bounds(result.range, result.max_height);
        self.readout = Some(Readout::from_result(result));
        self.path.clear();
        self.marker = None;
    }
}

impl PlaybackSink for ChartView {
    fn present(&mut self, frame: PlaybackFrame<'_>) {
        self.path.clear();
        self.path.extend_from_slice(frame.path);
        self.marker = frame.marker;
    }
}

fn to_draw_error<E: std::fmt::Display>(path: &Path) -> impl Fn(E) -> ChartError + '_ {
    move |err| ChartError::Draw {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

/// Writes the full trajectory and the landing marker to an SVG file.
pub fn export_svg(result: &TrajectoryResult, path: &Path) -> Result<(), ChartError> {
    let bounds = padded_axis_bounds(result.range, result.max_height).drawable();
    let root = SVGBackend::new(path, EXPORT_SIZE_PX).into_drawing_area();
    root.fill(&WHITE).map_err(to_draw_error(path))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "Range {:.2} m | Max height {:.2} m | Time {:.2} s",
                result.range, result.max_height, result.time_of_flight
            ),
            ("sans-serif", 20),
        )
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(52)
        .build_cartesian_2d(0f64..bounds.x_max, 0f64..bounds.y_max)
        .map_err(to_draw_error(path))?;

    chart
        .configure_mesh()
        .x_desc("Distance")
        .y_desc("Height")
        .draw()
        .map_err(to_draw_error(path))?;

    chart
        .draw_series(LineSeries::new(
            result.points.iter().map(|p| (p.x, p.y)),
            CYAN.stroke_width(2),
        ))
        .map_err(to_draw_error(path))?
        .label(PATH_SERIES_LABEL)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CYAN));

    let landing = result.landing_point();
    chart
        .draw_series(std::iter::once(Circle::new(
            (landing.x, landing.y),
            MARKER_RADIUS_PX,
            YELLOW.filled(),
        )))
        .map_err(to_draw_error(path))?
        .label(MARKER_SERIES_LABEL)
        .legend(|(x, y)| Circle::new((x + 10, y), MARKER_RADIUS_PX, YELLOW.filled()));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .draw()
        .map_err(to_draw_error(path))?;

    root.present().map_err(to_draw_error(path))?;
    info!("Exported trajectory chart to {}", path.display());
    Ok(())
}
