use macroquad::prelude::*;

use projectile_motion::core::ballistics::Point;
use projectile_motion::core::window::AxisBounds;

use crate::constants::{
    AXIS_COLOR, GRID_COLOR, MARKER_COLOR, MARKER_RADIUS, PATH_COLOR, PATH_THICKNESS, TEXT_COLOR,
    X_GRID_LINES, Y_GRID_LINES,
};

/// Screen-space rectangle the chart is drawn into.
#[derive(Clone, Copy)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PlotArea {
    pub(crate) fn width(self) -> f32 {
        (self.right - self.left).max(1.0)
    }

    pub(crate) fn height(self) -> f32 {
        (self.bottom - self.top).max(1.0)
    }
}

fn format_axis_value(value: f64, axis_max: f64) -> String {
    if axis_max >= 1000.0 {
        format!("{value:.0}")
    } else if axis_max >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn world_to_screen(point: Point, bounds: AxisBounds, area: PlotArea) -> Vec2 {
    let x = area.left + (point.x / bounds.x_max) as f32 * area.width();
    let y = area.bottom - (point.y / bounds.y_max) as f32 * area.height();
    vec2(x, y)
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(area: PlotArea) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * area.width();
        draw_line(x, area.top, x, area.bottom, 1.0, GRID_COLOR);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * area.height();
        draw_line(area.left, y, area.right, y, 1.0, GRID_COLOR);
    }
    draw_line(area.left, area.bottom, area.right, area.bottom, 2.0, AXIS_COLOR);
    draw_line(area.left, area.top, area.left, area.bottom, 2.0, AXIS_COLOR);
}

pub(crate) fn draw_axis_tick_labels(area: PlotArea, bounds: AxisBounds, font: Option<&Font>) {
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * area.width();
        let label = format_axis_value(f64::from(t) * bounds.x_max, bounds.x_max);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            area.bottom + 22.0,
            tick_font_size,
            AXIS_COLOR,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * area.height();
        let label = format_axis_value(f64::from(t) * bounds.y_max, bounds.y_max);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (area.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            AXIS_COLOR,
            font,
        );
    }

    draw_ui_text(
        "Distance",
        area.right - 80.0,
        area.bottom + 48.0,
        18,
        TEXT_COLOR,
        font,
    );
    draw_ui_text("Height", area.left + 10.0, area.top - 8.0, 18, TEXT_COLOR, font);
}

pub(crate) fn draw_path(points: &[Point], bounds: AxisBounds, area: PlotArea) {
    for pair in points.windows(2) {
        let a = world_to_screen(pair[0], bounds, area);
        let b = world_to_screen(pair[1], bounds, area);
        draw_line(a.x, a.y, b.x, b.y, PATH_THICKNESS, PATH_COLOR);
    }
}

pub(crate) fn draw_marker(marker: Option<Point>, bounds: AxisBounds, area: PlotArea) {
    if let Some(point) = marker {
        let p = world_to_screen(point, bounds, area);
        draw_circle(p.x, p.y, MARKER_RADIUS, MARKER_COLOR);
    }
}
