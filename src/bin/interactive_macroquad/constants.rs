use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 420.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 120.0;
pub const BOTTOM_MARGIN: f32 = 110.0;

pub const TITLE_Y: f32 = 46.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;

pub const BACKGROUND: Color = Color::new(0.008, 0.024, 0.090, 1.0);
pub const GRID_COLOR: Color = Color::new(0.12, 0.16, 0.23, 1.0);
pub const AXIS_COLOR: Color = Color::new(0.58, 0.64, 0.72, 1.0);
pub const TEXT_COLOR: Color = Color::new(0.898, 0.906, 0.922, 1.0);
pub const PATH_COLOR: Color = Color::new(0.0, 1.0, 1.0, 1.0);
pub const MARKER_COLOR: Color = Color::new(1.0, 1.0, 0.0, 1.0);
pub const ACCENT_COLOR: Color = Color::new(0.486, 0.227, 0.929, 1.0);
pub const OVERLAY_DIM: Color = Color::new(0.0, 0.0, 0.0, 0.7);

pub const PATH_THICKNESS: f32 = 2.0;
pub const MARKER_RADIUS: f32 = 6.0;
pub const ANGLE_KEY_RATE_DEG: f32 = 30.0;
pub const SPEED_KEY_RATE_FRACTION: f32 = 0.4;
