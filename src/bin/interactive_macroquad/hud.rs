use macroquad::prelude::*;

use projectile_motion::core::help::{EQUATIONS, HELP_TITLE};

use crate::constants::{ACCENT_COLOR, OVERLAY_DIM, TEXT_COLOR, TITLE_Y};
use crate::render::{PlotArea, draw_ui_text};
use crate::state::AppRuntime;

fn draw_button(rect: Rect, label: &str, font: Option<&Font>) -> bool {
    let mouse = mouse_position();
    let hovered = rect.contains(vec2(mouse.0, mouse.1));
    let fill = if hovered {
        Color::from_rgba(139, 92, 246, 255)
    } else {
        ACCENT_COLOR
    };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);

    let size = measure_text(label, font, 20, 1.0);
    draw_ui_text(
        label,
        rect.x + (rect.w - size.width) * 0.5,
        rect.y + (rect.h + size.height) * 0.5 - 3.0,
        20,
        WHITE,
        font,
    );

    hovered && is_mouse_button_pressed(MouseButton::Left)
}

pub(crate) fn draw_header(area: PlotArea, font: Option<&Font>) {
    draw_ui_text(
        "Projectile Motion",
        area.left,
        TITLE_Y,
        30,
        TEXT_COLOR,
        font,
    );
    draw_ui_text(
        "Sliders or arrow keys adjust angle/velocity | U unit | Space replay | H equations",
        area.left,
        TITLE_Y + 30.0,
        18,
        GRAY,
        font,
    );
}

pub(crate) fn draw_readout(state: &AppRuntime, area: PlotArea, screen_h: f32, font: Option<&Font>) {
    let Some(readout) = state.view.readout.as_ref() else {
        return;
    };
    draw_ui_text(
        &format!(
            "Range: {} m | Max Height: {} m | Time of Flight: {} s",
            readout.range, readout.max_height, readout.time_of_flight
        ),
        area.left,
        screen_h - 30.0,
        24,
        TEXT_COLOR,
        font,
    );
}

/// Bottom-right "Show Equations" button. Returns true when clicked.
pub(crate) fn draw_equations_button(screen_w: f32, screen_h: f32, font: Option<&Font>) -> bool {
    let rect = Rect::new(screen_w - 200.0, screen_h - 60.0, 180.0, 40.0);
    draw_button(rect, "Show Equations", font)
}

/// Modal listing the motion equations. Returns true when Close is clicked.
pub(crate) fn draw_help_overlay(screen_w: f32, screen_h: f32, font: Option<&Font>) -> bool {
    draw_rectangle(0.0, 0.0, screen_w, screen_h, OVERLAY_DIM);

    let line_count: usize = EQUATIONS.iter().map(|(_, lines)| lines.len() + 1).sum();
    let panel_w = 420.0;
    let panel_h = 110.0 + line_count as f32 * 26.0;
    let panel_x = (screen_w - panel_w) * 0.5;
    let panel_y = (screen_h - panel_h) * 0.5;
    draw_rectangle(
        panel_x,
        panel_y,
        panel_w,
        panel_h,
        Color::from_rgba(2, 6, 23, 255),
    );
    draw_rectangle_lines(panel_x, panel_y, panel_w, panel_h, 2.0, ACCENT_COLOR);

    let x = panel_x + 25.0;
    let mut y = panel_y + 40.0;
    draw_ui_text(HELP_TITLE, x, y, 24, TEXT_COLOR, font);
    y += 14.0;
    for (heading, lines) in EQUATIONS {
        y += 26.0;
        draw_ui_text(&format!("{heading}:"), x, y, 19, WHITE, font);
        for line in *lines {
            y += 26.0;
            draw_ui_text(line, x + 12.0, y, 19, TEXT_COLOR, font);
        }
    }

    let close = Rect::new(x, panel_y + panel_h - 50.0, 90.0, 34.0);
    draw_button(close, "Close", font)
}
