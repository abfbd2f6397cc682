use log::warn;
use macroquad::prelude::*;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN,
    MSAA_SAMPLES, RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{FrameActions, draw_control_panel, hotkey_actions};
use crate::hud::{draw_equations_button, draw_header, draw_help_overlay, draw_readout};
use crate::render::{PlotArea, draw_axis_tick_labels, draw_grid, draw_marker, draw_path};
use crate::state::AppRuntime;
use crate::update::{apply_actions, apply_keyboard_adjustments, apply_slider_changes};

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Motion".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        window_resizable: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new();

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();
        let area = PlotArea {
            left: LEFT_MARGIN,
            right: screen_w - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_h - BOTTOM_MARGIN,
        };

        clear_background(BACKGROUND);

        let mut actions = hotkey_actions();
        if !state.show_help {
            actions = actions.merge(draw_control_panel(&mut state));
            apply_keyboard_adjustments(&mut state, frame_dt);
            apply_slider_changes(&mut state);
        }
        apply_actions(&mut state, actions);

        // One tick per display frame.
        state.driver.advance_frame(&mut state.view);

        let bounds = state.view.bounds.drawable();
        draw_grid(area);
        draw_axis_tick_labels(area, bounds, ui_font.as_ref());
        draw_path(&state.view.path, bounds, area);
        draw_marker(state.view.marker, bounds, area);
        draw_header(area, ui_font.as_ref());
        draw_readout(&state, area, screen_h, ui_font.as_ref());

        if state.show_help {
            if draw_help_overlay(screen_w, screen_h, ui_font.as_ref()) {
                apply_actions(
                    &mut state,
                    FrameActions {
                        close_help: true,
                        ..Default::default()
                    },
                );
            }
        } else if draw_equations_button(screen_w, screen_h, ui_font.as_ref()) {
            apply_actions(
                &mut state,
                FrameActions {
                    open_help: true,
                    ..Default::default()
                },
            );
        }

        next_frame().await;
    }
}
