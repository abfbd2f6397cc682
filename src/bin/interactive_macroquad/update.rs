use log::debug;
use macroquad::prelude::*;

use projectile_motion::core::session::{ANGLE_MAX_DEG, ANGLE_MIN_DEG};

use crate::constants::{ANGLE_KEY_RATE_DEG, SPEED_KEY_RATE_FRACTION};
use crate::controls::FrameActions;
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.open_help {
        state.show_help = true;
    }
    if actions.close_help {
        state.show_help = false;
    }

    if actions.toggle_unit {
        let unit = state.session.params().unit.toggled();
        let result = state.session.set_unit(unit);
        state.sync_sliders();
        state.show_result(result);
    }

    if actions.replay {
        let result = state.session.recompute();
        state.show_result(result);
    }
}

pub(crate) fn apply_keyboard_adjustments(state: &mut AppRuntime, frame_dt: f32) {
    if is_mouse_button_down(MouseButton::Left) {
        return;
    }
    let speed_rate = state.session.params().unit.slider_max() as f32 * SPEED_KEY_RATE_FRACTION;
    if is_key_down(KeyCode::Right) {
        state.angle_slider += ANGLE_KEY_RATE_DEG * frame_dt;
    }
    if is_key_down(KeyCode::Left) {
        state.angle_slider -= ANGLE_KEY_RATE_DEG * frame_dt;
    }
    if is_key_down(KeyCode::Up) {
        state.speed_slider += speed_rate * frame_dt;
    }
    if is_key_down(KeyCode::Down) {
        state.speed_slider -= speed_rate * frame_dt;
    }
}

/// Feeds moved sliders into the session. Every change recomputes and
/// restarts playback, as dragging a slider does.
pub(crate) fn apply_slider_changes(state: &mut AppRuntime) {
    let params = state.session.params();
    let speed_max = params.unit.slider_max() as f32;
    state.angle_slider = state
        .angle_slider
        .clamp(ANGLE_MIN_DEG as f32, ANGLE_MAX_DEG as f32);
    state.speed_slider = state.speed_slider.clamp(0.0, speed_max);

    let mut result = None;
    if state.angle_slider != params.angle_deg as f32 {
        result = Some(state.session.set_angle(f64::from(state.angle_slider)));
    }
    if state.speed_slider != params.display_speed as f32 {
        result = Some(
            state
                .session
                .set_display_speed(f64::from(state.speed_slider)),
        );
    }

    if let Some(result) = result {
        debug!(
            "Launch parameters changed: {:.1} deg, {:.1} {}",
            state.angle_slider, state.speed_slider, params.unit
        );
        state.show_result(result);
    }
}
