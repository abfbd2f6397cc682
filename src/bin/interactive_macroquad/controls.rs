use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use projectile_motion::core::session::{ANGLE_MAX_DEG, ANGLE_MIN_DEG};

use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) toggle_unit: bool,
    pub(crate) replay: bool,
    pub(crate) open_help: bool,
    pub(crate) close_help: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            toggle_unit: self.toggle_unit || other.toggle_unit,
            replay: self.replay || other.replay,
            open_help: self.open_help || other.open_help,
            close_help: self.close_help || other.close_help,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        toggle_unit: is_key_pressed(KeyCode::U),
        replay: is_key_pressed(KeyCode::Space),
        open_help: is_key_pressed(KeyCode::H),
        close_help: is_key_pressed(KeyCode::Escape),
    }
}

/// Sliders write straight into the runtime's slider fields; the caller
/// compares them with the session afterwards.
pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let params = state.session.params();
    let speed_max = params.unit.slider_max() as f32;

    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(18.0, 120.0), vec2(360.0, 250.0))
        .label("Launch Controls")
        .ui(&mut *root_ui(), |ui| {
            ui.slider(
                hash!(),
                "Angle (deg)",
                ANGLE_MIN_DEG as f32..ANGLE_MAX_DEG as f32,
                &mut state.angle_slider,
            );
            ui.slider(
                hash!(),
                &format!("Velocity ({})", params.unit),
                0.0..speed_max,
                &mut state.speed_slider,
            );
            ui.separator();
            if ui.button(None, format!("Unit: {} (U)", params.unit).as_str()) {
                actions.toggle_unit = true;
            }
            if ui.button(None, "Replay (Space)") {
                actions.replay = true;
            }
            if ui.button(None, "Show Equations (H)") {
                actions.open_help = true;
            }
            ui.label(
                None,
                &format!("Velocity: {:.2} m/s", state.session.velocity_mps()),
            );
        });

    actions
}
