use projectile_motion::core::ballistics::TrajectoryResult;
use projectile_motion::core::chart::ChartView;
use projectile_motion::core::playback::{FrameQueue, PlaybackDriver};
use projectile_motion::core::session::Session;

pub(crate) struct AppRuntime {
    pub(crate) session: Session,
    pub(crate) view: ChartView,
    pub(crate) driver: PlaybackDriver<FrameQueue>,
    pub(crate) angle_slider: f32,
    pub(crate) speed_slider: f32,
    pub(crate) show_help: bool,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        let session = Session::default();
        let params = session.params();
        let result = session.recompute();
        let mut state = Self {
            session,
            view: ChartView::new(),
            driver: PlaybackDriver::new(FrameQueue::new()),
            angle_slider: params.angle_deg as f32,
            speed_slider: params.display_speed as f32,
            show_help: false,
        };
        state.show_result(result);
        state
    }

    /// Rescales the chart for `result` and restarts playback from its first
    /// point, superseding whatever was animating.
    pub(crate) fn show_result(&mut self, result: TrajectoryResult) {
        self.view.apply(&result);
        self.driver.start(result.points);
    }

    /// Pulls slider positions back from the session after it normalised them.
    pub(crate) fn sync_sliders(&mut self) {
        let params = self.session.params();
        self.angle_slider = params.angle_deg as f32;
        self.speed_slider = params.display_speed as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::AppRuntime;
    use projectile_motion::core::playback::PlaybackPhase;

    #[test]
    fn new_runtime_plays_the_default_flight() {
        let mut state = AppRuntime::new();
        let expected = state.session.recompute();
        assert_eq!(state.driver.phase(), PlaybackPhase::Running);
        assert_eq!(state.driver.scheduler().pending(), 1);

        while state.driver.advance_frame(&mut state.view).is_some() {}
        assert_eq!(state.view.path, expected.points);
    }

    #[test]
    fn show_result_hands_the_points_to_the_driver() {
        let mut state = AppRuntime::new();
        let result = state.session.set_angle(30.0);
        let expected = result.points.clone();
        state.show_result(result);

        while state.driver.advance_frame(&mut state.view).is_some() {}
        assert_eq!(state.view.path, expected);
        assert_eq!(state.driver.scheduler().pending(), 0);
    }
}
