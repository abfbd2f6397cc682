use approx::assert_abs_diff_eq;

use projectile_motion::core::chart::ChartView;
use projectile_motion::core::playback::{FrameQueue, PlaybackDriver, PlaybackPhase, TickOutcome};
use projectile_motion::core::session::Session;
use projectile_motion::core::units::SpeedUnit;

fn play_out(driver: &mut PlaybackDriver<FrameQueue>, view: &mut ChartView) -> usize {
    let mut presented = 0;
    while let Some(outcome) = driver.advance_frame(view) {
        if outcome == TickOutcome::Presented {
            presented += 1;
        }
    }
    presented
}

#[test]
fn full_playback_ends_on_landing_point() {
    let session = Session::default();
    let result = session.recompute();
    let mut view = ChartView::new();
    let mut driver = PlaybackDriver::new(FrameQueue::new());

    view.apply(&result);
    driver.start(result.points.clone());
    let presented = play_out(&mut driver, &mut view);

    assert_eq!(presented, result.points.len());
    assert_eq!(view.path, result.points);
    assert_eq!(view.marker, Some(result.landing_point()));
    assert_eq!(driver.phase(), PlaybackPhase::Idle);
    assert!(driver.scheduler().is_idle());
}

#[test]
fn slider_drag_restarts_playback_each_time() {
    let mut session = Session::default();
    let mut view = ChartView::new();
    let mut driver = PlaybackDriver::new(FrameQueue::new());

    // Simulate a drag: several recomputes, each a frame apart.
    for angle in [30.0, 31.0, 32.0, 33.0] {
        let result = session.set_angle(angle);
        view.apply(&result);
        driver.start(result.points.clone());
        assert_eq!(driver.scheduler().pending(), 1);
        driver.advance_frame(&mut view);
        assert_eq!(view.path.len(), 1);
    }

    let final_result = session.recompute();
    play_out(&mut driver, &mut view);
    assert_eq!(view.path, final_result.points);
}

#[test]
fn unit_toggle_then_playback_uses_same_flight() {
    let mut session = Session::default();
    let before = session.recompute();
    let after = session.set_unit(SpeedUnit::KilometersPerHour);

    assert_eq!(session.params().display_speed, 72.0);
    assert_abs_diff_eq!(after.range, before.range, epsilon = 1e-12);

    let mut view = ChartView::new();
    view.apply(&after);
    let readout = view.readout.clone().expect("readout after apply");
    assert_eq!(readout.range, "40.82");
    assert_eq!(readout.max_height, "10.20");
}

#[test]
fn flat_launch_plays_single_frame() {
    let mut session = Session::default();
    let result = session.set_angle(0.0);
    let mut view = ChartView::new();
    let mut driver = PlaybackDriver::new(FrameQueue::new());

    view.apply(&result);
    driver.start(result.points.clone());

    assert_eq!(play_out(&mut driver, &mut view), 1);
    assert_eq!(view.bounds.drawable().x_max, 1.0);
}
