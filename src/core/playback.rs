//! Frame-by-frame reveal of a sampled trajectory.
//!
//! The driver owns a single pending [`TickHandle`]. Every `start` cancels that
//! handle before requesting a new one, so at most one tick sequence is ever
//! alive and a superseded run can never present another frame.

use std::collections::VecDeque;

use log::{debug, trace, warn};

use crate::core::ballistics::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

impl TickHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Source of display-frame ticks, the role `requestAnimationFrame` plays in
/// a browser.
pub trait TickScheduler {
    fn request_tick(&mut self) -> TickHandle;
    fn cancel_tick(&mut self, handle: TickHandle);
}

/// Deterministic scheduler: requested ticks wait in FIFO order until the
/// owner pops them, one per display frame.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    queued: VecDeque<TickHandle>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_due(&mut self) -> Option<TickHandle> {
        self.queued.pop_front()
    }

    pub fn pending(&self) -> usize {
        self.queued.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queued.is_empty()
    }
}

impl TickScheduler for FrameQueue {
    fn request_tick(&mut self) -> TickHandle {
        let handle = TickHandle(self.next_id);
        self.next_id += 1;
        self.queued.push_back(handle);
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        self.queued.retain(|queued| *queued != handle);
    }
}

/// What the chart should show after one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackFrame<'a> {
    /// Path revealed so far, ending at the marker.
    pub path: &'a [Point],
    pub marker: Option<Point>,
}

pub trait PlaybackSink {
    fn present(&mut self, frame: PlaybackFrame<'_>);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackPhase {
    Idle,
    Running,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaybackState {
    pub points: Vec<Point>,
    pub cursor: usize,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Presented,
    Finished,
    Stale,
}

#[derive(Debug)]
pub struct PlaybackDriver<S> {
    scheduler: S,
    state: PlaybackState,
    pending: Option<TickHandle>,
}

impl<S: TickScheduler> PlaybackDriver<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: PlaybackState::default(),
            pending: None,
        }
    }

    pub fn start(&mut self, points: Vec<Point>) {
        self.cancel_pending();
        debug!("Starting playback of {} points", points.len());
        self.state = PlaybackState {
            points,
            cursor: 0,
            active: true,
        };
        self.pending = Some(self.scheduler.request_tick());
    }

    /// Stops the current run. Already presented frames stay on the sink.
    pub fn cancel(&mut self) {
        self.cancel_pending();
        if self.state.active {
            debug!("Playback cancelled at cursor {}", self.state.cursor);
        }
        self.state.active = false;
    }

    pub fn on_tick(&mut self, handle: TickHandle, sink: &mut impl PlaybackSink) -> TickOutcome {
        if self.pending != Some(handle) || !self.state.active {
            warn!("Ignoring stale playback tick {}", handle.id());
            return TickOutcome::Stale;
        }
        self.pending = None;

        let cursor = self.state.cursor;
        let Some(&marker) = self.state.points.get(cursor) else {
            debug!("Playback finished after {cursor} frames");
            self.state.active = false;
            return TickOutcome::Finished;
        };

        trace!("Presenting playback frame {cursor}");
        sink.present(PlaybackFrame {
            path: &self.state.points[..=cursor],
            marker: Some(marker),
        });
        self.state.cursor += 1;
        self.pending = Some(self.scheduler.request_tick());
        TickOutcome::Presented
    }

    pub fn phase(&self) -> PlaybackPhase {
        if self.state.active {
            PlaybackPhase::Running
        } else {
            PlaybackPhase::Idle
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn pending_tick(&self) -> Option<TickHandle> {
        self.pending
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_tick(handle);
        }
    }
}

impl PlaybackDriver<FrameQueue> {
    /// Runs at most one due tick, as a display loop does once per frame.
    pub fn advance_frame(&mut self, sink: &mut impl PlaybackSink) -> Option<TickOutcome> {
        let handle = self.scheduler.take_due()?;
        Some(self.on_tick(handle, sink))
    }
}
