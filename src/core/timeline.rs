use super::constants::*;
use smallvec::SmallVec;
use std::f32::consts::FRAC_PI_2;

/// Easing curves over normalised time `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Quadratic ease-in-out.
    Power1InOut,
    SineIn,
    SineOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
            Ease::SineIn => 1.0 - (t * FRAC_PI_2).cos(),
            Ease::SineOut => (t * FRAC_PI_2).sin(),
        }
    }
}

/// Parameters animated by the ripple timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RippleParam {
    Progress,
    Mix,
}

/// One tween: `param` goes `from -> to` over `[start, start + duration]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub start: f32,
    pub duration: f32,
    pub ease: Ease,
    pub param: RippleParam,
    pub from: f32,
    pub to: f32,
}

impl Track {
    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    pub fn sample(&self, t: f32) -> f32 {
        let u = if self.duration <= 0.0 {
            1.0
        } else {
            (t - self.start) / self.duration
        };
        self.from + (self.to - self.from) * self.ease.apply(u)
    }
}

/// Ordered list of tracks sharing one clock.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    tracks: SmallVec<[Track; 4]>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a track, keeping the list sorted by start offset.
    pub fn push(&mut self, track: Track) -> &mut Self {
        let at = self
            .tracks
            .iter()
            .position(|t| t.start > track.start)
            .unwrap_or(self.tracks.len());
        self.tracks.insert(at, track);
        self
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Total length: end of the latest-finishing track.
    pub fn duration(&self) -> f32 {
        self.tracks.iter().map(Track::end).fold(0.0, f32::max)
    }

    /// Value of `param` at local time `t`.
    ///
    /// The most recently started track wins and holds its end value once
    /// done. Before any track of `param` starts, its first `from` applies.
    pub fn value(&self, param: RippleParam, t: f32) -> Option<f32> {
        let mut value = None;
        for track in self.tracks.iter().filter(|tr| tr.param == param) {
            if t >= track.start {
                value = Some(track.sample(t));
            } else if value.is_none() {
                value = Some(track.from);
            }
        }
        value
    }
}

/// Uniform values read by the particle vertex stage.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RippleState {
    pub progress: f32,
    pub mix: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RipplePhase {
    /// Waiting for the first cycle.
    Idle,
    Ramping,
    Cooldown,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleSnapshot {
    pub phase: RipplePhase,
    /// Zero-based cycle index; zero while idle.
    pub cycle: u32,
    /// Seconds since the current phase began.
    pub phase_time: f32,
    pub state: RippleState,
}

/// Timings of the repeating ripple: an idle lead-in, then forever a ramp
/// followed by a cooldown.
#[derive(Clone, Debug)]
pub struct RippleSchedule {
    pub initial_delay: f32,
    pub cooldown: f32,
    ramp: Timeline,
}

impl Default for RippleSchedule {
    fn default() -> Self {
        Self::new(
            RIPPLE_INITIAL_DELAY_SEC,
            RIPPLE_RAMP_SEC,
            RIPPLE_MIX_IN_SEC,
            RIPPLE_MIX_OUT_SEC,
            RIPPLE_COOLDOWN_SEC,
        )
    }
}

impl RippleSchedule {
    /// Build the ramp timeline: progress over the whole ramp, mix fading in
    /// at the start and out over the last `mix_out` seconds.
    pub fn new(initial_delay: f32, ramp: f32, mix_in: f32, mix_out: f32, cooldown: f32) -> Self {
        let mut timeline = Timeline::new();
        timeline
            .push(Track {
                start: 0.0,
                duration: ramp,
                ease: Ease::Power1InOut,
                param: RippleParam::Progress,
                from: 0.0,
                to: 1.0,
            })
            .push(Track {
                start: 0.0,
                duration: mix_in.min(ramp),
                ease: Ease::SineIn,
                param: RippleParam::Mix,
                from: 0.0,
                to: 1.0,
            })
            .push(Track {
                start: (ramp - mix_out).max(0.0),
                duration: mix_out.min(ramp),
                ease: Ease::SineOut,
                param: RippleParam::Mix,
                from: 1.0,
                to: 0.0,
            });
        Self {
            initial_delay: initial_delay.max(0.0),
            cooldown: cooldown.max(0.0),
            ramp: timeline,
        }
    }

    pub fn ramp(&self) -> &Timeline {
        &self.ramp
    }

    #[inline]
    pub fn ramp_duration(&self) -> f32 {
        self.ramp.duration()
    }

    #[inline]
    pub fn cycle_duration(&self) -> f32 {
        self.ramp_duration() + self.cooldown
    }

    /// Pure `elapsed -> state` mapping; `elapsed` counts from sequencer start.
    pub fn state_at(&self, elapsed: f32) -> RippleSnapshot {
        let elapsed = elapsed.max(0.0);
        if elapsed < self.initial_delay {
            return RippleSnapshot {
                phase: RipplePhase::Idle,
                cycle: 0,
                phase_time: elapsed,
                state: RippleState::default(),
            };
        }

        let since_start = elapsed - self.initial_delay;
        let cycle_len = self.cycle_duration();
        let (cycle, local) = if cycle_len > 0.0 {
            let cycle = (since_start / cycle_len).floor();
            (cycle as u32, since_start - cycle * cycle_len)
        } else {
            (0, 0.0)
        };

        let ramp_len = self.ramp_duration();
        if local < ramp_len {
            let state = RippleState {
                progress: self.ramp.value(RippleParam::Progress, local).unwrap_or(0.0),
                mix: self.ramp.value(RippleParam::Mix, local).unwrap_or(0.0),
            };
            RippleSnapshot {
                phase: RipplePhase::Ramping,
                cycle,
                phase_time: local,
                state,
            }
        } else {
            let state = RippleState {
                progress: self.ramp.value(RippleParam::Progress, ramp_len).unwrap_or(1.0),
                mix: self.ramp.value(RippleParam::Mix, ramp_len).unwrap_or(0.0),
            };
            RippleSnapshot {
                phase: RipplePhase::Cooldown,
                cycle,
                phase_time: local - ramp_len,
                state,
            }
        }
    }
}

/// Drives a [`RippleSchedule`] from the frame clock.
///
/// The sequencer has no timers of its own; it only moves when `advance` is
/// called from the frame callback. Once cancelled it reports the resting
/// state forever.
#[derive(Clone, Debug)]
pub struct RippleSequencer {
    schedule: RippleSchedule,
    origin: Option<f32>,
    last: RippleSnapshot,
    cancelled: bool,
}

impl RippleSequencer {
    pub fn new(schedule: RippleSchedule) -> Self {
        Self {
            schedule,
            origin: None,
            last: RippleSnapshot {
                phase: RipplePhase::Idle,
                cycle: 0,
                phase_time: 0.0,
                state: RippleState::default(),
            },
            cancelled: false,
        }
    }

    pub fn schedule(&self) -> &RippleSchedule {
        &self.schedule
    }

    /// Advance to clock time `now` (seconds, monotonic). The first call
    /// anchors the schedule.
    pub fn advance(&mut self, now: f32) -> RippleState {
        if self.cancelled {
            return RippleState::default();
        }
        let origin = *self.origin.get_or_insert(now);
        let snapshot = self.schedule.state_at(now - origin);
        if snapshot.cycle != self.last.cycle || snapshot.phase != self.last.phase {
            log::debug!(
                "[ripple] cycle {} -> {:?}",
                snapshot.cycle,
                snapshot.phase
            );
        }
        self.last = snapshot;
        snapshot.state
    }

    pub fn snapshot(&self) -> RippleSnapshot {
        self.last
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.last.state = RippleState::default();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
