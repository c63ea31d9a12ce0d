//! Playback transport state for the single active briefing.
//!
//! STATE MACHINE
//! =============
//! `Unbound → Loading → Ready ⇄ Playing ⇄ Paused → Ended`, with seeking as a
//! momentary action from Ready/Playing/Paused and `Failed` as the terminal
//! phase for a binding whose media failed to load. The transport holds no
//! audio data: the `AudioPlayer` component mirrors this state onto the bound
//! `<audio>` element (fire-and-forget commands) and feeds element events
//! back in. Exactly one `PlayerState` exists process-wide.

#[cfg(test)]
#[path = "player_test.rs"]
mod player_test;

/// Playback rate steps, cycled in order by the rate control.
pub const RATE_STEPS: [f64; 6] = [0.75, 1.0, 1.25, 1.5, 1.75, 2.0];

/// Volume restored on unmute. The level held before muting is not retained,
/// so unmuting always returns to full volume.
pub const UNMUTE_VOLUME: f64 = 1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackPhase {
    #[default]
    Unbound,
    Loading,
    Ready,
    Playing,
    Paused,
    Ended,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerState {
    pub briefing_id: Option<String>,
    pub phase: PlaybackPhase,
    /// Seconds from the start of the track.
    pub position: f64,
    /// Unknown until the media element reports metadata.
    pub duration: Option<f64>,
    pub rate: f64,
    pub volume: f64,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            briefing_id: None,
            phase: PlaybackPhase::Unbound,
            position: 0.0,
            duration: None,
            rate: 1.0,
            volume: 1.0,
        }
    }
}

impl PlayerState {
    /// Bind the transport to a briefing. Resets position and duration;
    /// rate and volume are user preferences and persist across tracks.
    pub fn bind(&mut self, briefing_id: &str) {
        self.briefing_id = Some(briefing_id.to_owned());
        self.phase = PlaybackPhase::Loading;
        self.position = 0.0;
        self.duration = None;
    }

    /// Bind only when the transport is not already on this briefing. A
    /// re-created adapter for the same track must not restart playback; a
    /// `Failed` binding is always rebound so reopening the briefing retries
    /// the load.
    pub fn ensure_bound(&mut self, briefing_id: &str) {
        if self.briefing_id.as_deref() == Some(briefing_id)
            && self.phase != PlaybackPhase::Failed
        {
            return;
        }
        self.bind(briefing_id);
    }

    /// Media element reported metadata; the track duration is now known.
    pub fn metadata_loaded(&mut self, duration: f64) {
        self.duration = Some(duration);
        if self.phase == PlaybackPhase::Loading {
            self.phase = PlaybackPhase::Ready;
        }
    }

    /// Start or resume playback. No-op while already playing or in a phase
    /// with nothing to play. Starting from `Ended` replays the binding.
    pub fn play(&mut self) {
        if matches!(
            self.phase,
            PlaybackPhase::Ready | PlaybackPhase::Paused | PlaybackPhase::Ended
        ) {
            self.phase = PlaybackPhase::Playing;
        }
    }

    pub fn pause(&mut self) {
        if self.phase == PlaybackPhase::Playing {
            self.phase = PlaybackPhase::Paused;
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == PlaybackPhase::Playing
    }

    pub fn toggle_play(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Natural completion reported by the media element. Advancing to the
    /// next briefing is the caller's policy, not the transport's.
    pub fn ended(&mut self) {
        if self.phase == PlaybackPhase::Playing {
            self.phase = PlaybackPhase::Ended;
            if let Some(duration) = self.duration {
                self.position = duration;
            }
        }
    }

    /// Position callback from the media element (`timeupdate`).
    pub fn progress(&mut self, position: f64) {
        if matches!(
            self.phase,
            PlaybackPhase::Ready | PlaybackPhase::Playing | PlaybackPhase::Paused
        ) {
            self.position = position.max(0.0);
        }
    }

    /// Seek to `target` seconds. Permitted from Ready/Playing/Paused only;
    /// clamps to `[0, duration]` when the duration is known and passes the
    /// target through unclamped otherwise. Returns the applied position for
    /// the adapter to push to the media element, or `None` when seeking is
    /// not permitted in the current phase.
    pub fn seek(&mut self, target: f64) -> Option<f64> {
        if !matches!(
            self.phase,
            PlaybackPhase::Ready | PlaybackPhase::Playing | PlaybackPhase::Paused
        ) {
            return None;
        }
        let applied = match self.duration {
            Some(duration) => target.clamp(0.0, duration),
            None => target,
        };
        self.position = applied;
        Some(applied)
    }

    /// Advance to the next rate step; a closed cycle over [`RATE_STEPS`].
    /// A rate outside the set restarts the cycle at the first step.
    pub fn cycle_rate(&mut self) -> f64 {
        let index = RATE_STEPS
            .iter()
            .position(|step| (*step - self.rate).abs() < f64::EPSILON);
        self.rate = match index {
            Some(i) => RATE_STEPS[(i + 1) % RATE_STEPS.len()],
            None => RATE_STEPS[0],
        };
        self.rate
    }

    /// Clamped to `[0, 1]`; allowed in any phase.
    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn is_muted(&self) -> bool {
        self.volume == 0.0
    }

    /// Mute/unmute toggle. Unmuting restores [`UNMUTE_VOLUME`], never a
    /// previously-set level.
    pub fn toggle_mute(&mut self) {
        self.volume = if self.is_muted() { UNMUTE_VOLUME } else { 0.0 };
    }

    /// Media load/playback error: terminal for this binding, no automatic
    /// retry. Recovery is an explicit re-bind by the caller.
    pub fn load_failed(&mut self) {
        self.phase = PlaybackPhase::Failed;
    }
}
