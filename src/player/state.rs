use crate::api::Track;

/// Transport status of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerStatus {
    Playing,
    #[default]
    Paused,
    Stopped,
}

impl PlayerStatus {
    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }
}

/// What the media element should be doing, stamped with the epoch it was requested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportRequest {
    pub status: PlayerStatus,
    pub epoch: u64,
}

/// The one playback record of the app. Only the player controller writes it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub current_track: Option<Track>,
    pub status: PlayerStatus,
    pub volume: f64,
    pub is_muted: bool,
    pub current_time: f64,
    /// Seconds; anything non-finite or zero means metadata has not arrived yet.
    pub duration: f64,
    transport_epoch: u64,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(None, 0.7)
    }
}

impl PlayerState {
    pub fn new(current_track: Option<Track>, volume: f64) -> Self {
        Self {
            current_track,
            status: PlayerStatus::Paused,
            volume: clamp_unit(volume),
            is_muted: false,
            current_time: 0.0,
            duration: 0.0,
            transport_epoch: 0,
        }
    }

    pub fn transport_epoch(&self) -> u64 {
        self.transport_epoch
    }

    pub fn transport_request(&self) -> TransportRequest {
        TransportRequest {
            status: self.status,
            epoch: self.transport_epoch,
        }
    }

    /// Level pushed to the media element.
    pub fn effective_volume(&self) -> f64 {
        if self.is_muted {
            0.0
        } else {
            self.volume
        }
    }

    pub fn known_duration(&self) -> Option<f64> {
        (self.duration.is_finite() && self.duration > 0.0).then_some(self.duration)
    }

    /// Upper bound of the seek slider.
    pub fn seek_max(&self) -> f64 {
        self.known_duration().unwrap_or(100.0)
    }

    /// Played share of the track in `[0, 1]` for the progress fill.
    pub fn progress(&self) -> f64 {
        let duration = self.known_duration().unwrap_or(1.0);
        (self.current_time / duration).clamp(0.0, 1.0)
    }

    fn set_status(&mut self, status: PlayerStatus) {
        if self.status != status {
            self.status = status;
            self.transport_epoch += 1;
        }
    }

    pub fn toggle_play(&mut self) {
        let next = match self.status {
            PlayerStatus::Playing => PlayerStatus::Paused,
            PlayerStatus::Paused | PlayerStatus::Stopped => PlayerStatus::Playing,
        };
        self.set_status(next);
    }

    /// Always issues a fresh transport request, so a repeated stop still rewinds the element.
    pub fn stop(&mut self) {
        self.status = PlayerStatus::Stopped;
        self.transport_epoch += 1;
        self.current_time = 0.0;
    }

    /// Clamp `seconds` into the playable range, mirror it into `current_time`
    /// and return the position the media element should jump to.
    pub fn seek(&mut self, seconds: f64) -> f64 {
        let upper = self.known_duration().unwrap_or(f64::INFINITY);
        let target = if seconds.is_finite() {
            seconds.clamp(0.0, upper)
        } else {
            0.0
        };
        self.current_time = target;
        target
    }

    /// Dragging the volume always makes the output audible again.
    pub fn set_volume(&mut self, level: f64) {
        self.volume = clamp_unit(level);
        self.is_muted = false;
    }

    pub fn toggle_mute(&mut self) {
        self.is_muted = !self.is_muted;
    }

    pub fn on_time_update(&mut self, seconds: f64) {
        if seconds.is_finite() {
            self.current_time = seconds.max(0.0);
        }
    }

    pub fn on_metadata(&mut self, duration: f64) {
        self.duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            0.0
        };
    }

    pub fn on_ended(&mut self) {
        self.set_status(PlayerStatus::Paused);
        self.current_time = 0.0;
    }

    /// Roll back a start request the environment refused. Rejections that belong
    /// to an older epoch are ignored: the latest toggle wins.
    pub fn reject_start(&mut self, epoch: u64) -> bool {
        if epoch != self.transport_epoch || self.status != PlayerStatus::Playing {
            return false;
        }
        self.set_status(PlayerStatus::Paused);
        true
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
