use crate::diagnostics::log_error;
use crate::player::{PlayerState, PlayerStatus, TransportRequest};
use futures_util::future::LocalBoxFuture;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum MediaError {
    /// The environment refused to start audio (autoplay policy, aborted load, ...).
    PlaybackRejected(String),
    /// No media element is attached.
    Unavailable,
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlaybackRejected(reason) => write!(f, "playback rejected: {reason}"),
            Self::Unavailable => write!(f, "no media element attached"),
        }
    }
}

impl std::error::Error for MediaError {}

/// Transport surface of the playable audio object. Only the player controller drives it.
pub trait MediaElement {
    /// Resolves once audio actually starts, or with the reason it could not.
    fn play(&self) -> LocalBoxFuture<'static, Result<(), MediaError>>;
    fn pause(&self);
    fn set_current_time(&self, seconds: f64);
    fn set_volume(&self, level: f64);
}

/// Bring the media element in line with a transport request.
pub async fn apply_transport<M>(media: &M, request: TransportRequest) -> Result<(), MediaError>
where
    M: MediaElement + ?Sized,
{
    match request.status {
        PlayerStatus::Playing => media.play().await,
        PlayerStatus::Paused => {
            media.pause();
            Ok(())
        }
        PlayerStatus::Stopped => {
            media.pause();
            media.set_current_time(0.0);
            Ok(())
        }
    }
}

/// Fold the outcome of [`apply_transport`] back into state. Returns true when
/// the status was rolled back.
pub fn settle_transport(
    state: &mut PlayerState,
    request: TransportRequest,
    outcome: Result<(), MediaError>,
) -> bool {
    let Err(err) = outcome else {
        return false;
    };
    log_error("player", format!("{err}"));
    state.reject_start(request.epoch)
}

/// Clamp the seek in state and move the element to the same position.
pub fn apply_seek<M>(media: &M, state: &mut PlayerState, seconds: f64) -> f64
where
    M: MediaElement + ?Sized,
{
    let target = state.seek(seconds);
    media.set_current_time(target);
    target
}

/// One-way volume push; the element has no volume authority of its own.
pub fn push_volume<M>(media: &M, state: &PlayerState)
where
    M: MediaElement + ?Sized,
{
    media.set_volume(state.effective_volume());
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use futures_util::future::{ready, FutureExt};
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Play,
        Pause,
        Seek(f64),
        Volume(f64),
    }

    /// Records every call; `play` resolves with the configured outcome.
    #[derive(Default)]
    pub struct FakeMedia {
        pub calls: RefCell<Vec<Call>>,
        pub refuse_play: Option<String>,
    }

    impl FakeMedia {
        pub fn refusing(reason: &str) -> Self {
            Self {
                refuse_play: Some(reason.to_string()),
                ..Self::default()
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl MediaElement for FakeMedia {
        fn play(&self) -> LocalBoxFuture<'static, Result<(), MediaError>> {
            self.calls.borrow_mut().push(Call::Play);
            let outcome = match &self.refuse_play {
                Some(reason) => Err(MediaError::PlaybackRejected(reason.clone())),
                None => Ok(()),
            };
            ready(outcome).boxed_local()
        }

        fn pause(&self) {
            self.calls.borrow_mut().push(Call::Pause);
        }

        fn set_current_time(&self, seconds: f64) {
            self.calls.borrow_mut().push(Call::Seek(seconds));
        }

        fn set_volume(&self, level: f64) {
            self.calls.borrow_mut().push(Call::Volume(level));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::{Call, FakeMedia};
    use super::*;
    use crate::api::featured_track;

    fn drive(state: &mut PlayerState, media: &FakeMedia) -> bool {
        let request = state.transport_request();
        let outcome = pollster::block_on(apply_transport(media, request));
        settle_transport(state, request, outcome)
    }

    #[test]
    fn toggle_starts_the_element() {
        let mut state = PlayerState::new(Some(featured_track()), 0.7);
        let media = FakeMedia::default();
        state.toggle_play();
        assert!(!drive(&mut state, &media));
        assert_eq!(state.status, PlayerStatus::Playing);
        assert_eq!(media.calls(), vec![Call::Play]);
    }

    #[test]
    fn refused_start_rolls_back_to_paused() {
        let mut state = PlayerState::new(Some(featured_track()), 0.7);
        let media = FakeMedia::refusing("NotAllowedError");
        state.toggle_play();
        assert_eq!(state.status, PlayerStatus::Playing);
        assert!(drive(&mut state, &media));
        assert_eq!(state.status, PlayerStatus::Paused);
        assert_eq!(media.calls(), vec![Call::Play]);
    }

    #[test]
    fn refusal_after_a_newer_toggle_keeps_latest_status() {
        let mut state = PlayerState::new(Some(featured_track()), 0.7);
        let media = FakeMedia::refusing("AbortError");
        state.toggle_play();
        let stale = state.transport_request();
        state.toggle_play();
        state.toggle_play();
        let outcome = pollster::block_on(apply_transport(&media, stale));
        assert!(!settle_transport(&mut state, stale, outcome));
        assert_eq!(state.status, PlayerStatus::Playing);
    }

    #[test]
    fn pause_and_stop_do_not_start_audio() {
        let mut state = PlayerState::new(Some(featured_track()), 0.7);
        let media = FakeMedia::default();
        drive(&mut state, &media);
        state.stop();
        drive(&mut state, &media);
        assert_eq!(media.calls(), vec![Call::Pause, Call::Pause, Call::Seek(0.0)]);
    }

    #[test]
    fn second_stop_rewinds_after_a_seek() {
        let mut state = PlayerState::new(Some(featured_track()), 0.7);
        state.on_metadata(135.0);
        let media = FakeMedia::default();
        state.toggle_play();
        drive(&mut state, &media);
        state.stop();
        drive(&mut state, &media);
        apply_seek(&media, &mut state, 60.0);
        state.stop();
        drive(&mut state, &media);
        assert_eq!(state.current_time, 0.0);
        assert_eq!(
            media.calls(),
            vec![
                Call::Play,
                Call::Pause,
                Call::Seek(0.0),
                Call::Seek(60.0),
                Call::Pause,
                Call::Seek(0.0),
            ]
        );
    }

    #[test]
    fn seek_moves_the_element_to_the_clamped_position() {
        let mut state = PlayerState::new(Some(featured_track()), 0.7);
        state.on_metadata(135.0);
        let media = FakeMedia::default();
        assert_eq!(apply_seek(&media, &mut state, 42.5), 42.5);
        assert_eq!(apply_seek(&media, &mut state, 500.0), 135.0);
        assert_eq!(apply_seek(&media, &mut state, -3.0), 0.0);
        assert_eq!(state.current_time, 0.0);
        assert_eq!(
            media.calls(),
            vec![Call::Seek(42.5), Call::Seek(135.0), Call::Seek(0.0)]
        );
    }

    #[test]
    fn volume_push_respects_mute() {
        let mut state = PlayerState::new(None, 0.7);
        let media = FakeMedia::default();
        state.toggle_mute();
        push_volume(&media, &state);
        state.set_volume(0.5);
        push_volume(&media, &state);
        assert_eq!(media.calls(), vec![Call::Volume(0.0), Call::Volume(0.5)]);
    }

    #[test]
    fn media_errors_read_cleanly() {
        let err = MediaError::PlaybackRejected("NotAllowedError".to_string());
        assert_eq!(err.to_string(), "playback rejected: NotAllowedError");
        assert_eq!(MediaError::Unavailable.to_string(), "no media element attached");
    }
}
