use crate::api::Track;
use crate::components::active_media;
use crate::player::{
    apply_seek, push_volume, settle_transport, MediaElement, MediaError, PlayerState,
    TransportRequest,
};
use dioxus::prelude::*;

/// Handle over the shared `PlayerState` signal; the only code path that writes it.
#[derive(Clone, Copy, PartialEq)]
pub struct PlayerController {
    state: Signal<PlayerState>,
}

impl PlayerController {
    pub fn new(state: Signal<PlayerState>) -> Self {
        Self { state }
    }

    pub fn current(&self) -> PlayerState {
        (self.state)()
    }

    pub fn track(&self) -> Option<Track> {
        self.state.read().current_track.clone()
    }

    pub fn is_playing(&self) -> bool {
        self.state.read().status.is_playing()
    }

    pub fn transport_request(&self) -> TransportRequest {
        self.state.read().transport_request()
    }

    pub fn effective_volume(&self) -> f64 {
        self.state.read().effective_volume()
    }

    pub fn toggle_play(&mut self) {
        self.state.with_mut(|state| state.toggle_play());
    }

    pub fn stop(&mut self) {
        self.state.with_mut(|state| state.stop());
    }

    /// Jump the element and mirror the position right away instead of waiting for `timeupdate`.
    pub fn seek(&mut self, seconds: f64) {
        let media = active_media();
        self.state.with_mut(|state| match media.as_ref() {
            Some(media) => apply_seek(media, state, seconds),
            None => state.seek(seconds),
        });
    }

    pub fn set_volume(&mut self, level: f64) {
        self.state.with_mut(|state| state.set_volume(level));
    }

    pub fn toggle_mute(&mut self) {
        self.state.with_mut(|state| state.toggle_mute());
    }

    /// Push the effective volume without subscribing the caller to the whole state.
    pub fn sync_volume<M: MediaElement + ?Sized>(&self, media: &M) {
        push_volume(media, &self.state.peek());
    }

    pub fn fold_time_update(&mut self, seconds: f64) {
        self.state.with_mut(|state| state.on_time_update(seconds));
    }

    pub fn fold_metadata(&mut self, duration: f64) {
        self.state.with_mut(|state| state.on_metadata(duration));
    }

    pub fn fold_ended(&mut self) {
        self.state.with_mut(|state| state.on_ended());
    }

    pub fn settle(&mut self, request: TransportRequest, outcome: Result<(), MediaError>) {
        if outcome.is_ok() {
            return;
        }
        self.state
            .with_mut(|state| settle_transport(state, request, outcome));
    }
}
