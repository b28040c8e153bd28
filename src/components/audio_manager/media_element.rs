// Media element wrapper and the state -> element sync shared by both controllers.
use crate::components::PlayerController;
use crate::player::{apply_transport, MediaElement, MediaError};
use dioxus::prelude::*;
use futures_util::future::{ready, FutureExt, LocalBoxFuture};

#[cfg(target_arch = "wasm32")]
use crate::diagnostics::describe_js_error;
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

#[cfg(target_arch = "wasm32")]
const AUDIO_ELEMENT_ID: &str = "allfines-audio";

/// Initialize the global audio element once.
#[cfg(target_arch = "wasm32")]
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_attribute("preload", "metadata").ok()?;
    // Without CORS the analyser reads silence for cross-origin sources.
    audio.set_cross_origin(Some("anonymous"));
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
pub struct WebMedia(HtmlAudioElement);

#[cfg(target_arch = "wasm32")]
impl MediaElement for WebMedia {
    fn play(&self) -> LocalBoxFuture<'static, Result<(), MediaError>> {
        match self.0.play() {
            Ok(promise) => async move {
                wasm_bindgen_futures::JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|err| MediaError::PlaybackRejected(describe_js_error(&err)))
            }
            .boxed_local(),
            Err(err) => {
                ready(Err(MediaError::PlaybackRejected(describe_js_error(&err)))).boxed_local()
            }
        }
    }

    fn pause(&self) {
        let _ = self.0.pause();
    }

    fn set_current_time(&self, seconds: f64) {
        self.0.set_current_time(seconds);
    }

    fn set_volume(&self, level: f64) {
        self.0.set_volume(level.clamp(0.0, 1.0));
    }
}

/// The element the controller drives, if the page has one.
#[cfg(target_arch = "wasm32")]
pub fn active_media() -> Option<WebMedia> {
    get_or_create_audio_element().map(WebMedia)
}

/// Stand-in for builds without a DOM: every start is refused, so state rolls back to paused.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Default)]
pub struct DetachedMedia;

#[cfg(not(target_arch = "wasm32"))]
impl MediaElement for DetachedMedia {
    fn play(&self) -> LocalBoxFuture<'static, Result<(), MediaError>> {
        ready(Err(MediaError::Unavailable)).boxed_local()
    }

    fn pause(&self) {}

    fn set_current_time(&self, _seconds: f64) {}

    fn set_volume(&self, _level: f64) {}
}

#[cfg(not(target_arch = "wasm32"))]
pub fn active_media() -> Option<DetachedMedia> {
    Some(DetachedMedia)
}

/// Push status and effective volume to the element whenever they change.
fn use_transport_sync(controller: PlayerController) {
    let request = use_memo(move || controller.transport_request());
    let volume = use_memo(move || controller.effective_volume());

    use_effect(move || {
        let request = request();
        let Some(media) = active_media() else {
            return;
        };
        let mut controller = controller;
        spawn(async move {
            let outcome = apply_transport(&media, request).await;
            controller.settle(request, outcome);
        });
    });

    use_effect(move || {
        let _level = volume();
        if let Some(media) = active_media() {
            controller.sync_volume(&media);
        }
    });
}
