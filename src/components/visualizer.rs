use crate::components::PlayerController;
use crate::visualizer::{SURFACE_HEIGHT, SURFACE_WIDTH};
use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::components::get_or_create_audio_element;
#[cfg(target_arch = "wasm32")]
use crate::visualizer::WebVisualizer;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

pub const VISUALIZER_CANVAS_ID: &str = "allfines-visualizer";

/// Frequency-bar canvas. Runs its frame loop only while the player is playing.
#[component]
pub fn Visualizer() -> Element {
    let controller = use_context::<PlayerController>();
    let playing = use_memo(move || controller.is_playing());

    #[cfg(target_arch = "wasm32")]
    {
        let engine = use_hook(|| {
            get_or_create_audio_element()
                .map(|audio| Rc::new(WebVisualizer::new(audio, VISUALIZER_CANVAS_ID)))
        });

        {
            let engine = engine.clone();
            use_effect(move || {
                let playing = playing();
                if let Some(engine) = engine.as_ref() {
                    engine.set_playing(playing);
                }
            });
        }

        use_drop(move || {
            if let Some(engine) = engine.as_ref() {
                engine.dispose();
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = playing;

    rsx! {
        canvas {
            id: VISUALIZER_CANVAS_ID,
            width: "{SURFACE_WIDTH}",
            height: "{SURFACE_HEIGHT}",
            class: "w-full h-32 md:h-40 rounded-lg opacity-80",
        }
    }
}
