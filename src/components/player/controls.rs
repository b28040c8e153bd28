use crate::components::{Icon, PlayerController};
use dioxus::prelude::*;

/// Play/Pause button
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut controller = use_context::<PlayerController>();
    let playing = controller.is_playing();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "w-8 h-8 bg-white text-black rounded-full flex items-center justify-center hover:scale-110 transition-transform",
            onclick: move |_| controller.toggle_play(),
            if playing {
                Icon { name: "pause".to_string(), class: "w-3.5 h-3.5".to_string() }
            } else {
                Icon {
                    name: "play".to_string(),
                    class: "w-3.5 h-3.5 ml-0.5".to_string(),
                }
            }
        }
    }
}

/// Stop button - pauses and rewinds to the start
#[component]
pub(super) fn StopButton() -> Element {
    let mut controller = use_context::<PlayerController>();

    rsx! {
        button {
            id: "stop-btn",
            r#type: "button",
            title: "Stop",
            class: "text-slate-500 hover:text-white transition-colors",
            onclick: move |_| controller.stop(),
            Icon { name: "stop".to_string(), class: "w-3.5 h-3.5".to_string() }
        }
    }
}

/// Skip buttons are chrome only: the session holds a single track.
#[component]
pub(super) fn SkipButton(forward: bool) -> Element {
    let name = if forward { "skip-forward" } else { "skip-back" };

    rsx! {
        button {
            r#type: "button",
            class: "text-slate-500 hover:text-white transition-colors",
            Icon { name: name.to_string(), class: "w-4 h-4".to_string() }
        }
    }
}

/// Mute toggle plus the volume slider
#[component]
pub(super) fn VolumeControl() -> Element {
    let mut controller = use_context::<PlayerController>();
    let state = controller.current();
    let shown_volume = if state.is_muted { 0.0 } else { state.volume };
    let fill = state.volume * 100.0;

    let on_volume_change = move |e: Event<FormData>| {
        if let Ok(val) = e.value().parse::<f64>() {
            controller.set_volume(val);
        }
    };

    rsx! {
        div { class: "hidden sm:flex items-center gap-2 w-24 group",
            button {
                r#type: "button",
                title: if state.is_muted { "Unmute" } else { "Mute" },
                class: "text-slate-500 group-hover:text-white transition-colors",
                onclick: move |_| controller.toggle_mute(),
                Icon {
                    name: if state.is_muted { "volume-x".to_string() } else { "volume".to_string() },
                    class: "w-3.5 h-3.5".to_string(),
                }
            }
            div { class: "flex-1 h-1 bg-white/10 rounded-full relative",
                div {
                    class: "absolute top-0 left-0 h-full bg-slate-400 rounded-full",
                    style: "width: {fill}%",
                }
                input {
                    r#type: "range",
                    min: "0",
                    max: "1",
                    step: "0.01",
                    value: "{shown_volume}",
                    class: "absolute inset-0 w-full h-full opacity-0 cursor-pointer",
                    oninput: on_volume_change,
                }
            }
        }
    }
}
