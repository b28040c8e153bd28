use crate::api::format_time;
use crate::components::{Icon, PlayerController};
use dioxus::prelude::*;

mod controls;

use controls::{PlayPauseButton, SkipButton, StopButton, VolumeControl};

/// Floating transport bar.
#[component]
pub fn Player() -> Element {
    let mut controller = use_context::<PlayerController>();
    let state = controller.current();
    let playing = state.status.is_playing();

    let title = state
        .current_track
        .as_ref()
        .map(|track| track.title.clone())
        .unwrap_or_default();
    let artist = state
        .current_track
        .as_ref()
        .map(|track| track.artist.clone())
        .unwrap_or_default();

    let progress = state.progress() * 100.0;
    let seek_max = state.seek_max();
    let current_time = state.current_time;

    let on_seek_input = move |e: Event<FormData>| {
        if let Ok(seconds) = e.value().parse::<f64>() {
            controller.seek(seconds);
        }
    };

    rsx! {
        div { class: "fixed bottom-6 left-1/2 -translate-x-1/2 w-[92%] max-w-3xl h-20 bg-black/80 backdrop-blur-xl border border-white/10 rounded-full px-8 flex items-center justify-between z-50 shadow-2xl",
            // Now playing
            div { class: "flex items-center gap-4 w-1/3",
                div { class: if playing { "w-10 h-10 rounded-full bg-gradient-to-br from-purple-500 to-red-500 flex items-center justify-center shadow-lg animate-spin-slow" } else { "w-10 h-10 rounded-full bg-gradient-to-br from-purple-500 to-red-500 flex items-center justify-center shadow-lg" },
                    Icon { name: "disc".to_string(), class: "w-5 h-5 text-white opacity-80".to_string() }
                }
                div { class: "hidden sm:block overflow-hidden",
                    h4 { class: "text-xs font-bold text-white truncate", "{title}" }
                    p { class: "text-[9px] text-slate-400 uppercase tracking-wider truncate",
                        "{artist}"
                    }
                }
            }

            // Transport and progress
            div { class: "flex-1 max-w-xs flex flex-col items-center gap-1",
                div { class: "flex items-center gap-6",
                    SkipButton { forward: false }
                    PlayPauseButton {}
                    SkipButton { forward: true }
                    StopButton {}
                }
                div { class: "w-full flex items-center gap-2 mt-1",
                    span { class: "text-[9px] text-slate-500 w-8 text-right tabular-nums",
                        {format_time(current_time)}
                    }
                    div { class: "flex-1 h-1 bg-white/10 rounded-full relative group cursor-pointer",
                        div {
                            class: "absolute top-0 left-0 h-full bg-gradient-to-r from-purple-500 to-red-500 rounded-full",
                            style: "width: {progress}%",
                        }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "{seek_max}",
                            step: "any",
                            value: "{current_time}",
                            class: "absolute inset-0 w-full h-full opacity-0 cursor-pointer",
                            oninput: on_seek_input,
                        }
                    }
                    span { class: "text-[9px] text-slate-500 w-8 tabular-nums",
                        {format_time(state.duration)}
                    }
                }
            }

            // Volume and extras
            div { class: "flex items-center justify-end gap-3 w-1/3",
                VolumeControl {}
                button {
                    r#type: "button",
                    class: "text-slate-500 hover:text-red-500 transition-colors",
                    Icon { name: "heart".to_string(), class: "w-4 h-4".to_string() }
                }
            }
        }
    }
}
