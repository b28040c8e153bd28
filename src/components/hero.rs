use crate::components::{Icon, LyricsVisibility, PlayerController};
use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    let mut controller = use_context::<PlayerController>();
    let mut show_lyrics = use_context::<LyricsVisibility>().0;
    let playing = controller.is_playing();
    let track = controller.track();

    let cover = track.as_ref().map(|t| t.cover.clone()).unwrap_or_default();
    let title = track.as_ref().map(|t| t.title.clone()).unwrap_or_default();
    let artist = track.as_ref().map(|t| t.artist.clone()).unwrap_or_default();

    rsx! {
        section { class: "relative w-full min-h-[85vh] flex flex-col items-center justify-center pt-20 pb-10 px-6",
            div { class: "relative z-10 w-full max-w-5xl mx-auto text-center space-y-8",
                // Cover art
                div { class: "relative w-64 h-64 md:w-80 md:h-80 mx-auto mb-12 group",
                    div { class: if playing { "w-full h-full rounded-2xl bg-gradient-to-br from-purple-500 to-red-500 p-1 shadow-2xl shadow-purple-900/50 transition-transform duration-700 scale-105" } else { "w-full h-full rounded-2xl bg-gradient-to-br from-purple-500 to-red-500 p-1 shadow-2xl shadow-purple-900/50 transition-transform duration-700 scale-100" },
                        img {
                            src: "{cover}",
                            alt: "Cover",
                            class: "w-full h-full object-cover rounded-xl opacity-90 filter contrast-125",
                        }
                    }
                    div { class: if playing { "absolute -inset-4 bg-gradient-to-br from-purple-600 to-red-600 rounded-full blur-2xl -z-10 transition-opacity duration-1000 opacity-60" } else { "absolute -inset-4 bg-gradient-to-br from-purple-600 to-red-600 rounded-full blur-2xl -z-10 transition-opacity duration-1000 opacity-20" } }
                }

                div { class: "space-y-2 animate-fade-in",
                    div { class: "flex items-center justify-center gap-3 mb-4",
                        span { class: "px-3 py-1 rounded-full border border-white/10 bg-white/5 backdrop-blur-sm text-[9px] font-bold text-slate-300 uppercase tracking-widest",
                            "Single Release"
                        }
                        span { class: "px-3 py-1 rounded-full border border-red-500/20 bg-red-500/5 backdrop-blur-sm text-[9px] font-bold text-red-400 uppercase tracking-widest",
                            "Demo / Recording Only"
                        }
                    }
                    h1 { class: "text-5xl md:text-8xl font-display font-bold text-transparent bg-clip-text bg-gradient-to-b from-white to-slate-400 tracking-tighter",
                        "{title}"
                    }
                    p { class: "text-lg md:text-xl text-slate-400 font-light tracking-wide",
                        "Written by "
                        span { class: "text-white font-medium border-b border-red-500/50 pb-0.5",
                            "{artist}"
                        }
                    }
                }

                div { class: "flex items-center justify-center gap-6 animate-fade-in pt-6",
                    button {
                        id: "hero-play-btn",
                        r#type: "button",
                        class: "h-16 px-10 bg-white text-black rounded-full font-bold text-xs uppercase tracking-widest hover:bg-slate-200 transition-all hover:scale-105 flex items-center gap-3 shadow-[0_0_40px_-10px_rgba(255,255,255,0.3)]",
                        onclick: move |_| controller.toggle_play(),
                        if playing {
                            Icon { name: "pause".to_string(), class: "w-5 h-5".to_string() }
                            "Pause Playback"
                        } else {
                            Icon { name: "play".to_string(), class: "w-5 h-5".to_string() }
                            "Start Listening"
                        }
                    }
                    button {
                        r#type: "button",
                        title: "Lyrics",
                        class: if show_lyrics() { "h-16 w-16 rounded-full border flex items-center justify-center text-white hover:bg-white/10 transition-all bg-white/10 border-white/40" } else { "h-16 w-16 rounded-full border border-white/20 flex items-center justify-center text-white hover:bg-white/10 transition-all" },
                        onclick: move |_| {
                            let open = show_lyrics();
                            show_lyrics.set(!open);
                        },
                        Icon { name: "more".to_string(), class: "w-5 h-5".to_string() }
                    }
                }
            }
        }
    }
}
