use crate::components::{LyricsVisibility, PlayerController};
use dioxus::prelude::*;

#[component]
pub fn LyricsPanel() -> Element {
    let controller = use_context::<PlayerController>();
    let show_lyrics = use_context::<LyricsVisibility>().0;

    let lyrics = controller
        .track()
        .filter(|track| track.has_lyrics())
        .and_then(|track| track.lyrics);

    let Some(lyrics) = lyrics.filter(|_| show_lyrics()) else {
        return rsx! {};
    };

    rsx! {
        div { class: "animate-fade-in bg-white/5 border border-white/10 backdrop-blur-xl rounded-2xl p-8 md:p-12",
            h3 { class: "text-center text-2xl font-display font-bold text-white mb-8",
                "Verse Data"
            }
            div { class: "text-center text-slate-300 font-light leading-relaxed text-lg tracking-wide",
                pre { class: "font-sans whitespace-pre-wrap", "{lyrics}" }
            }
            div { class: "mt-12 text-center",
                p { class: "text-[10px] text-slate-600 uppercase tracking-widest",
                    "© 2024 Akadion Records. All Rights Reserved."
                }
            }
        }
    }
}
