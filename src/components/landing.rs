use crate::components::Icon;
use dioxus::prelude::*;

/// Welcome screen shown until the listener opts in. Entering is the user
/// gesture browsers want before audio may start.
#[component]
pub fn LandingGate(on_enter: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div { class: "h-screen w-full bg-[#020617] flex items-center justify-center relative overflow-hidden",
            div { class: "absolute top-[-20%] left-[-20%] w-[800px] h-[800px] bg-purple-900/30 rounded-full blur-[120px] animate-pulse-slow" }
            div {
                class: "absolute bottom-[-20%] right-[-20%] w-[600px] h-[600px] bg-red-900/20 rounded-full blur-[100px] animate-pulse-slow",
                style: "animation-delay: 1.5s",
            }

            div { class: "z-10 text-center space-y-12 animate-fade-in backdrop-blur-3xl bg-white/5 border border-white/10 p-12 rounded-3xl shadow-2xl",
                div { class: "space-y-4",
                    div { class: "inline-block px-3 py-1 rounded-full border border-red-500/30 bg-red-500/10 mb-4",
                        span { class: "text-[10px] font-bold text-red-400 uppercase tracking-widest",
                            "Demo Beta Experience"
                        }
                    }
                    h1 { class: "text-7xl md:text-9xl font-display font-bold text-white tracking-tighter",
                        "ALLFINES"
                        span { class: "text-red-500", "." }
                    }
                    p { class: "text-xs md:text-sm text-slate-400 uppercase tracking-[0.3em] font-medium",
                        "Premium Audio Architecture"
                    }
                }

                button {
                    id: "enter-session-btn",
                    r#type: "button",
                    class: "group relative inline-flex items-center justify-center px-10 py-5 bg-white text-black overflow-hidden transition-all hover:bg-slate-200 rounded-full",
                    onclick: move |evt| on_enter.call(evt),
                    span { class: "relative flex items-center gap-3 font-display uppercase tracking-widest text-xs font-bold",
                        "Enter Session"
                        Icon { name: "arrow-right".to_string(), class: "w-4 h-4".to_string() }
                    }
                }
            }
        }
    }
}
