use crate::components::GeminiBadge;
use dioxus::prelude::*;

const APP_VERSION_TAG: &str = "v 0.9 Beta";

#[component]
pub fn TopBar() -> Element {
    rsx! {
        div { class: "fixed top-6 left-1/2 -translate-x-1/2 w-[92%] max-w-7xl h-16 rounded-2xl border border-white/10 bg-black/60 backdrop-blur-xl z-50 px-6 flex items-center justify-between shadow-lg shadow-black/50",
            div { class: "flex items-center gap-10",
                div { class: "flex items-center gap-2",
                    div { class: "w-2 h-2 bg-red-500 rounded-full animate-pulse" }
                    h1 { class: "text-xl font-display font-bold text-white tracking-tighter",
                        "ALLFINES"
                    }
                }
                nav { class: "hidden md:flex items-center gap-8",
                    span { class: "text-[10px] font-bold uppercase tracking-widest text-white cursor-pointer hover:text-red-400 transition-colors",
                        "Studio"
                    }
                    span { class: "text-[10px] font-bold uppercase tracking-widest text-slate-500 cursor-not-allowed",
                        "Discovery"
                    }
                    span { class: "text-[10px] font-bold uppercase tracking-widest text-slate-500 cursor-not-allowed",
                        "Agency"
                    }
                }
            }

            div { class: "flex items-center gap-4",
                div { class: "hidden md:block",
                    span { class: "text-[10px] text-slate-500 uppercase tracking-widest mr-4",
                        "{APP_VERSION_TAG}"
                    }
                }
                GeminiBadge {}
            }
        }
    }
}
