use crate::api::{featured_track, GeminiClient};
use crate::components::{
    AudioController, Hero, LandingGate, LyricsPanel, Player, PlayerController, TopBar,
    VisualizerPanel,
};
use crate::config::AppConfig;
use crate::diagnostics::log_info;
use crate::player::PlayerState;
use dioxus::prelude::*;

/// Whether the lyrics panel is open.
#[derive(Clone, Copy)]
pub struct LyricsVisibility(pub Signal<bool>);

#[component]
pub fn AppShell() -> Element {
    let config = use_hook(|| {
        let config = AppConfig::load();
        log_info(
            "config",
            format!(
                "model={} api_key={}",
                config.gemini_model,
                if config.gemini_api_key.is_some() { "set" } else { "missing" }
            ),
        );
        config
    });
    let initial_volume = config.initial_volume;
    let state = use_signal(move || PlayerState::new(Some(featured_track()), initial_volume));
    let controller = PlayerController::new(state);
    let show_lyrics = use_signal(|| false);
    let mut has_entered = use_signal(|| false);

    // Provide state via context
    use_context_provider(|| controller);
    use_context_provider(|| GeminiClient::from_config(&config));
    use_context_provider(|| config.clone());
    use_context_provider(|| LyricsVisibility(show_lyrics));

    if !has_entered() {
        return rsx! {
            LandingGate { on_enter: move |_| has_entered.set(true) }
        };
    }

    rsx! {
        div { class: "min-h-screen bg-[#050505] text-white font-sans flex flex-col overflow-hidden selection:bg-red-500/30 selection:text-white",
            AudioController {}
            TopBar {}

            main { class: "flex-1 overflow-y-auto relative scroll-smooth no-scrollbar",
                // Background glow
                div { class: "fixed inset-0 z-0 pointer-events-none",
                    div { class: "absolute top-[-10%] left-[20%] w-[60vw] h-[60vw] bg-purple-600/20 rounded-full blur-[150px] opacity-40" }
                    div { class: "absolute bottom-[10%] right-[10%] w-[40vw] h-[40vw] bg-red-600/20 rounded-full blur-[150px] opacity-30" }
                }

                Hero {}

                section { class: "relative z-10 w-full max-w-4xl mx-auto px-6 pb-40",
                    VisualizerPanel {}
                    LyricsPanel {}
                }
            }

            Player {}
        }
    }
}
