use crate::api::{analyze_vibe, GeminiClient};
use crate::components::{PlayerController, Visualizer};
use dioxus::prelude::*;

const VIBE_PLACEHOLDER: &str = "Ask Gemini AI to analyze the sonic signature of this track.";

#[component]
pub fn VisualizerPanel() -> Element {
    let controller = use_context::<PlayerController>();
    let client = use_context::<GeminiClient>();
    let mut analysis = use_signal(|| None::<String>);
    let mut analyzing = use_signal(|| false);

    let on_analyze = move |_| {
        if analyzing() {
            return;
        }
        let Some(track) = controller.track() else {
            return;
        };
        analyzing.set(true);
        let client = client.clone();
        spawn(async move {
            let text = analyze_vibe(&client, &track.title).await;
            analysis.set(Some(text));
            analyzing.set(false);
        });
    };

    let analysis_text = analysis().unwrap_or_else(|| VIBE_PLACEHOLDER.to_string());

    rsx! {
        div { class: "mb-16 bg-black/40 border border-white/5 backdrop-blur-md rounded-2xl p-8 shadow-2xl",
            div { class: "flex justify-between items-center mb-6",
                h3 { class: "text-xs font-bold text-slate-500 uppercase tracking-widest",
                    "Realtime Frequency"
                }
                div { class: "flex gap-1",
                    div { class: "w-1 h-1 bg-red-500 rounded-full" }
                    div { class: "w-1 h-1 bg-purple-500 rounded-full" }
                }
            }

            Visualizer {}

            div { class: "mt-8 pt-6 border-t border-white/5 flex flex-col md:flex-row items-center justify-between gap-4",
                p { class: "text-sm text-slate-400 max-w-md", "{analysis_text}" }
                button {
                    id: "vibe-analysis-btn",
                    r#type: "button",
                    disabled: analyzing(),
                    class: "shrink-0 px-4 py-2 border border-purple-500/30 text-purple-400 text-[10px] font-bold uppercase tracking-widest rounded hover:bg-purple-500/10 transition-colors",
                    onclick: on_analyze,
                    if analyzing() {
                        "Analyzing..."
                    } else {
                        "Generate AI Analysis"
                    }
                }
            }
        }
    }
}
