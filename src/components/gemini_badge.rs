use crate::api::{generate_security_audit, GeminiClient};
use crate::components::Icon;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BadgeStatus {
    Idle,
    Checking,
    Verified,
}

/// Security badge in the top bar. Clicking it asks Gemini for a short
/// reassurance line and shows it in a popover.
#[component]
pub fn GeminiBadge() -> Element {
    let client = use_context::<GeminiClient>();
    let mut status = use_signal(|| BadgeStatus::Idle);
    let mut message = use_signal(String::new);

    let on_verify = move |_| {
        if status() == BadgeStatus::Checking {
            return;
        }
        status.set(BadgeStatus::Checking);
        let client = client.clone();
        spawn(async move {
            let text = generate_security_audit(&client).await;
            message.set(text);
            status.set(BadgeStatus::Verified);
        });
    };

    let verified = status() == BadgeStatus::Verified;
    let current_message = message();

    rsx! {
        div {
            class: "relative flex items-center space-x-3 bg-black/40 p-2 pr-4 rounded-full border border-agency-yellow/20 hover:border-agency-yellow transition-colors cursor-pointer group backdrop-blur-md",
            onclick: on_verify,
            div { class: if verified { "w-8 h-8 rounded-full flex items-center justify-center bg-agency-yellow/20 text-agency-yellow group-hover:bg-agency-yellow/10 transition-all" } else { "w-8 h-8 rounded-full flex items-center justify-center bg-slate-800 text-slate-400 group-hover:bg-agency-yellow/10 transition-all" },
                if status() == BadgeStatus::Checking {
                    Icon { name: "loader".to_string(), class: "h-4 w-4 text-agency-yellow".to_string() }
                } else {
                    Icon { name: "shield-check".to_string(), class: "w-4 h-4".to_string() }
                }
            }
            div { class: "flex flex-col",
                span { class: "text-[10px] font-bold text-slate-400 uppercase tracking-widest",
                    "Security Status"
                }
                span { class: if verified { "text-xs font-bold leading-tight text-agency-yellow" } else { "text-xs font-bold leading-tight text-white" },
                    if verified {
                        "GEMINI & GOOGLE CERTIFIED"
                    } else {
                        "CLICK TO VERIFY"
                    }
                }
            }

            if !current_message.is_empty() {
                div { class: "absolute top-14 left-1/2 -translate-x-1/2 bg-black border border-agency-yellow text-white text-sm p-4 shadow-2xl z-50 w-72 text-center",
                    p { class: "font-display tracking-wide", "{current_message}" }
                    button {
                        r#type: "button",
                        class: "block w-full mt-3 text-xs text-slate-500 hover:text-agency-yellow uppercase tracking-widest",
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            message.set(String::new());
                        },
                        "Close"
                    }
                }
            }
        }
    }
}
