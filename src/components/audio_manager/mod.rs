//! Audio Manager - owns the hidden audio element and keeps it in step with `PlayerState`.
//! Runs outside the visual tree so rerenders never restart playback.

// Shared imports, the media element wrapper and the transport sync hook.
include!("media_element.rs");
// Web (wasm) audio controller component.
include!("controller_web.rs");
// Native (non-wasm) audio controller component.
include!("controller_native.rs");
