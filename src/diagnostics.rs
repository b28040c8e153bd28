//! Tagged log lines: `[scope] message`, routed to the browser console on wasm and stderr elsewhere.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

pub fn format_line(scope: &str, message: &str) -> String {
    let message = message.trim();
    if message.is_empty() {
        format!("[{scope}]")
    } else {
        format!("[{scope}] {message}")
    }
}

#[inline]
pub fn log_info(scope: &str, message: impl AsRef<str>) {
    emit(Level::Info, &format_line(scope, message.as_ref()));
}

#[inline]
pub fn log_warn(scope: &str, message: impl AsRef<str>) {
    emit(Level::Warn, &format_line(scope, message.as_ref()));
}

#[inline]
pub fn log_error(scope: &str, message: impl AsRef<str>) {
    emit(Level::Error, &format_line(scope, message.as_ref()));
}

/// Best-effort text for a rejected promise or thrown JS value.
#[cfg(target_arch = "wasm32")]
pub fn describe_js_error(value: &wasm_bindgen::JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    let field = |name: &str| {
        js_sys::Reflect::get(value, &name.into())
            .ok()
            .and_then(|v| v.as_string())
            .filter(|v| !v.is_empty())
    };
    match (field("name"), field("message")) {
        (Some(name), Some(message)) => format!("{name}: {message}"),
        (None, Some(message)) => message,
        (Some(name), None) => name,
        (None, None) => format!("{value:?}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Info => web_sys::console::log_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Error => web_sys::console::error_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: Level, line: &str) {
    match level {
        Level::Info => eprintln!("{line}"),
        Level::Warn => eprintln!("warn: {line}"),
        Level::Error => eprintln!("error: {line}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_carry_their_scope() {
        assert_eq!(format_line("player", "play() rejected"), "[player] play() rejected");
        assert_eq!(format_line("visualizer", "  "), "[visualizer]");
    }
}
