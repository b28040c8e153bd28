use serde::{Deserialize, Serialize};

/// A playable release as shown in the hero section and transport bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub url: String,
    pub cover: String,
    /// Display string such as "2:15"; the real length comes from the media element.
    pub duration: String,
    #[serde(default)]
    pub lyrics: Option<String>,
}

impl Track {
    pub fn has_lyrics(&self) -> bool {
        self.lyrics
            .as_deref()
            .map(|text| !text.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Format a position in seconds as `m:ss`. Unknown or empty positions read `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
