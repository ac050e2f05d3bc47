use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// One alternative in a yt-dlp format expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSelector {
    /// Best audio-only stream in the given container.
    BestAudioExt(String),
    /// Best audio-only stream in any container.
    BestAudio,
    /// Best stream overall, possibly with video.
    Best,
}

impl fmt::Display for FormatSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatSelector::BestAudioExt(ext) => write!(f, "bestaudio[ext={}]", ext),
            FormatSelector::BestAudio => f.write_str("bestaudio"),
            FormatSelector::Best => f.write_str("best"),
        }
    }
}

impl FromStr for FormatSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "bestaudio" => Ok(FormatSelector::BestAudio),
            "best" => Ok(FormatSelector::Best),
            _ => s
                .strip_prefix("bestaudio[ext=")
                .and_then(|rest| rest.strip_suffix(']'))
                .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
                .map(|ext| FormatSelector::BestAudioExt(ext.to_string()))
                .ok_or_else(|| format!("Invalid format selector: {}", s)),
        }
    }
}

/// Ordered list of format alternatives; earlier entries win.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct FormatPreference(Vec<FormatSelector>);

impl FormatPreference {
    pub fn new(selectors: Vec<FormatSelector>) -> Result<Self, String> {
        if selectors.is_empty() {
            return Err("format preference must contain at least one selector".to_string());
        }
        Ok(Self(selectors))
    }

    /// `bestaudio[ext=m4a]/bestaudio/best`
    pub fn audio_m4a_first() -> Self {
        Self(vec![
            FormatSelector::BestAudioExt("m4a".to_string()),
            FormatSelector::BestAudio,
            FormatSelector::Best,
        ])
    }

    /// `bestaudio/best`
    pub fn audio_first() -> Self {
        Self(vec![FormatSelector::BestAudio, FormatSelector::Best])
    }

    pub fn selectors(&self) -> &[FormatSelector] {
        &self.0
    }
}

impl fmt::Display for FormatPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("/");
        f.write_str(&rendered)
    }
}

impl TryFrom<Vec<String>> for FormatPreference {
    type Error = String;

    fn try_from(values: Vec<String>) -> Result<Self, Self::Error> {
        let selectors = values
            .iter()
            .map(|v| v.parse())
            .collect::<Result<Vec<FormatSelector>, _>>()?;
        Self::new(selectors)
    }
}
