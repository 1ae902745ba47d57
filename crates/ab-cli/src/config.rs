//! Configuration for terminal play.

use std::time::Duration;

/// How the terminal renders directives.
#[derive(Debug, Clone)]
pub struct PlayConfig {
    /// Sleep on `Delay` directives.
    pub honor_delays: bool,
    /// Type text out one character at a time.
    pub typewriter: bool,
    /// Upper bound of the random pause between typed characters.
    pub keystroke_jitter: Duration,
    /// Prefix for sound ids when showing `Play` directives.
    pub sound_base_url: Option<String>,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            honor_delays: true,
            typewriter: false,
            keystroke_jitter: Duration::from_millis(10),
            sound_base_url: None,
        }
    }
}

impl PlayConfig {
    /// Configuration for non-interactive output: no waiting, no typing.
    pub fn scripted() -> Self {
        Self::default().with_delays(false)
    }

    /// Enable or disable sleeping on pauses.
    pub fn with_delays(mut self, honor: bool) -> Self {
        self.honor_delays = honor;
        self
    }

    /// Enable or disable the typewriter effect.
    pub fn with_typewriter(mut self, typewriter: bool) -> Self {
        self.typewriter = typewriter;
        self
    }

    /// Set the base URL for sounds. A trailing `/` is added if missing.
    pub fn with_sound_base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.is_empty() && !url.ends_with('/') {
            url.push('/');
        }
        self.sound_base_url = Some(url);
        self
    }

    /// Resolve a sound id for display.
    pub fn sound_url(&self, sound: &str) -> String {
        match &self.sound_base_url {
            Some(base) => format!("{base}{sound}"),
            None => sound.to_string(),
        }
    }
}
