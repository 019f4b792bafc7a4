// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Text-to-speech collaborators.
//!
//! The editor talks to the platform speech subsystem through two narrow
//! traits: one lists the available voices, the other speaks an
//! utterance. Speaking is fire-and-forget; queuing of overlapping
//! requests is left to the platform.

#[cfg(feature = "speech-native")]
pub mod native;

use crate::models::voice::Voice;
use anyhow::Result;

/// A request to speak some text.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// `None` lets the platform default voice speak.
    pub voice: Option<Voice>,
    pub pitch: f32,
    /// Volume fraction in `0.0..=1.0`.
    pub volume: f32,
}

/// Source of available voices.
pub trait VoiceRegistry {
    fn list_voices(&self) -> Result<Vec<Voice>>;
}

/// Speaks utterances without waiting for them to finish.
pub trait SpeechEngine {
    fn speak(&mut self, utterance: &Utterance) -> Result<()>;
}

/// Pick the platform voice to install before speaking.
///
/// A requested voice is looked up by name, the last match winning. With
/// no request, or when the name is unknown, the platform default that was
/// active at startup is restored so an earlier choice does not linger.
#[cfg(any(test, feature = "speech-native"))]
pub(crate) fn resolve_voice<'a, T>(
    requested: Option<&Voice>,
    available: &'a [T],
    startup_default: Option<&'a T>,
    name_of: impl Fn(&T) -> String,
) -> Option<&'a T> {
    let Some(wanted) = requested else {
        return startup_default;
    };
    match available.iter().rev().find(|v| name_of(*v) == wanted.name) {
        Some(found) => Some(found),
        None => {
            log::warn!("Voice {:?} not found, using the default voice", wanted.name);
            startup_default
        }
    }
}

/// Backend used when no platform speech is available.
///
/// Reports no voices and logs every utterance instead of speaking it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSpeech;

impl VoiceRegistry for LogSpeech {
    fn list_voices(&self) -> Result<Vec<Voice>> {
        Ok(Vec::new())
    }
}

impl SpeechEngine for LogSpeech {
    fn speak(&mut self, utterance: &Utterance) -> Result<()> {
        log::info!(
            "Speak {:?} (voice: {}, pitch: {}, volume: {:.2})",
            utterance.text,
            utterance.voice.as_ref().map_or("default", |v| v.name.as_str()),
            utterance.pitch,
            utterance.volume
        );
        Ok(())
    }
}

/// Pick the speech backends for this build.
///
/// With the `speech-native` feature the platform engine is used when it
/// initializes; otherwise, or on failure, utterances are only logged.
pub fn default_backends() -> (Box<dyn VoiceRegistry>, Box<dyn SpeechEngine>) {
    #[cfg(feature = "speech-native")]
    {
        match native::NativeSpeech::new() {
            Ok(speech) => return (Box::new(speech.clone()), Box::new(speech)),
            Err(e) => log::warn!("Platform speech unavailable, logging utterances instead: {}", e),
        }
    }
    (Box::new(LogSpeech), Box::new(LogSpeech))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_voice_restores_default_without_request() {
        let available = ["Alex", "Amelie"];
        let name_of = |v: &&str| v.to_string();
        let default = Some(&available[0]);

        let amelie = Voice::new("Amelie", "fr-CA", false);
        assert_eq!(resolve_voice(Some(&amelie), &available, default, name_of), Some(&"Amelie"));
        // Placeholder selected after a named voice: back to the default
        assert_eq!(resolve_voice(None, &available, default, name_of), Some(&"Alex"));
    }

    #[test]
    fn test_resolve_voice_unknown_name_falls_back() {
        let available = ["Alex", "Amelie", "Alex"];
        let name_of = |v: &&str| v.to_string();
        let missing = Voice::new("Zoe", "en-AU", false);
        assert_eq!(resolve_voice(Some(&missing), &available, None, name_of), None);

        let alex = Voice::new("Alex", "en-US", true);
        let found = resolve_voice(Some(&alex), &available, None, name_of);
        assert!(std::ptr::eq(found.unwrap(), &available[2]));
    }

    #[test]
    fn test_log_speech() {
        let mut speech = LogSpeech;
        assert!(speech.list_voices().unwrap().is_empty());
        let utterance = Utterance {
            text: "hello".to_string(),
            voice: None,
            pitch: 1.0,
            volume: 0.5,
        };
        assert!(speech.speak(&utterance).is_ok());
    }
}
