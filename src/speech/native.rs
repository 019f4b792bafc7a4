// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Platform speech backend built on the `tts` crate.

use super::{resolve_voice, SpeechEngine, Utterance, VoiceRegistry};
use crate::models::voice::Voice;
use anyhow::Result;

/// Speech engine and voice registry backed by the platform synthesizer.
#[derive(Clone)]
pub struct NativeSpeech {
    tts: tts::Tts,
    /// Voice active when the engine started, used when none is selected.
    default_voice: Option<tts::Voice>,
}

impl NativeSpeech {
    /// Start the platform synthesizer and remember its default voice.
    pub fn new() -> Result<Self> {
        let tts = tts::Tts::default()?;
        let default_voice = match tts.voice() {
            Ok(voice) => voice,
            Err(e) => {
                log::debug!("Current voice not reported: {}", e);
                None
            }
        };
        Ok(Self { tts, default_voice })
    }

    /// Map a pitch where 1.0 is normal onto the platform range.
    fn platform_pitch(&self, pitch: f32) -> f32 {
        (self.tts.normal_pitch() * pitch).clamp(self.tts.min_pitch(), self.tts.max_pitch())
    }

    /// Map a volume fraction onto the platform range.
    fn platform_volume(&self, volume: f32) -> f32 {
        let (min, max) = (self.tts.min_volume(), self.tts.max_volume());
        min + (max - min) * volume.clamp(0.0, 1.0)
    }
}

impl VoiceRegistry for NativeSpeech {
    fn list_voices(&self) -> Result<Vec<Voice>> {
        let default_id = self.default_voice.as_ref().map(|v| v.id());
        let voices = self
            .tts
            .voices()?
            .into_iter()
            .map(|v| {
                let is_default = default_id.as_deref() == Some(v.id().as_str());
                Voice::new(v.name(), v.language().to_string(), is_default)
            })
            .collect();
        Ok(voices)
    }
}

impl SpeechEngine for NativeSpeech {
    fn speak(&mut self, utterance: &Utterance) -> Result<()> {
        let available = self.tts.voices()?;
        let target = resolve_voice(
            utterance.voice.as_ref(),
            &available,
            self.default_voice.as_ref(),
            |v| v.name(),
        )
        .cloned();
        if let Some(voice) = target {
            self.tts.set_voice(&voice)?;
        }

        let pitch = self.platform_pitch(utterance.pitch);
        if let Err(e) = self.tts.set_pitch(pitch) {
            log::debug!("Pitch not supported: {}", e);
        }
        let volume = self.platform_volume(utterance.volume);
        if let Err(e) = self.tts.set_volume(volume) {
            log::debug!("Volume not supported: {}", e);
        }

        self.tts.speak(utterance.text.as_str(), false)?;
        Ok(())
    }
}
