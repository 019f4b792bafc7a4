// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor controller.
//!
//! The controller owns the session state and the speech collaborators,
//! which are handed in at construction. Every user action is turned into
//! an [`Event`], run through the state machine, and the returned effects
//! are applied to the controls and captions.

use crate::io::config::MemeConfig;
use crate::models::{
    caption::Captions,
    dimensions::Dimensions,
    ui_state::{transition, Affordances, Effect, Event, UiState, VoiceAxis},
    voice::VoiceList,
    volume::{Volume, VolumeTier},
};
use crate::render::{clear_canvas, render_meme, RenderError, Scene};
use crate::speech::{SpeechEngine, Utterance, VoiceRegistry};
use anyhow::Result;

/// State and collaborators for one editing session.
pub struct MemeController {
    config: MemeConfig,
    state: UiState,
    affordances: Affordances,
    captions: Captions,
    volume: Volume,
    voices: VoiceList,
    /// Size of the most recently loaded image. Survives a clear.
    image: Option<Dimensions>,
    scene: Scene,
    registry: Box<dyn VoiceRegistry>,
    speech: Box<dyn SpeechEngine>,
}

impl MemeController {
    /// Create a controller for a fresh session.
    pub fn new(
        config: MemeConfig,
        registry: Box<dyn VoiceRegistry>,
        speech: Box<dyn SpeechEngine>,
    ) -> Self {
        Self {
            volume: config.volume(),
            voices: VoiceList::new(config.voice_placeholder.clone()),
            config,
            state: UiState::default(),
            affordances: Affordances::default(),
            captions: Captions::default(),
            image: None,
            scene: Scene::new(),
            registry,
            speech,
        }
    }

    /// A newly selected image finished decoding.
    ///
    /// Redraws the canvas with the current captions. An image with an
    /// unusable size is rejected and the previous image is kept.
    pub fn image_loaded(&mut self, image: Dimensions) -> Result<(), RenderError> {
        let scene = self.compose(Some(image))?;
        self.image = Some(image);
        self.scene = scene;
        log::info!("Rendered image {}x{}", image.width, image.height);
        self.dispatch(Event::ImageLoaded);
        Ok(())
    }

    /// The caption form was submitted.
    pub fn submit_captions(&mut self) -> Result<(), RenderError> {
        self.scene = self.compose(self.image)?;
        log::info!("Rendered captions {:?} / {:?}", self.captions.top, self.captions.bottom);
        self.dispatch(Event::CaptionsSubmitted);
        Ok(())
    }

    /// Blank the canvas and reset the captions.
    pub fn clear(&mut self) {
        let mut scene = Scene::new();
        clear_canvas(&mut scene, self.config.canvas());
        self.scene = scene;
        self.dispatch(Event::ClearRequested);
    }

    /// Speak the captions with the selected voice and current volume.
    pub fn read_aloud(&mut self) -> Result<()> {
        if !self.affordances.read_aloud {
            log::debug!("Read aloud ignored, control disabled");
            return Ok(());
        }
        let voice = self
            .voices
            .selected()
            .and_then(|selected| self.voices.find_by_name(&selected.name))
            .cloned();
        if self.captions.is_empty() {
            log::debug!("Both captions are empty");
        }
        let utterance = Utterance {
            text: self.captions.spoken_text(),
            voice,
            pitch: self.config.pitch,
            volume: self.volume.as_fraction(),
        };
        log::info!("Reading captions aloud");
        self.speech.speak(&utterance)
    }

    /// Set the slider volume, clamped to 0..=100.
    pub fn set_volume(&mut self, level: u8) {
        self.volume = Volume::new(level);
    }

    /// Select voice option `index` (0 is the placeholder).
    pub fn select_voice(&mut self, index: usize) {
        if self.affordances.voice_selection {
            self.voices.select(index);
        }
    }

    /// Current position in the state machine.
    #[cfg(test)]
    pub fn state(&self) -> UiState {
        self.state
    }

    /// Which controls are enabled.
    pub fn affordances(&self) -> Affordances {
        self.affordances
    }

    /// Caption text as last edited.
    #[cfg(test)]
    pub fn captions(&self) -> &Captions {
        &self.captions
    }

    /// Caption text, for the form fields to edit in place.
    pub fn captions_mut(&mut self) -> &mut Captions {
        &mut self.captions
    }

    /// Current slider volume.
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Icon tier for the current volume.
    pub fn volume_tier(&self) -> VolumeTier {
        self.volume.tier()
    }

    /// Voice selector labels, placeholder first.
    pub fn voice_options(&self) -> Vec<String> {
        self.voices.labels()
    }

    /// Index of the selected voice option.
    pub fn selected_voice_index(&self) -> usize {
        self.voices.selected_index()
    }

    /// Drawing recorded by the last render or clear.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Size of the drawing area.
    pub fn canvas(&self) -> Dimensions {
        self.config.canvas()
    }

    fn compose(&self, image: Option<Dimensions>) -> Result<Scene, RenderError> {
        let mut scene = Scene::new();
        render_meme(
            &mut scene,
            self.config.canvas(),
            image,
            &self.captions,
            &self.config.text_style(),
        )?;
        Ok(scene)
    }

    fn dispatch(&mut self, event: Event) {
        let t = transition(self.state, event);
        if t.state != self.state {
            log::debug!("{:?}: {:?} -> {:?}", event, self.state, t.state);
        }
        self.state = t.state;
        for effect in t.effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::Enable(_) | Effect::Disable(_) => self.affordances.apply(effect),
            Effect::PopulateVoices => {
                if !self.populate_voices() {
                    // Ask the registry again on the next submit
                    self.state.voices = VoiceAxis::VoicesUnpopulated;
                }
            }
            Effect::ResetCaptions => self.captions.clear(),
            Effect::Follow(event) => self.dispatch(event),
        }
    }

    /// Fill the voice selector. Returns false when the registry failed.
    fn populate_voices(&mut self) -> bool {
        if self.voices.is_populated() {
            return true;
        }
        match self.registry.list_voices() {
            Ok(voices) => {
                let count = voices.len();
                if self.voices.populate(voices) {
                    log::info!("Populated {} voices", count);
                } else {
                    log::info!("No voices available, using the platform default");
                }
                true
            }
            Err(e) => {
                log::warn!("Failed to list voices: {}", e);
                false
            }
        }
    }
}
