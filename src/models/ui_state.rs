// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI affordance state machine.
//!
//! Tracks whether an image has been rendered and whether the voice list
//! has been populated, and tells the caller which controls to enable or
//! disable after each user event. The machine is pure: it never touches
//! the UI, it only returns the new state and a list of effects.

/// Whether the canvas currently shows a rendered meme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageAxis {
    #[default]
    Empty,
    ImageRendered,
}

/// Whether the voice selector has been filled from the voice registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoiceAxis {
    #[default]
    VoicesUnpopulated,
    VoicesPopulated,
}

/// Combined UI state for one editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub image: ImageAxis,
    pub voices: VoiceAxis,
}

/// User-driven events consumed by [`transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A newly selected image finished decoding and was drawn.
    ImageLoaded,
    /// The caption form was submitted and the canvas redrawn.
    CaptionsSubmitted,
    /// Request to fill the voice selector.
    ///
    /// Emitted as a follow-up of `CaptionsSubmitted` while the voices are
    /// unpopulated; the controller never dispatches it on its own.
    VoicesPopulationRequested,
    /// The clear button was pressed.
    ClearRequested,
}

/// A control whose enabled state is driven by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    Clear,
    ReadAloud,
    VoiceSelection,
}

/// Side effect the caller must carry out after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Enable(Affordance),
    Disable(Affordance),
    /// Query the voice registry and fill the voice selector.
    PopulateVoices,
    /// Empty both caption text fields.
    ResetCaptions,
    /// Dispatch another event right after this transition.
    Follow(Event),
}

/// Result of applying an event to a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: UiState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: UiState) -> Self {
        Self { state, effects: Vec::new() }
    }
}

/// Apply `event` to `state`.
///
/// Events that are not meaningful in the current state leave it
/// unchanged and produce no effects.
pub fn transition(state: UiState, event: Event) -> Transition {
    match event {
        Event::ImageLoaded => match state.image {
            ImageAxis::Empty => Transition {
                state: UiState { image: ImageAxis::ImageRendered, ..state },
                effects: vec![Effect::Enable(Affordance::Clear)],
            },
            ImageAxis::ImageRendered => Transition::unchanged(state),
        },
        Event::CaptionsSubmitted => {
            let mut effects = vec![
                Effect::Enable(Affordance::Clear),
                Effect::Enable(Affordance::ReadAloud),
                Effect::Enable(Affordance::VoiceSelection),
            ];
            if state.voices == VoiceAxis::VoicesUnpopulated {
                effects.push(Effect::Follow(Event::VoicesPopulationRequested));
            }
            Transition {
                state: UiState { image: ImageAxis::ImageRendered, ..state },
                effects,
            }
        }
        // Populate voices at most once per session
        Event::VoicesPopulationRequested => match state.voices {
            VoiceAxis::VoicesUnpopulated => Transition {
                state: UiState { voices: VoiceAxis::VoicesPopulated, ..state },
                effects: vec![Effect::PopulateVoices],
            },
            VoiceAxis::VoicesPopulated => Transition::unchanged(state),
        },
        Event::ClearRequested => Transition {
            state: UiState { image: ImageAxis::Empty, ..state },
            effects: vec![
                Effect::Disable(Affordance::Clear),
                Effect::Disable(Affordance::ReadAloud),
                Effect::Disable(Affordance::VoiceSelection),
                Effect::ResetCaptions,
            ],
        },
    }
}

/// Enabled flags for the controls driven by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Affordances {
    pub clear: bool,
    pub read_aloud: bool,
    pub voice_selection: bool,
}

impl Affordances {
    /// Check whether a control is currently enabled.
    pub fn is_enabled(&self, affordance: Affordance) -> bool {
        match affordance {
            Affordance::Clear => self.clear,
            Affordance::ReadAloud => self.read_aloud,
            Affordance::VoiceSelection => self.voice_selection,
        }
    }

    /// Apply an enable/disable effect. Other effects are ignored.
    pub fn apply(&mut self, effect: Effect) {
        let (affordance, enabled) = match effect {
            Effect::Enable(a) => (a, true),
            Effect::Disable(a) => (a, false),
            Effect::PopulateVoices | Effect::ResetCaptions | Effect::Follow(_) => return,
        };
        match affordance {
            Affordance::Clear => self.clear = enabled,
            Affordance::ReadAloud => self.read_aloud = enabled,
            Affordance::VoiceSelection => self.voice_selection = enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_states() -> Vec<UiState> {
        let mut states = Vec::new();
        for image in [ImageAxis::Empty, ImageAxis::ImageRendered] {
            for voices in [VoiceAxis::VoicesUnpopulated, VoiceAxis::VoicesPopulated] {
                states.push(UiState { image, voices });
            }
        }
        states
    }

    /// Apply `event` and every follow-up event it produces.
    fn settle(state: UiState, event: Event) -> Transition {
        let mut t = transition(state, event);
        let mut i = 0;
        while i < t.effects.len() {
            if let Effect::Follow(next) = t.effects[i] {
                let followed = transition(t.state, next);
                t.state = followed.state;
                t.effects.extend(followed.effects);
            }
            i += 1;
        }
        t
    }

    #[test]
    fn test_initial_state() {
        let state = UiState::default();
        assert_eq!(state.image, ImageAxis::Empty);
        assert_eq!(state.voices, VoiceAxis::VoicesUnpopulated);
        assert_eq!(Affordances::default(), Affordances {
            clear: false,
            read_aloud: false,
            voice_selection: false,
        });
    }

    #[test]
    fn test_image_loaded_enables_clear_only() {
        let t = transition(UiState::default(), Event::ImageLoaded);
        assert_eq!(t.state.image, ImageAxis::ImageRendered);
        assert_eq!(t.state.voices, VoiceAxis::VoicesUnpopulated);
        assert_eq!(t.effects, vec![Effect::Enable(Affordance::Clear)]);
    }

    #[test]
    fn test_image_loaded_when_rendered_is_noop() {
        let state = UiState { image: ImageAxis::ImageRendered, voices: VoiceAxis::VoicesPopulated };
        let t = transition(state, Event::ImageLoaded);
        assert_eq!(t.state, state);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_first_submit_populates_voices_once() {
        let first = settle(UiState::default(), Event::CaptionsSubmitted);
        assert_eq!(first.state.image, ImageAxis::ImageRendered);
        assert_eq!(first.state.voices, VoiceAxis::VoicesPopulated);
        assert!(first.effects.contains(&Effect::PopulateVoices));
        assert!(first.effects.contains(&Effect::Enable(Affordance::ReadAloud)));
        assert!(first.effects.contains(&Effect::Enable(Affordance::VoiceSelection)));

        let second = settle(first.state, Event::CaptionsSubmitted);
        assert_eq!(second.state, first.state);
        assert!(!second.effects.contains(&Effect::PopulateVoices));
        assert!(!second
            .effects
            .contains(&Effect::Follow(Event::VoicesPopulationRequested)));
    }

    #[test]
    fn test_submit_requests_population_as_follow_up() {
        let t = transition(UiState::default(), Event::CaptionsSubmitted);
        assert_eq!(t.state.voices, VoiceAxis::VoicesUnpopulated);
        assert_eq!(
            t.effects.last(),
            Some(&Effect::Follow(Event::VoicesPopulationRequested))
        );
    }

    #[test]
    fn test_population_request_when_populated_is_noop() {
        let state = UiState { image: ImageAxis::ImageRendered, voices: VoiceAxis::VoicesPopulated };
        let t = transition(state, Event::VoicesPopulationRequested);
        assert_eq!(t.state, state);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_clear_from_any_state_keeps_voice_axis() {
        for state in all_states() {
            let t = transition(state, Event::ClearRequested);
            assert_eq!(t.state.image, ImageAxis::Empty);
            assert_eq!(t.state.voices, state.voices);
            assert!(t.effects.contains(&Effect::ResetCaptions));
            assert!(t.effects.contains(&Effect::Disable(Affordance::Clear)));
        }
    }

    #[test]
    fn test_affordances_follow_effects() {
        let mut affordances = Affordances::default();
        let submitted = settle(UiState::default(), Event::CaptionsSubmitted);
        for effect in &submitted.effects {
            affordances.apply(*effect);
        }
        assert!(affordances.is_enabled(Affordance::Clear));
        assert!(affordances.is_enabled(Affordance::ReadAloud));
        assert!(affordances.is_enabled(Affordance::VoiceSelection));

        let cleared = transition(submitted.state, Event::ClearRequested);
        for effect in &cleared.effects {
            affordances.apply(*effect);
        }
        assert_eq!(affordances, Affordances::default());
    }
}
