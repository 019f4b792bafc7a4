// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Text-to-speech voices and the voice selector model.

/// A voice reported by the platform speech subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    pub name: String,
    pub lang: String,
    pub is_default: bool,
}

impl Voice {
    /// Create a new voice description.
    #[cfg(any(test, feature = "speech-native"))]
    pub fn new(name: impl Into<String>, lang: impl Into<String>, is_default: bool) -> Self {
        Self { name: name.into(), lang: lang.into(), is_default }
    }

    /// Label shown in the voice selector, e.g. `"Alex (en-US) -- DEFAULT"`.
    pub fn label(&self) -> String {
        let mut label = format!("{} ({})", self.name, self.lang);
        if self.is_default {
            label.push_str(" -- DEFAULT");
        }
        label
    }
}

/// Options of the voice selector.
///
/// Option 0 is always the placeholder; selecting it means "no voice", so
/// the platform default speaks. The list counts as unpopulated while the
/// placeholder is its only option.
#[derive(Debug, Clone)]
pub struct VoiceList {
    placeholder: String,
    voices: Vec<Voice>,
    selected: usize,
}

impl VoiceList {
    /// Create a list holding only the placeholder option.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            voices: Vec::new(),
            selected: 0,
        }
    }

    /// Number of options, including the placeholder.
    pub fn option_count(&self) -> usize {
        self.voices.len() + 1
    }

    pub fn is_populated(&self) -> bool {
        self.option_count() > 1
    }

    /// Append voices to the selector.
    ///
    /// Only takes effect while the placeholder is the single option, so
    /// repeated calls never duplicate entries. Returns whether voices
    /// were added.
    pub fn populate(&mut self, voices: Vec<Voice>) -> bool {
        if self.option_count() != 1 || voices.is_empty() {
            return false;
        }
        self.voices = voices;
        true
    }

    /// Option labels in display order.
    pub fn labels(&self) -> Vec<String> {
        std::iter::once(self.placeholder.clone())
            .chain(self.voices.iter().map(Voice::label))
            .collect()
    }

    /// Select option `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.option_count() {
            self.selected = index;
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The selected voice, or `None` for the placeholder.
    pub fn selected(&self) -> Option<&Voice> {
        self.selected
            .checked_sub(1)
            .and_then(|i| self.voices.get(i))
    }

    /// Find a voice by name. The last match wins when names repeat.
    pub fn find_by_name(&self, name: &str) -> Option<&Voice> {
        self.voices.iter().rev().find(|v| v.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_voices() -> Vec<Voice> {
        vec![
            Voice::new("Alex", "en-US", true),
            Voice::new("Amelie", "fr-CA", false),
        ]
    }

    #[test]
    fn test_label() {
        assert_eq!(Voice::new("Alex", "en-US", true).label(), "Alex (en-US) -- DEFAULT");
        assert_eq!(Voice::new("Amelie", "fr-CA", false).label(), "Amelie (fr-CA)");
    }

    #[test]
    fn test_populate_only_once() {
        let mut list = VoiceList::new("Select voice");
        assert_eq!(list.option_count(), 1);
        assert!(list.populate(sample_voices()));
        assert_eq!(list.option_count(), 3);

        assert!(!list.populate(sample_voices()));
        assert_eq!(list.option_count(), 3);
    }

    #[test]
    fn test_empty_registry_leaves_placeholder() {
        let mut list = VoiceList::new("Select voice");
        assert!(!list.populate(Vec::new()));
        assert!(!list.is_populated());
        assert_eq!(list.labels(), vec!["Select voice".to_string()]);
    }

    #[test]
    fn test_selection() {
        let mut list = VoiceList::new("Select voice");
        list.populate(sample_voices());
        assert!(list.selected().is_none());

        list.select(2);
        assert_eq!(list.selected().map(|v| v.name.as_str()), Some("Amelie"));

        list.select(99);
        assert_eq!(list.selected_index(), 2);

        list.select(0);
        assert!(list.selected().is_none());
    }

    #[test]
    fn test_find_by_name_last_match_wins() {
        let mut list = VoiceList::new("Select voice");
        list.populate(vec![
            Voice::new("Kim", "en-GB", false),
            Voice::new("Kim", "ko-KR", false),
        ]);
        assert_eq!(list.find_by_name("Kim").map(|v| v.lang.as_str()), Some("ko-KR"));
        assert!(list.find_by_name("Nobody").is_none());
    }
}
