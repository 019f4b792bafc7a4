// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Caption text.

/// The two caption lines drawn over the image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captions {
    pub top: String,
    pub bottom: String,
}

impl Captions {
    /// Create captions from the two lines.
    #[cfg(test)]
    pub fn new(top: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self { top: top.into(), bottom: bottom.into() }
    }

    /// Reset both lines to empty.
    pub fn clear(&mut self) {
        self.top.clear();
        self.bottom.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty()
    }

    /// Text spoken by read-aloud: top line, then bottom line.
    pub fn spoken_text(&self) -> String {
        match (self.top.is_empty(), self.bottom.is_empty()) {
            (false, false) => format!("{} {}", self.top, self.bottom),
            (false, true) => self.top.clone(),
            (true, false) => self.bottom.clone(),
            (true, true) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spoken_text() {
        assert_eq!(Captions::new("one does not", "simply").spoken_text(), "one does not simply");
        assert_eq!(Captions::new("top", "").spoken_text(), "top");
        assert_eq!(Captions::new("", "bottom").spoken_text(), "bottom");
        assert_eq!(Captions::default().spoken_text(), "");
    }

    #[test]
    fn test_clear() {
        let mut captions = Captions::new("a", "b");
        assert!(!captions.is_empty());
        captions.clear();
        assert!(captions.is_empty());
    }
}
