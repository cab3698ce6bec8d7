use crate::session::{Revelation, PROMPT};

/// In-memory answer panel.
///
/// Holds the string a UI would show: the prompt while the answer is hidden,
/// the answer's label once revealed.
pub struct TextPanel {
    text: String,
}

impl TextPanel {
    ///Create a panel showing the prompt.
    pub fn new() -> Self {
        TextPanel {
            text: PROMPT.to_owned(),
        }
    }

    ///Currently displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for TextPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Revelation for TextPanel {
    fn set_revealed_text(&mut self, text: &str) {
        self.text = text.to_owned();
    }

    fn reset_to_prompt(&mut self) {
        self.text = PROMPT.to_owned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_starts_hidden() {
        assert_eq!(TextPanel::new().text(), PROMPT);
    }

    #[test]
    fn reveal_then_hide() {
        let mut panel = TextPanel::new();
        panel.set_revealed_text("C3 D3");
        assert_eq!(panel.text(), "C3 D3");
        panel.reset_to_prompt();
        assert_eq!(panel.text(), PROMPT);
    }
}
