/// Modal types for value entry and messages.
use breakeven_core::ParamField;

/// What a confirmed modal should do with its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    /// Set a parameter from text typed in display units
    EditField(ParamField),
}

#[derive(Debug, Default)]
pub enum ModalState {
    #[default]
    None,
    TextInput(TextInputModal),
    Message(MessageModal),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::None)
    }
}

/// Single-line text entry. `cursor_pos` counts characters, not bytes.
#[derive(Debug)]
pub struct TextInputModal {
    pub title: String,
    pub prompt: String,
    pub value: String,
    pub cursor_pos: usize,
    pub action: ModalAction,
}

impl TextInputModal {
    pub fn new(title: &str, prompt: &str, default_value: &str, action: ModalAction) -> Self {
        let value = default_value.to_string();
        let cursor_pos = value.chars().count();
        Self {
            title: title.to_string(),
            prompt: prompt.to_string(),
            value,
            cursor_pos,
            action,
        }
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor_pos);
        self.value.insert(at, c);
        self.cursor_pos += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let at = self.byte_index(self.cursor_pos);
            self.value.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.char_len() {
            let at = self.byte_index(self.cursor_pos);
            self.value.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.char_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.char_len();
    }
}

#[derive(Debug)]
pub struct MessageModal {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl MessageModal {
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: false,
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modal(value: &str) -> TextInputModal {
        TextInputModal::new("t", "p", value, ModalAction::EditField(ParamField::UnitGp))
    }

    #[test]
    fn test_cursor_starts_at_end() {
        assert_eq!(modal("55").cursor_pos, 2);
    }

    #[test]
    fn test_editing_in_the_middle() {
        let mut m = modal("15");
        m.move_cursor_left();
        m.insert_char('2');
        assert_eq!(m.value, "125");
        m.backspace();
        assert_eq!(m.value, "15");
        m.move_cursor_home();
        m.delete();
        assert_eq!(m.value, "5");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut m = modal("€5");
        m.move_cursor_home();
        m.move_cursor_right();
        m.insert_char('1');
        assert_eq!(m.value, "€15");
        m.move_cursor_home();
        m.delete();
        assert_eq!(m.value, "15");
        m.move_cursor_end();
        assert_eq!(m.cursor_pos, 2);
    }
}
