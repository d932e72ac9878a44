use iced_native::widget::{text_input, Row, TextInput};

use crate::calc::{parse_non_negative_int, InvalidInput};
use crate::ui::util::{h_space, label};
use crate::ui::{style, Message, QElement, QRenderer};

/// A labeled text input holding the raw text of one numeric field.
pub struct NumberInput {
    pub text: String,
    pub input: text_input::State,
    pub error: bool,
}

impl NumberInput {
    pub fn new(text: impl ToString) -> Self {
        Self {
            text: text.to_string(),
            input: text_input::State::new(),
            error: false,
        }
    }

    pub fn focused(text: impl ToString) -> Self {
        Self {
            input: text_input::State::focused(),
            ..Self::new(text)
        }
    }

    pub fn show<F>(&mut self, label_text: &'static str, on_change: F) -> QElement
    where
        F: 'static + Fn(String) -> Message,
    {
        let mut result: Row<Message, QRenderer> = Row::new();
        result = result.push(label(label_text));
        result = result.push(h_space(style::SPACE));
        result = result.push(self.show_text_input(on_change));

        result.into()
    }

    fn show_text_input<F>(&mut self, on_change: F) -> TextInput<Message, QRenderer>
    where
        F: 'static + Fn(String) -> Message,
    {
        TextInput::new(&mut self.input, "0", &self.text, on_change)
            .padding(style::TEXT_INPUT_PADDING)
            .size(style::FONT_SIZE)
            .style(style::NumberStyle { error: self.error })
            .width(style::NUMBER_WIDTH)
    }

    #[cfg(test)]
    pub fn is_focused(&self) -> bool {
        self.input.is_focused()
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.error = false;
    }

    pub fn clear(&mut self) {
        self.set_text(String::new())
    }

    /// Parses the current text and flags the field when it is not usable.
    pub fn value(&mut self) -> Result<u64, InvalidInput> {
        let result = parse_non_negative_int(&self.text);
        self.error = result.is_err();
        result
    }
}
