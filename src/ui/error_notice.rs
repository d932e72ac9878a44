use iced_core::Length;
use iced_native::widget::{button, Button, Column, Container, Row, Text};

use crate::calc::CalcError;
use crate::ui::util::{h_space, header, text, v_space};
use crate::ui::{style, Message, QElement};

/// Blocking notice shown after a failed calculation. The form underneath
/// keeps its text while the notice is open.
#[derive(Debug)]
pub struct ErrorNotice {
    pub title: &'static str,
    pub message: String,
    ok_button: button::State,
}

impl ErrorNotice {
    pub fn for_error(error: &CalcError) -> Self {
        ErrorNotice {
            title: error.title(),
            message: error.to_string(),
            ok_button: button::State::new(),
        }
    }

    pub fn view(&mut self) -> QElement {
        let ok = Button::new(&mut self.ok_button, Text::new("OK").size(style::FONT_SIZE))
            .style(style::ActionButton)
            .padding(style::BUTTON_PADDING)
            .on_press(Message::DismissNotice);

        let content = Column::with_children(vec![
            header(self.title),
            v_space(style::DSPACE),
            Text::new(self.message.clone())
                .size(style::FONT_SIZE)
                .color(style::error_text_color())
                .into(),
            v_space(style::DSPACE),
            Row::with_children(vec![h_space(Length::Fill), ok.into()]).into(),
            v_space(style::SPACE),
            text("Enter / Esc"),
        ]);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(style::WINDOW_PADDING)
            .style(style::NoticeStyle)
            .into()
    }

    /// Any confirmation closes the notice, everything else is swallowed.
    pub fn update(&mut self, msg: Message) -> Option<Message> {
        match msg {
            Message::DismissNotice | Message::Calculate | Message::Exit => {
                Some(Message::DismissNotice)
            }
            _ => None,
        }
    }
}
