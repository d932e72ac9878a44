use iced_core::Length;
use iced_winit::alignment::Horizontal;
use iced_native::widget::{Space, Text};

use crate::ui::{style, QElement};

pub fn text<'a>(t: &str) -> QElement<'a> {
    Text::new(t.to_string()).size(style::FONT_SIZE).into()
}

pub fn header<'a>(t: &str) -> QElement<'a> {
    Text::new(t.to_string()).size(style::HEADER_SIZE).into()
}

pub fn label<'a>(t: &str) -> QElement<'a> {
    Text::new(t.to_string())
        .size(style::FONT_SIZE)
        .width(style::LABEL_WIDTH)
        .horizontal_alignment(Horizontal::Right)
        .into()
}

pub fn h_space<'a>(width: Length) -> QElement<'a> {
    Space::with_width(width).into()
}

pub fn v_space<'a>(height: Length) -> QElement<'a> {
    Space::with_height(height).into()
}
