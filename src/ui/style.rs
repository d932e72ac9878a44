use iced_core::{Background, Color, Length, Vector};
use iced_native::widget::container::Style;
use iced_native::widget::{button, container, text_input};

pub const WINDOW_WIDTH: u32 = 460;
pub const WINDOW_HEIGHT: u32 = 330;
pub const WINDOW_PADDING: u16 = 12;
pub const SPACE_PX: u16 = 6;
pub const SPACE: Length = Length::Units(SPACE_PX);
pub const DSPACE: Length = Length::Units(2 * SPACE_PX);
pub const LABEL_WIDTH: Length = Length::Units(70);
pub const NUMBER_WIDTH: Length = Length::Units(70);
pub const FONT_SIZE: u16 = 18;
pub const HEADER_SIZE: u16 = 20;
pub const TEXT_INPUT_PADDING: u16 = 4;
pub const BUTTON_PADDING: [u16; 2] = [4, 10];

const MAIN_COLOR: Color = Color {
    r: 0.8,
    g: 0.8,
    b: 0.95,
    a: 1.0,
};

const TEXT_MAIN_COLOR: Color = Color {
    r: 0.16,
    g: 0.16,
    b: 0.19,
    a: 1.0,
};

const ERROR_COLOR: Color = Color {
    r: 0.8,
    g: 0.1,
    b: 0.1,
    a: 1.0,
};

pub struct NumberStyle {
    pub error: bool,
}

impl text_input::StyleSheet for NumberStyle {
    fn active(&self) -> text_input::Style {
        text_input::Style {
            background: Background::Color(Color::WHITE),
            border_radius: 2.0,
            border_width: 1.0,
            border_color: if self.error {
                ERROR_COLOR
            } else {
                Color::from_rgb(0.7, 0.7, 0.7)
            },
        }
    }

    fn focused(&self) -> text_input::Style {
        text_input::Style {
            border_width: 2.0,
            border_color: if self.error { ERROR_COLOR } else { MAIN_COLOR },
            ..self.active()
        }
    }

    fn placeholder_color(&self) -> Color {
        Color::from_rgb(0.7, 0.7, 0.7)
    }

    fn value_color(&self) -> Color {
        TEXT_MAIN_COLOR
    }

    fn selection_color(&self) -> Color {
        MAIN_COLOR
    }
}

pub struct ActionButton;

impl button::StyleSheet for ActionButton {
    fn active(&self) -> button::Style {
        button::Style {
            shadow_offset: Vector::new(0.0, 0.0),
            background: Some(Background::Color(MAIN_COLOR)),
            border_radius: 2.0,
            border_width: 1.0,
            border_color: MAIN_COLOR,
            text_color: TEXT_MAIN_COLOR,
        }
    }

    fn hovered(&self) -> button::Style {
        button::Style {
            border_color: TEXT_MAIN_COLOR,
            ..self.active()
        }
    }
}

pub struct NoticeStyle;

impl container::StyleSheet for NoticeStyle {
    fn style(&self) -> Style {
        Style {
            text_color: Some(TEXT_MAIN_COLOR),
            background: Some(Background::Color([1.0, 0.95, 0.95].into())),
            border_color: ERROR_COLOR,
            border_radius: 2.0,
            border_width: 2.0,
        }
    }
}

pub fn error_text_color() -> Color {
    ERROR_COLOR
}
