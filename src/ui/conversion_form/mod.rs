use iced_core::Length;
use iced_native::widget::{button, Button, Column, Row, Text};

use crate::calc::{convert, CalcError, CalcResult, ConversionResult, InvalidInput, TimeInput};
use crate::ui::focus_handler::{focus_next, focus_previous};
use crate::ui::message::Field;
use crate::ui::number_input::NumberInput;
use crate::ui::util::{h_space, header, text, v_space};
use crate::ui::{style, Message, QElement};


/// State of the conversion form: the raw text of the four inputs and the
/// two result lines of the last successful calculation.
pub struct ConversionForm {
    tele_hours: NumberInput,
    tele_minutes: NumberInput,
    work_hours: NumberInput,
    work_minutes: NumberInput,
    calculate_button: button::State,
    clear_button: button::State,
    decimal_line: String,
    breakdown_line: String,
}

impl ConversionForm {
    pub fn new(workday: TimeInput) -> Box<Self> {
        Box::new(ConversionForm {
            tele_hours: NumberInput::focused(""),
            tele_minutes: NumberInput::new(""),
            work_hours: NumberInput::new(workday.hours()),
            work_minutes: NumberInput::new(workday.minutes()),
            calculate_button: button::State::new(),
            clear_button: button::State::new(),
            decimal_line: String::new(),
            breakdown_line: String::new(),
        })
    }

    #[cfg(test)]
    pub fn field(&self, field: Field) -> &NumberInput {
        match field {
            Field::TeleHours => &self.tele_hours,
            Field::TeleMinutes => &self.tele_minutes,
            Field::WorkHours => &self.work_hours,
            Field::WorkMinutes => &self.work_minutes,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut NumberInput {
        match field {
            Field::TeleHours => &mut self.tele_hours,
            Field::TeleMinutes => &mut self.tele_minutes,
            Field::WorkHours => &mut self.work_hours,
            Field::WorkMinutes => &mut self.work_minutes,
        }
    }

    pub fn decimal_line(&self) -> &str {
        &self.decimal_line
    }

    pub fn breakdown_line(&self) -> &str {
        &self.breakdown_line
    }

    /// Converts the current input text. Fields causing an error are flagged.
    pub fn calculate(&mut self) -> CalcResult<ConversionResult> {
        let th = self.tele_hours.value();
        let tm = self.tele_minutes.value();
        let wh = self.work_hours.value();
        let wm = self.work_minutes.value();

        let _span = tracing::debug_span!("calculate").entered();
        let result = (|| convert(th?, tm?, wh?, wm?))();

        match &result {
            Err(CalcError::InvalidInput(InvalidInput::MinutesOutOfRange)) => {
                for field in Field::ALL.into_iter().filter(|f| f.is_minutes()) {
                    let input = self.field_mut(field);
                    input.error = !matches!(input.value(), Ok(m) if m < 60);
                }
            }
            Err(CalcError::InvalidInput(InvalidInput::ZeroWorkday)) => {
                for field in Field::ALL.into_iter().filter(|f| f.is_workday()) {
                    self.field_mut(field).error = true;
                }
            }
            _ => (),
        }

        result
    }

    pub fn clear(&mut self) {
        for field in Field::ALL {
            self.field_mut(field).clear();
        }
        self.decimal_line.clear();
        self.breakdown_line.clear();
    }

    fn show_result(&mut self, result: &ConversionResult) {
        self.decimal_line = result.decimal_line();
        self.breakdown_line = result.breakdown_line();
    }

    pub fn view(&mut self) -> QElement {
        let calculate = Button::new(
            &mut self.calculate_button,
            Text::new("Calcular").size(style::FONT_SIZE),
        )
        .style(style::ActionButton)
        .padding(style::BUTTON_PADDING)
        .width(Length::Fill)
        .on_press(Message::Calculate);

        let clear = Button::new(
            &mut self.clear_button,
            Text::new("Limpiar").size(style::FONT_SIZE),
        )
        .style(style::ActionButton)
        .padding(style::BUTTON_PADDING)
        .width(Length::Fill)
        .on_press(Message::Clear);

        let tele_row = Row::with_children(vec![
            self.tele_hours
                .show("Horas:", |s| Message::Input(Field::TeleHours, s)),
            h_space(style::DSPACE),
            self.tele_minutes
                .show("Minutos:", |s| Message::Input(Field::TeleMinutes, s)),
        ]);

        let work_row = Row::with_children(vec![
            self.work_hours
                .show("Horas:", |s| Message::Input(Field::WorkHours, s)),
            h_space(style::DSPACE),
            self.work_minutes
                .show("Minutos:", |s| Message::Input(Field::WorkMinutes, s)),
        ]);

        Column::with_children(vec![
            header("Teletrabajo (horas y minutos):"),
            v_space(style::SPACE),
            tele_row.into(),
            v_space(style::DSPACE),
            header("Jornada laboral (horas y minutos):"),
            v_space(style::SPACE),
            work_row.into(),
            v_space(style::DSPACE),
            Row::with_children(vec![calculate.into(), h_space(style::DSPACE), clear.into()])
                .into(),
            v_space(style::DSPACE),
            header("Resultado:"),
            v_space(style::SPACE),
            text(&self.decimal_line),
            v_space(style::SPACE),
            text(&self.breakdown_line),
        ])
        .into()
    }

    pub fn update(&mut self, msg: Message) -> Option<Message> {
        match msg {
            Message::Input(field, input) => {
                self.field_mut(field).set_text(input);
                None
            }
            Message::Calculate => match self.calculate() {
                Ok(result) => {
                    self.show_result(&result);
                    Some(Message::Calculated {
                        workday: TimeInput::from_total_minutes(result.work_total_minutes),
                    })
                }
                Err(e) => Some(Message::ShowError(e)),
            },
            Message::Clear => {
                self.clear();
                None
            }
            Message::Next => {
                focus_next(&mut self.focus_order());
                None
            }
            Message::Previous => {
                focus_previous(&mut self.focus_order());
                None
            }
            _ => None,
        }
    }

    fn focus_order(&mut self) -> [&mut iced_native::widget::text_input::State; 4] {
        [
            &mut self.tele_hours.input,
            &mut self.tele_minutes.input,
            &mut self.work_hours.input,
            &mut self.work_minutes.input,
        ]
    }
}
