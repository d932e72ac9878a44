use crate::calc::{CalcError, TimeInput};

#[derive(Debug, Clone)]
pub enum Message {
    Exit,
    Next,
    Previous,
    /// Enter key or the "Calcular" button.
    Calculate,
    /// Ctrl+L or the "Limpiar" button.
    Clear,
    Input(Field, String),
    Calculated { workday: TimeInput },
    ShowError(CalcError),
    DismissNotice,
}

/// The four inputs of the conversion form, in focus order.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Field {
    TeleHours,
    TeleMinutes,
    WorkHours,
    WorkMinutes,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::TeleHours,
        Field::TeleMinutes,
        Field::WorkHours,
        Field::WorkMinutes,
    ];

    pub fn is_minutes(self) -> bool {
        matches!(self, Field::TeleMinutes | Field::WorkMinutes)
    }

    pub fn is_workday(self) -> bool {
        matches!(self, Field::WorkHours | Field::WorkMinutes)
    }
}
