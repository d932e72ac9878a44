use crate::calc::TimeInput;
use crate::conf::SettingsRef;

/// Flags handed to the conversion form.
#[derive(Debug)]
pub struct MainAction {
    pub settings: SettingsRef,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum InitialAction {
    /// Open the conversion form.
    Show,
    /// Convert once and print the result to stdout.
    Calc {
        tele_hours: String,
        tele_minutes: String,
        workday: Option<(String, String)>,
    },
}

impl InitialAction {
    /// Workday fields of a `Calc` action, falling back to `default`.
    pub fn workday_fields(&self, default: TimeInput) -> (String, String) {
        match self {
            InitialAction::Calc {
                workday: Some(fields),
                ..
            } => fields.clone(),
            _ => (default.hours().to_string(), default.minutes().to_string()),
        }
    }
}
