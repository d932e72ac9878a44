pub use main_action::{InitialAction, MainAction};
pub use settings::{
    into_settings_ref, update_settings, workday_duration, Settings, SettingsRef, SettingsSer,
    DEFAULT_WORKDAY_MINUTES, MAX_WORKDAY_MINUTES,
};

mod main_action;
mod settings;
