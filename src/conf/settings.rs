use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::calc::TimeInput;

/// 7 h 45 min
pub const DEFAULT_WORKDAY_MINUTES: i64 = 7 * 60 + 45;

/// Largest workday, in minutes, a `chrono::Duration` can hold.
pub const MAX_WORKDAY_MINUTES: u64 = (i64::MAX / 60_000) as u64;

#[derive(Debug, Clone)]
pub struct Settings {
    pub settings_location: Option<PathBuf>,
    pub workday: chrono::Duration,
    pub write_settings: bool,
}

pub type SettingsRef = Rc<ArcSwap<Settings>>;

pub fn into_settings_ref(settings: Settings) -> SettingsRef {
    Rc::new(ArcSwap::new(Arc::new(settings)))
}

/// Replaces the shared settings with a modified copy.
pub fn update_settings<F>(settings: &SettingsRef, f: F)
where
    F: FnOnce(&mut Settings),
{
    let mut updating = (**settings.load()).clone();
    f(&mut updating);
    settings.store(Arc::new(updating))
}

impl Settings {
    pub fn workday_input(&self) -> TimeInput {
        TimeInput::from_total_minutes(self.workday.num_minutes().max(0) as u64)
    }

    #[cfg(test)]
    pub fn with_workday(mut self, workday: TimeInput) -> Self {
        self.workday = workday_duration(workday).unwrap();
        self
    }
}

/// `None` when the workday does not fit into a `chrono::Duration`.
pub fn workday_duration(workday: TimeInput) -> Option<chrono::Duration> {
    workday
        .total_minutes()
        .ok()
        .filter(|minutes| *minutes <= MAX_WORKDAY_MINUTES)
        .map(|minutes| chrono::Duration::minutes(minutes as i64))
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            settings_location: None,
            workday: chrono::Duration::minutes(DEFAULT_WORKDAY_MINUTES),
            write_settings: false,
        }
    }
}

#[derive(Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SettingsSer {
    pub workday_hours: u64,
    pub workday_minutes: u64,
}

impl SettingsSer {
    pub fn from_settings(settings: &Settings) -> SettingsSer {
        let workday = settings.workday_input();
        SettingsSer {
            workday_hours: workday.hours(),
            workday_minutes: workday.minutes(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_workday() {
        let settings = Settings::default();
        assert_eq!(settings.workday_input(), TimeInput::new(7, 45).unwrap());
        assert_eq!(
            SettingsSer::from_settings(&settings),
            SettingsSer {
                workday_hours: 7,
                workday_minutes: 45
            }
        );
    }

    #[test]
    fn serialized_shape() {
        let settings = Settings::default().with_workday(TimeInput::new(8, 0).unwrap());
        let json = serde_json::to_string(&SettingsSer::from_settings(&settings)).unwrap();
        assert_eq!(json, r#"{"workday_hours":8,"workday_minutes":0}"#);
    }

    #[test]
    fn huge_workday_has_no_duration() {
        let largest = TimeInput::from_total_minutes(MAX_WORKDAY_MINUTES);
        assert_eq!(
            workday_duration(largest).map(|d| d.num_minutes() as u64),
            Some(MAX_WORKDAY_MINUTES)
        );

        let too_long = TimeInput::from_total_minutes(MAX_WORKDAY_MINUTES + 1);
        assert_eq!(workday_duration(too_long), None);
        assert_eq!(
            workday_duration(TimeInput::new(10_000_000_000_000, 0).unwrap()),
            None
        );
        assert_eq!(workday_duration(TimeInput::new(u64::MAX, 0).unwrap()), None);
    }

    #[test]
    fn update_shared_settings() {
        let settings = into_settings_ref(Settings::default());
        let before = settings.load_full();
        update_settings(&settings, |s| s.workday = chrono::Duration::minutes(360));

        assert_eq!(before.workday_input(), TimeInput::new(7, 45).unwrap());
        assert_eq!(
            settings.load().workday_input(),
            TimeInput::new(6, 0).unwrap()
        );
    }
}
