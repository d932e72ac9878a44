use std::str::FromStr;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::calc::TimeInput;

lazy_static! {
    static ref WORKDAY_HM: Regex =
        Regex::new(r"^(?P<hour>\d{1,4}):(?P<minute>\d{2})$").unwrap();
    static ref WORKDAY_UNITS: Regex =
        Regex::new(r"^(?:(?P<hour>\d{1,4})h)?\s*(?:(?P<minute>\d{1,2})m(?:in)?)?$").unwrap();
    static ref WORKDAY_MINUTES: Regex = Regex::new(r"^(?P<total>\d{1,6})$").unwrap();
}

/// Parses a workday length given on the command line.
///
/// Accepted: `7:45`, `7h45m`, `7h 45min`, `8h`, `45m` and a plain minute count
/// like `465`. Returns `None` for anything else, for minutes above 59 and for
/// a zero length workday.
pub fn parse_workday(input: &str) -> Option<TimeInput> {
    let input = input.trim();
    let parsed = if let Some(c) = WORKDAY_HM.captures(input) {
        TimeInput::new(number(&c, "hour")?, number(&c, "minute")?).ok()
    } else if let Some(c) = WORKDAY_MINUTES.captures(input) {
        Some(TimeInput::from_total_minutes(number(&c, "total")?))
    } else if let Some(c) = WORKDAY_UNITS.captures(input) {
        if c.name("hour").is_none() && c.name("minute").is_none() {
            return None;
        }
        let h = number(&c, "hour").unwrap_or(0);
        let m = number(&c, "minute").unwrap_or(0);
        TimeInput::new(h, m).ok()
    } else {
        None
    };

    parsed.filter(|t| t.total_minutes().map(|m| m > 0).unwrap_or(false))
}

pub fn format_workday(t: TimeInput) -> String {
    format!("{}:{:02}", t.hours(), t.minutes())
}

fn number(c: &Captures, name: &str) -> Option<u64> {
    c.name(name).and_then(|m| u64::from_str(m.as_str()).ok())
}
