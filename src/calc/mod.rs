//! Conversion of remote-work time into workday equivalents.
//!
//! Everything in here is pure: no UI state, no settings, no IO. The desktop form
//! and the command line both go through [`convert_text`] or [`convert`].

use std::num::IntErrorKind;
use std::str::FromStr;

pub use error::{CalcError, CalcResult, InvalidInput};
pub use format::format_decimal_days;

mod error;
mod format;

pub const MINUTES_PER_HOUR: u64 = 60;

/// Hours and minutes as entered by the user. `minutes` is always below 60.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct TimeInput {
    hours: u64,
    minutes: u64,
}

impl TimeInput {
    pub fn new(hours: u64, minutes: u64) -> Result<Self, InvalidInput> {
        if minutes >= MINUTES_PER_HOUR {
            Err(InvalidInput::MinutesOutOfRange)
        } else {
            Ok(TimeInput { hours, minutes })
        }
    }

    pub fn hours(&self) -> u64 {
        self.hours
    }

    pub fn minutes(&self) -> u64 {
        self.minutes
    }

    pub fn total_minutes(&self) -> Result<u64, InvalidInput> {
        self.hours
            .checked_mul(MINUTES_PER_HOUR)
            .and_then(|m| m.checked_add(self.minutes))
            .ok_or_else(|| InvalidInput::TooLarge(format!("{} h", self.hours)))
    }

    /// Splits a minute count into hours and minutes.
    pub fn from_total_minutes(total: u64) -> Self {
        TimeInput {
            hours: total / MINUTES_PER_HOUR,
            minutes: total % MINUTES_PER_HOUR,
        }
    }
}

/// Outcome of a single conversion.
///
/// `decimal_days` keeps the full precision quotient, rounding to four places
/// only happens in [`ConversionResult::decimal_line`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConversionResult {
    pub decimal_days: f64,
    pub whole_days: u64,
    pub remainder_hours: u64,
    pub remainder_minutes: u64,
    pub tele_total_minutes: u64,
    pub work_total_minutes: u64,
}

/// Parses the content of a single numeric field.
///
/// Surrounding whitespace is ignored and an empty field counts as zero.
pub fn parse_non_negative_int(text: &str) -> Result<u64, InvalidInput> {
    let s = text.trim();
    if s.is_empty() {
        return Ok(0);
    }

    match i128::from_str(s) {
        Ok(n) if n < 0 => Err(InvalidInput::Negative(s.to_string())),
        Ok(n) => u64::try_from(n).map_err(|_| InvalidInput::TooLarge(s.to_string())),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Err(InvalidInput::TooLarge(s.to_string())),
            IntErrorKind::NegOverflow => Err(InvalidInput::Negative(s.to_string())),
            _ => Err(InvalidInput::NotAnInteger(s.to_string())),
        },
    }
}

/// Parses the four form fields and converts them. The first invalid field wins.
pub fn convert_text(
    tele_hours: &str,
    tele_minutes: &str,
    work_hours: &str,
    work_minutes: &str,
) -> CalcResult<ConversionResult> {
    let th = parse_non_negative_int(tele_hours)?;
    let tm = parse_non_negative_int(tele_minutes)?;
    let wh = parse_non_negative_int(work_hours)?;
    let wm = parse_non_negative_int(work_minutes)?;

    convert(th, tm, wh, wm)
}

pub fn convert(
    tele_hours: u64,
    tele_minutes: u64,
    work_hours: u64,
    work_minutes: u64,
) -> CalcResult<ConversionResult> {
    let tele = TimeInput::new(tele_hours, tele_minutes)?;
    let work = TimeInput::new(work_hours, work_minutes)?;
    convert_time(tele, work)
}

pub fn convert_time(tele: TimeInput, work: TimeInput) -> CalcResult<ConversionResult> {
    let tele_total_minutes = tele.total_minutes()?;
    let work_total_minutes = work.total_minutes()?;
    if work_total_minutes == 0 {
        return Err(InvalidInput::ZeroWorkday.into());
    }

    let decimal_days = tele_total_minutes as f64 / work_total_minutes as f64;
    if !decimal_days.is_finite() {
        return Err(CalcError::Unexpected(format!(
            "{} / {} is not a finite number",
            tele_total_minutes, work_total_minutes
        )));
    }

    let whole = decimal_days.trunc();
    let remainder = round_minutes((decimal_days - whole) * work_total_minutes as f64);

    log::debug!(
        "{} min / {} min = {} days (remainder {} min)",
        tele_total_minutes,
        work_total_minutes,
        decimal_days,
        remainder
    );

    Ok(ConversionResult {
        decimal_days,
        whole_days: whole as u64,
        remainder_hours: remainder / MINUTES_PER_HOUR,
        remainder_minutes: remainder % MINUTES_PER_HOUR,
        tele_total_minutes,
        work_total_minutes,
    })
}

/// Rounds a fractional minute count, ties go to the even neighbour.
pub fn round_minutes(minutes: f64) -> u64 {
    minutes.max(0.0).round_ties_even() as u64
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::Rng;

    #[test]
    fn parse_empty_is_zero() {
        assert_eq!(parse_non_negative_int(""), Ok(0));
        assert_eq!(parse_non_negative_int("   "), Ok(0));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(parse_non_negative_int("  12 "), Ok(12));
        assert_eq!(parse_non_negative_int("\t7\n"), Ok(7));
        assert_eq!(parse_non_negative_int("+3"), Ok(3));
        assert_eq!(parse_non_negative_int("-0"), Ok(0));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            parse_non_negative_int("-1"),
            Err(InvalidInput::Negative("-1".into()))
        );
        assert_eq!(
            parse_non_negative_int("abc"),
            Err(InvalidInput::NotAnInteger("abc".into()))
        );
        assert_eq!(
            parse_non_negative_int("1.5"),
            Err(InvalidInput::NotAnInteger("1.5".into()))
        );
        assert_eq!(
            parse_non_negative_int("1 2"),
            Err(InvalidInput::NotAnInteger("1 2".into()))
        );
        assert!(matches!(
            parse_non_negative_int("99999999999999999999999999999999999999999"),
            Err(InvalidInput::TooLarge(_))
        ));
        assert!(matches!(
            parse_non_negative_int("18446744073709551616"),
            Err(InvalidInput::TooLarge(_))
        ));
        assert!(matches!(
            parse_non_negative_int("-99999999999999999999999999999999999999999"),
            Err(InvalidInput::Negative(_))
        ));
    }

    #[test]
    fn one_full_workday() {
        let r = convert(7, 45, 7, 45).unwrap();
        assert_eq!(r.decimal_days, 1.0);
        assert_eq!(r.whole_days, 1);
        assert_eq!(r.remainder_hours, 0);
        assert_eq!(r.remainder_minutes, 0);
        assert_eq!(r.tele_total_minutes, 465);
        assert_eq!(r.work_total_minutes, 465);
    }

    #[test]
    fn no_remote_work() {
        for (wh, wm) in [(7, 45), (8, 0), (0, 1), (100, 59)] {
            let r = convert(0, 0, wh, wm).unwrap();
            assert_eq!(r.decimal_days, 0.0);
            assert_eq!(r.whole_days, 0);
            assert_eq!(r.remainder_hours, 0);
            assert_eq!(r.remainder_minutes, 0);
            assert_eq!(r.work_total_minutes, wh * 60 + wm);
        }
    }

    #[test]
    fn fractional_days() {
        let r = convert(20, 0, 8, 0).unwrap();
        assert_eq!(r.decimal_days, 2.5);
        assert_eq!(r.whole_days, 2);
        assert_eq!(r.remainder_hours, 4);
        assert_eq!(r.remainder_minutes, 0);

        let r = convert(10, 30, 7, 45).unwrap();
        assert_eq!(r.whole_days, 1);
        assert_eq!(r.remainder_hours, 2);
        assert_eq!(r.remainder_minutes, 45);
    }

    #[test]
    fn zero_workday_is_rejected() {
        assert_eq!(
            convert(5, 0, 0, 0),
            Err(CalcError::InvalidInput(InvalidInput::ZeroWorkday))
        );
        assert_eq!(
            convert_text("", "", "", ""),
            Err(CalcError::InvalidInput(InvalidInput::ZeroWorkday))
        );
    }

    #[test]
    fn minutes_out_of_range_win_over_zero_workday() {
        assert_eq!(
            convert(1, 60, 0, 0),
            Err(CalcError::InvalidInput(InvalidInput::MinutesOutOfRange))
        );
        assert_eq!(
            convert(1, 0, 7, 60),
            Err(CalcError::InvalidInput(InvalidInput::MinutesOutOfRange))
        );
    }

    #[test]
    fn overflowing_hours_are_rejected() {
        assert!(matches!(
            convert(u64::MAX, 0, 8, 0),
            Err(CalcError::InvalidInput(InvalidInput::TooLarge(_)))
        ));
    }

    #[test]
    fn convert_text_reports_first_invalid_field() {
        assert_eq!(
            convert_text("x", "-1", "", ""),
            Err(CalcError::InvalidInput(InvalidInput::NotAnInteger("x".into())))
        );
        assert_eq!(
            convert_text("1", "-1", "y", ""),
            Err(CalcError::InvalidInput(InvalidInput::Negative("-1".into())))
        );
        assert_eq!(convert_text(" 7", "45 ", "7", "45"), convert(7, 45, 7, 45));
    }

    #[test]
    fn ties_round_to_even() {
        assert_eq!(round_minutes(2.5), 2);
        assert_eq!(round_minutes(3.5), 4);
        assert_eq!(round_minutes(2.4999), 2);
        assert_eq!(round_minutes(59.6), 60);
        assert_eq!(round_minutes(-0.0), 0);
    }

    #[test]
    fn conversion_is_idempotent() {
        let a = convert(123, 17, 7, 45).unwrap();
        let b = convert(123, 17, 7, 45).unwrap();
        assert_eq!(a.decimal_days.to_bits(), b.decimal_days.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn breakdown_adds_up_to_input() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let th = rng.gen_range(0..100_000u64);
            let tm = rng.gen_range(0..60u64);
            let wh = rng.gen_range(0..24u64);
            let wm = rng.gen_range((if wh == 0 { 1 } else { 0 })..60u64);

            let r = convert(th, tm, wh, wm).unwrap();
            assert!(r.remainder_minutes < 60);

            let w = wh * 60 + wm;
            let t = th * 60 + tm;
            let rebuilt = r.whole_days * w + r.remainder_hours * 60 + r.remainder_minutes;
            assert!(
                rebuilt.abs_diff(t) <= 1,
                "{}:{} / {}:{} rebuilt to {} instead of {}",
                th,
                tm,
                wh,
                wm,
                rebuilt,
                t
            );
        }
    }

    #[test]
    fn time_input_split() {
        let t = TimeInput::from_total_minutes(465);
        assert_eq!((t.hours(), t.minutes()), (7, 45));
        assert_eq!(t.total_minutes(), Ok(465));
        assert_eq!(
            TimeInput::new(1, 60),
            Err(InvalidInput::MinutesOutOfRange)
        );
    }
}
