use std::fmt::{Display, Formatter};

use crate::calc::ConversionResult;

pub const DECIMAL_PLACES: usize = 4;

/// From here on the day count is printed in exponent form.
const EXPONENT_FROM: f64 = 1e16;

/// Rounds to four places and drops trailing zeros, keeping at least one
/// fractional digit: `1.0`, `0.5`, `1.2345`. Huge counts use the shortest
/// exponent form with a signed exponent: `1.8e+16`.
pub fn format_decimal_days(days: f64) -> String {
    if days.abs() >= EXPONENT_FROM {
        return format!("{:e}", days).replacen('e', "e+", 1);
    }
    let mut s = format!("{:.*}", DECIMAL_PLACES, days);
    if let Some(dot) = s.find('.') {
        let significant = s.trim_end_matches('0').len();
        s.truncate(significant.max(dot + 2));
    }
    s
}

impl ConversionResult {
    /// First result line, e.g. `1.0 días`.
    pub fn decimal_line(&self) -> String {
        format!("{} días", format_decimal_days(self.decimal_days))
    }

    /// Second result line with the days, hours and minutes breakdown.
    pub fn breakdown_line(&self) -> String {
        format!(
            "{} días, {} h, {} min (equivalente a {} min / {} min)",
            self.whole_days,
            self.remainder_hours,
            self.remainder_minutes,
            self.tele_total_minutes,
            self.work_total_minutes
        )
    }
}

impl Display for ConversionResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.decimal_line())?;
        write!(f, "{}", self.breakdown_line())
    }
}
