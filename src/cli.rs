use std::io::Write;

use crate::calc::convert_text;
use crate::conf::{InitialAction, Settings};

/// Runs a headless conversion and terminates the process with its exit code.
pub fn print_conversion(action: &InitialAction, settings: &Settings) -> ! {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let code = write_conversion(action, settings, &mut stdout.lock(), &mut stderr.lock());
    std::process::exit(code)
}

/// Writes both result lines to `out`, or the error to `err`. Returns the exit code.
pub fn write_conversion(
    action: &InitialAction,
    settings: &Settings,
    out: &mut impl Write,
    err: &mut impl Write,
) -> i32 {
    let (tele_hours, tele_minutes) = match action {
        InitialAction::Calc {
            tele_hours,
            tele_minutes,
            ..
        } => (tele_hours.as_str(), tele_minutes.as_str()),
        InitialAction::Show => {
            let _ = writeln!(err, "Nothing to calculate");
            return 2;
        }
    };
    let (work_hours, work_minutes) = action.workday_fields(settings.workday_input());

    let written = match convert_text(tele_hours, tele_minutes, &work_hours, &work_minutes) {
        Ok(result) => writeln!(out, "{}", result).map(|_| 0),
        Err(e) => {
            log::warn!("Conversion failed: {:?}", e);
            writeln!(err, "{}: {}", e.title(), e).map(|_| 1)
        }
    };

    written.unwrap_or_else(|e| {
        log::error!("Failed to write result: {}", e);
        2
    })
}
