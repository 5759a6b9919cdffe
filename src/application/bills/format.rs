//! Display formatting for bill fields.

use crate::domain::{BillStatus, FormatError};
use chrono::{Datelike, NaiveDate};

/// Three-letter French month abbreviations, indexed by zero-based month.
/// June and July share "Jui" in this short form.
const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Format a raw `YYYY-MM-DD` date for display, e.g. `"2004-04-04"` → `"4 Avr. 04"`.
///
/// Returns an error when the input does not parse as a calendar date, so
/// callers can decide on a fallback instead of receiving a garbage string.
pub fn format_date(raw: &str) -> Result<String, FormatError> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| FormatError::Unparseable(raw.to_string()))?;
    let month = MONTH_ABBREV[date.month0() as usize];
    Ok(format!(
        "{} {}. {:02}",
        date.day(),
        month,
        date.year().rem_euclid(100)
    ))
}

/// Display label for a bill status.
pub fn format_status(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refusé",
    }
}
