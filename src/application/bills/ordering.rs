use crate::domain::Bill;

/// Bills in display order: most recent first.
///
/// Compares the raw `YYYY-MM-DD` strings lexicographically, which matches
/// chronological order for well-formed dates. The sort is stable, so bills
/// sharing a date keep their relative order. Must run before display
/// formatting rewrites the dates.
pub fn bills_in_display_order(bills: &[Bill]) -> Vec<&Bill> {
    let mut sorted: Vec<_> = bills.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
