//! Retrieval of the bill list from a store, with per-record date formatting.

use crate::application::bills::format::format_date;
use crate::domain::Bill;
use crate::infra::store::BillStore;
use anyhow::Result;

/// Fetch all bills from the store and rewrite each `date` for display.
///
/// With no store attached this resolves to an empty list without any
/// store interaction. A store failure propagates unchanged; the caller
/// interprets it. A record whose date cannot be formatted keeps its raw
/// date string, so one malformed record never fails the whole listing.
pub async fn get_bills(store: Option<&dyn BillStore>) -> Result<Vec<Bill>> {
    let Some(store) = store else {
        return Ok(Vec::new());
    };
    let bills = store.list().await?;
    Ok(with_display_dates(bills))
}

/// Rewrite each bill's `date` to its display form, keeping the raw string
/// when formatting fails. Order and all other fields are preserved.
pub fn with_display_dates(bills: Vec<Bill>) -> Vec<Bill> {
    bills
        .into_iter()
        .map(|mut bill| {
            match format_date(&bill.date) {
                Ok(formatted) => bill.date = formatted,
                Err(err) => {
                    log::warn!("Keeping raw date for bill {:?}: {}", bill.id, err);
                }
            }
            bill
        })
        .collect()
}
