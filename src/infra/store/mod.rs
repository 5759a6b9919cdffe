//! The bill store boundary.
//!
//! The store is the only network/storage collaborator of the listing
//! pipeline; everything behind `BillStore` (wire protocol, persistence)
//! is opaque to the application layer. Test doubles implement the same
//! trait.

use crate::domain::Bill;
use anyhow::Result;
use async_trait::async_trait;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileBillStore;
pub use memory::MemoryBillStore;

/// Remote-data-access collaborator for bills.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// All bills known to the store, in store order.
    async fn list(&self) -> Result<Vec<Bill>>;

    /// Persist a new bill. The store assigns the id; the stored record is returned.
    async fn create(&self, bill: Bill) -> Result<Bill>;

    /// Replace the stored bill with the same id.
    async fn update(&self, bill: Bill) -> Result<Bill>;
}
