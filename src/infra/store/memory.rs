//! In-memory bill store.

use crate::domain::{Bill, BillError};
use crate::infra::store::BillStore;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

/// A seedable store holding bills in memory. Backs tests and the
/// no-backend degenerate case.
#[derive(Default)]
pub struct MemoryBillStore {
    bills: Mutex<Vec<Bill>>,
}

impl MemoryBillStore {
    pub fn new(bills: Vec<Bill>) -> Self {
        Self {
            bills: Mutex::new(bills),
        }
    }
}

#[async_trait]
impl BillStore for MemoryBillStore {
    async fn list(&self) -> Result<Vec<Bill>> {
        Ok(self.bills.lock().unwrap().clone())
    }

    async fn create(&self, mut bill: Bill) -> Result<Bill> {
        bill.id = Uuid::new_v4().to_string();
        self.bills.lock().unwrap().push(bill.clone());
        Ok(bill)
    }

    async fn update(&self, bill: Bill) -> Result<Bill> {
        let mut bills = self.bills.lock().unwrap();
        let slot = bills
            .iter_mut()
            .find(|stored| stored.id == bill.id)
            .ok_or_else(|| BillError::NotFound(bill.id.clone()))?;
        *slot = bill.clone();
        Ok(bill)
    }
}
