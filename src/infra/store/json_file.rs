//! JSON-file-backed bill store.
//!
//! Bills live as a single JSON array in one file. Good enough for a local
//! single-user setup; a missing file reads as an empty store.

use crate::domain::{Bill, BillError};
use crate::infra::store::BillStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use uuid::Uuid;

pub struct JsonFileBillStore {
    path: PathBuf,
}

impl JsonFileBillStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    async fn read_all(&self) -> Result<Vec<Bill>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No store file at {}, listing empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read bill store {}", self.path.display()));
            }
        };
        serde_json::from_str(&contents)
            .with_context(|| format!("Malformed bill store {}", self.path.display()))
    }

    async fn write_all(&self, bills: &[Bill]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let contents = serde_json::to_string_pretty(bills)?;
        tokio::fs::write(&self.path, contents)
            .await
            .with_context(|| format!("Failed to write bill store {}", self.path.display()))
    }
}

#[async_trait]
impl BillStore for JsonFileBillStore {
    async fn list(&self) -> Result<Vec<Bill>> {
        self.read_all().await
    }

    async fn create(&self, mut bill: Bill) -> Result<Bill> {
        let mut bills = self.read_all().await?;
        bill.id = Uuid::new_v4().to_string();
        bills.push(bill.clone());
        self.write_all(&bills).await?;
        log::info!("Created bill {} in {}", bill.id, self.path.display());
        Ok(bill)
    }

    async fn update(&self, bill: Bill) -> Result<Bill> {
        let mut bills = self.read_all().await?;
        let slot = bills
            .iter_mut()
            .find(|stored| stored.id == bill.id)
            .ok_or_else(|| BillError::NotFound(bill.id.clone()))?;
        *slot = bill.clone();
        self.write_all(&bills).await?;
        Ok(bill)
    }
}
