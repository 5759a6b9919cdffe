use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a bill
pub type BillId = String;

/// An expense claim submitted by an employee.
///
/// Records come from the remote store and pass through the listing
/// pipeline unmodified except for the `date` field, which is rewritten
/// for display. Partial records occur in practice, so every field other
/// than `date` defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Store-assigned identifier. Empty until the store has seen the bill.
    #[serde(default)]
    pub id: BillId,
    /// Claim date, `YYYY-MM-DD` as entered; may be malformed.
    #[serde(default)]
    pub date: String,
    /// Short label entered by the employee.
    #[serde(default)]
    pub name: Option<String>,
    /// Expense category (e.g. "Transports", "Hôtel et logement").
    #[serde(default, rename = "type")]
    pub bill_type: Option<String>,
    /// Claimed amount in euros.
    #[serde(default)]
    pub amount: Option<f64>,
    /// Review status; absent on drafts.
    #[serde(default)]
    pub status: Option<BillStatus>,
    /// Free-form note from the employee.
    #[serde(default)]
    pub commentary: Option<String>,
    /// Reviewer note, set on accept/refuse.
    #[serde(default)]
    pub comment_admin: Option<String>,
    /// Submitting employee's email.
    #[serde(default)]
    pub email: Option<String>,
    /// VAT amount, kept as entered.
    #[serde(default)]
    pub vat: Option<String>,
    /// VAT percentage.
    #[serde(default)]
    pub pct: Option<u32>,
    /// URL of the uploaded justification file.
    #[serde(default)]
    pub file_url: Option<String>,
    /// Original name of the uploaded justification file.
    #[serde(default)]
    pub file_name: Option<String>,
}

/// Review status of a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Accepted => write!(f, "accepted"),
            Self::Refused => write!(f, "refused"),
        }
    }
}

impl FromStr for BillStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "refused" => Ok(Self::Refused),
            other => Err(format!("Unknown bill status: {other}")),
        }
    }
}
