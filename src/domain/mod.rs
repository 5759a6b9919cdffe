//! Domain types for the Billed application
//! Defines the core data structures and business objects used throughout the application.

pub mod bill;
pub mod error;

pub use bill::*;
pub use error::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_bill_status_display_parse() {
        assert_eq!(BillStatus::Pending.to_string(), "pending");
        assert_eq!(BillStatus::from_str("ACCEPTED").unwrap(), BillStatus::Accepted);
        assert_eq!(BillStatus::from_str("refused").unwrap(), BillStatus::Refused);
        assert!(BillStatus::from_str("invalid").is_err());
    }

    #[test]
    fn test_bill_deserializes_partial_record() {
        let bill: Bill = serde_json::from_str(r#"{"date": "invalid-date-format"}"#).unwrap();
        assert_eq!(bill.date, "invalid-date-format");
        assert!(bill.id.is_empty());
        assert!(bill.status.is_none());
        assert!(bill.amount.is_none());
    }

    #[test]
    fn test_bill_wire_field_names() {
        let bill: Bill = serde_json::from_str(
            r#"{
                "id": "47qAXb6fIm2zOKkLzMro",
                "vat": "80",
                "fileUrl": "https://test.storage.tld/justificatif.jpg",
                "status": "pending",
                "type": "Hôtel et logement",
                "commentary": "séminaire billed",
                "name": "encore",
                "fileName": "justificatif.jpg",
                "date": "2004-04-04",
                "amount": 400,
                "commentAdmin": "ok",
                "email": "a@a",
                "pct": 20
            }"#,
        )
        .unwrap();
        assert_eq!(bill.bill_type.as_deref(), Some("Hôtel et logement"));
        assert_eq!(bill.file_name.as_deref(), Some("justificatif.jpg"));
        assert_eq!(bill.status, Some(BillStatus::Pending));
        assert_eq!(bill.amount, Some(400.0));

        let json = serde_json::to_value(&bill).unwrap();
        assert!(json.get("fileUrl").is_some());
        assert!(json.get("commentAdmin").is_some());
    }
}
