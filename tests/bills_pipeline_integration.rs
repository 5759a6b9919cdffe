use billed::application::bills::{bills_in_display_order, get_bills, with_display_dates};
use billed::domain::{Bill, BillStatus};
use billed::infra::store::{BillStore, JsonFileBillStore};

const FIXTURE: &str = r#"[
    {
        "id": "47qAXb6fIm2zOKkLzMro",
        "vat": "80",
        "fileUrl": "https://test.storage.tld/justificatif-1.jpg",
        "status": "pending",
        "type": "Hôtel et logement",
        "commentary": "séminaire billed",
        "name": "encore",
        "fileName": "justificatif-1.jpg",
        "date": "2004-04-04",
        "amount": 400,
        "commentAdmin": "ok",
        "email": "a@a",
        "pct": 20
    },
    {
        "id": "BeKy5Mo4jkmdfPGYpTxZ",
        "vat": "",
        "amount": 100,
        "name": "test1",
        "fileName": "facture.jpeg",
        "commentary": "plop",
        "pct": 20,
        "type": "Transports",
        "email": "a@a",
        "fileUrl": "https://test.storage.tld/justificatif-2.jpeg",
        "date": "2001-01-01",
        "status": "refused",
        "commentAdmin": "en fait non"
    }
]"#;

fn fixture_store(dir: &tempfile::TempDir) -> JsonFileBillStore {
    let path = dir.path().join("bills.json");
    std::fs::write(&path, FIXTURE).unwrap();
    JsonFileBillStore::new(path)
}

#[tokio::test]
async fn test_listing_pipeline_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let store = fixture_store(&dir);

    let bills = get_bills(Some(&store)).await.unwrap();
    assert_eq!(bills.len(), 2);
    assert_eq!(bills[0].date, "4 Avr. 04");
    assert_eq!(bills[1].date, "1 Jan. 01");
    assert_eq!(bills[0].bill_type.as_deref(), Some("Hôtel et logement"));
    assert_eq!(bills[1].status, Some(BillStatus::Refused));
}

#[tokio::test]
async fn test_display_order_is_anti_chronological() {
    let dir = tempfile::tempdir().unwrap();
    let store = fixture_store(&dir);

    // Renderers sort raw records before formatting the dates.
    let raw = store.list().await.unwrap();
    let ordered: Vec<Bill> = bills_in_display_order(&raw).into_iter().cloned().collect();
    let displayed = with_display_dates(ordered);

    assert_eq!(displayed[0].name.as_deref(), Some("encore"));
    assert_eq!(displayed[0].date, "4 Avr. 04");
    assert_eq!(displayed[1].name.as_deref(), Some("test1"));
    assert_eq!(displayed[1].date, "1 Jan. 01");
}

#[tokio::test]
async fn test_missing_store_file_lists_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileBillStore::new(dir.path().join("absent.json"));
    let bills = get_bills(Some(&store)).await.unwrap();
    assert!(bills.is_empty());
}

#[tokio::test]
async fn test_malformed_record_survives_listing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bills.json");
    std::fs::write(&path, r#"[{"date": "invalid-date-format"}]"#).unwrap();
    let store = JsonFileBillStore::new(path);

    let bills = get_bills(Some(&store)).await.unwrap();
    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0].date, "invalid-date-format");
}

#[tokio::test]
async fn test_create_assigns_id_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileBillStore::new(dir.path().join("bills.json"));

    let created = store
        .create(Bill {
            name: Some("taxi".to_string()),
            date: "2023-05-10".to_string(),
            amount: Some(42.5),
            status: Some(BillStatus::Pending),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(!created.id.is_empty());

    let listed = store.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].name.as_deref(), Some("taxi"));
}

#[tokio::test]
async fn test_update_unknown_bill_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = fixture_store(&dir);

    let err = store
        .update(Bill {
            id: "does-not-exist".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(err.to_string().contains("does-not-exist"));
}

#[tokio::test]
async fn test_update_replaces_matching_bill() {
    let dir = tempfile::tempdir().unwrap();
    let store = fixture_store(&dir);

    let mut bills = store.list().await.unwrap();
    let mut target = bills.remove(0);
    target.status = Some(BillStatus::Accepted);
    target.comment_admin = Some("validé".to_string());
    store.update(target.clone()).await.unwrap();

    let listed = store.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    let updated = listed.iter().find(|b| b.id == target.id).unwrap();
    assert_eq!(updated.status, Some(BillStatus::Accepted));
    assert_eq!(updated.comment_admin.as_deref(), Some("validé"));
}
