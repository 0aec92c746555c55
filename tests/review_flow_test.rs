//! Review flow tests: generate, review, export

use datalex::config::{DatalexConfig, StoreConfig};
use datalex::dictionary::Dictionary;
use datalex::domain::{
    ColumnMetadata, EntrySource, ReviewAction, ReviewDecision, ReviewSubmission, TableContext,
};
use datalex::generator::GenerationEngine;
use datalex::store::ReviewStore;
use std::sync::Arc;
use tempfile::TempDir;

fn store_config(dir: &TempDir) -> StoreConfig {
    StoreConfig {
        reviews_path: dir.path().join("reviews.jsonl"),
        dictionary_path: dir.path().join("dictionary.jsonl"),
        samples_path: None,
    }
}

fn decision(name: &str, action: ReviewAction, edited: Option<&str>) -> ReviewDecision {
    ReviewDecision {
        column_name: name.to_string(),
        action,
        edited_description: edited.map(String::from),
    }
}

#[tokio::test]
async fn generated_payload_flows_into_dictionary_export() {
    let dir = TempDir::new().unwrap();
    let engine = GenerationEngine::from_config(
        &DatalexConfig::default(),
        Arc::new(Dictionary::builtin().unwrap()),
    )
    .unwrap();

    let ctx = TableContext::new("customer_account")
        .with_column(
            ColumnMetadata::new("acct_open_dt")
                .with_data_type("date")
                .with_nullable(false),
        )
        .with_column(ColumnMetadata::new("customer_email"))
        .with_column(ColumnMetadata::new("zzqq1"));
    let payload = engine.generate_table(&ctx).await.unwrap();

    let submission = ReviewSubmission {
        table_name: ctx.table_name.clone(),
        reviewer: "reviewer@bank.example".to_string(),
        decisions: vec![
            decision("acct_open_dt", ReviewAction::Approved, None),
            decision(
                "customer_email",
                ReviewAction::Edited,
                Some("Customer email used for digital notifications."),
            ),
            decision("zzqq1", ReviewAction::Rejected, None),
        ],
        generated_columns: payload.columns.clone(),
    };

    let mut store = ReviewStore::new(&store_config(&dir));
    let summary = store.save(&submission).unwrap();
    assert_eq!(summary.approved, 1);
    assert_eq!(summary.edited, 1);
    assert_eq!(summary.rejected, 1);

    // Rejected columns never reach the dictionary
    let entries = store.read_dictionary().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.column_name != "zzqq1"));

    let edited = entries
        .iter()
        .find(|e| e.column_name == "customer_email")
        .unwrap();
    assert_eq!(
        edited.description,
        "Customer email used for digital notifications."
    );
    assert_eq!(edited.source, EntrySource::Edited);
    // PII categories recorded from generation time
    assert!(!edited.pii_categories.is_empty());

    let mut buffer = Vec::new();
    let count = store.export_dictionary_csv(&mut buffer).unwrap();
    assert_eq!(count, 2);
    let csv = String::from_utf8(buffer).unwrap();
    assert!(csv.contains("customer_email"));
    assert!(csv.contains("approved"));
    assert!(csv.contains("edited"));
}

#[tokio::test]
async fn review_log_preserves_submission_order() {
    let dir = TempDir::new().unwrap();
    let mut store = ReviewStore::new(&store_config(&dir));

    for table in ["alpha", "beta", "gamma"] {
        let submission = ReviewSubmission {
            table_name: table.to_string(),
            reviewer: "r@example.com".to_string(),
            decisions: vec![decision("c", ReviewAction::Approved, None)],
            generated_columns: Vec::new(),
        };
        store.save(&submission).unwrap();
    }

    let reviews = store.read_reviews().unwrap();
    let tables: Vec<&str> = reviews.iter().map(|r| r.table_name.as_str()).collect();
    assert_eq!(tables, vec!["alpha", "beta", "gamma"]);

    // No generated columns supplied, so nothing reached the dictionary
    assert!(store.read_dictionary().unwrap().is_empty());
}
