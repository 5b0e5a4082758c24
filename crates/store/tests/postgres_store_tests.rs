use plexdi_store::{CommissionStore, PgCommissionStore, StoreError};
use plexdi_types::{CommissionStatus, NewCommission};
use sqlx::postgres::PgPoolOptions;

/// Connect to a disposable test database, if one is configured
///
/// Only `TEST_DATABASE_URL` is honoured since the test truncates the table.
async fn maybe_store() -> Option<PgCommissionStore> {
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .ok()?;

    let store = PgCommissionStore::from_pool(pool).await.ok()?;
    sqlx::query("TRUNCATE TABLE commissions RESTART IDENTITY")
        .execute(store.pool())
        .await
        .ok()?;
    Some(store)
}

#[tokio::test]
async fn test_postgres_commission_lifecycle() {
    let Some(store) = maybe_store().await else {
        eprintln!("Skipping test_postgres_commission_lifecycle: TEST_DATABASE_URL is not set");
        return;
    };

    assert_eq!(store.fetch(999).await, Err(StoreError::NotFound(999)));
    assert_eq!(
        store
            .update_status(999, &CommissionStatus::Completed)
            .await,
        Err(StoreError::NotFound(999))
    );

    let created = store
        .create(
            NewCommission::new("Ana", "ana@example.com", "logo")
                .with_discord("ana#0001")
                .with_details("flat, two colours"),
        )
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.status, CommissionStatus::Queued);
    assert_eq!(created.details, "flat, two colours");

    let second = store
        .create(NewCommission::new("Ben", "ben@example.com", "banner"))
        .await
        .unwrap();
    assert!(second.id > created.id);

    let listed = store.list().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, created.id);

    let updated = store
        .update_status(created.id, &CommissionStatus::InProgress)
        .await
        .unwrap();
    assert_eq!(updated.status, CommissionStatus::InProgress);
    assert_eq!(updated.created_at, created.created_at);

    let custom = store
        .update_status(created.id, &CommissionStatus::from("on_hold"))
        .await
        .unwrap();
    assert_eq!(custom.status.as_str(), "on_hold");

    store.delete(created.id).await.unwrap();
    assert_eq!(
        store.fetch(created.id).await,
        Err(StoreError::NotFound(created.id))
    );
    assert_eq!(
        store.delete(created.id).await,
        Err(StoreError::NotFound(created.id))
    );
}
