mod common;

use oxide_rel_core::query::{Delete, FilterQuery, Insert, InsertAll, OnConflict, Query, Update};
use oxide_rel_core::schema::{Column, ColumnType, Index, Key, Table};
use oxide_rel_core::{ConstraintKind, Error, Value};
use sqlx::Row;

#[tokio::test]
async fn test_insert_and_fetch() {
    let adapter = common::open_with_users().await;

    let id = adapter
        .insert(&Insert::into_table("users").set("email", "alice@example.com"))
        .await
        .unwrap();
    assert_eq!(id, 1);

    let rows = adapter
        .fetch_all(&Query::from("users").filter(FilterQuery::eq("id", id)))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get::<String, _>("email"), "alice@example.com");
    assert_eq!(rows[0].get::<i64, _>("age"), 0);
    assert!(rows[0].get::<bool, _>("active"));
}

#[tokio::test]
async fn test_unique_violation_is_classified() {
    let adapter = common::open_with_users().await;
    let insert = Insert::into_table("users").set("email", "dup@example.com");
    adapter.insert(&insert).await.unwrap();

    let err = adapter.insert(&insert).await.unwrap_err();
    let constraint = err.as_constraint().expect("expected a constraint error");
    assert_eq!(constraint.kind, ConstraintKind::Unique);
    assert_eq!(constraint.key, "users.email");
    assert!(constraint.source.code().is_some());
}

#[tokio::test]
async fn test_check_violation_is_classified() {
    let adapter = common::open_with_users().await;
    let err = adapter
        .insert(
            &Insert::into_table("users")
                .set("email", "young@example.com")
                .set("age", -1),
        )
        .await
        .unwrap_err();

    let constraint = err.as_constraint().expect("expected a constraint error");
    assert_eq!(constraint.kind, ConstraintKind::Check);
    assert_eq!(constraint.key, "age_positive");
}

#[tokio::test]
async fn test_not_null_violation_passes_through() {
    let adapter = common::open_with_users().await;
    let err = adapter
        .insert(&Insert::into_table("users").set("email", Value::Null))
        .await
        .unwrap_err();
    assert!(matches!(&err, Error::Driver(d) if d.message().starts_with("NOT NULL constraint failed")));
}

#[tokio::test]
async fn test_missing_table_passes_through() {
    let adapter = common::open_memory().await;
    let Err(err) = adapter.fetch_all(&Query::from("foo")).await else {
        panic!("expected missing table error");
    };
    assert!(matches!(&err, Error::Driver(d) if d.message() == "no such table: foo"));
}

#[tokio::test]
async fn test_insert_all_returns_every_id() {
    let adapter = common::open_with_users().await;
    adapter
        .insert(&Insert::into_table("users").set("email", "first@example.com"))
        .await
        .unwrap();

    let ids = adapter
        .insert_all(
            &InsertAll::into_table("users", &["email", "age"])
                .row(vec!["a@example.com".into(), 1.into()])
                .row(vec!["b@example.com".into(), 2.into()])
                .row(vec!["c@example.com".into(), 3.into()]),
        )
        .await
        .unwrap();
    assert_eq!(ids, vec![2, 3, 4]);

    let rows = adapter
        .fetch_all(&Query::from("users").select(&["id", "email"]).sort_asc("id"))
        .await
        .unwrap();
    let stored: Vec<(i64, String)> = rows
        .iter()
        .map(|row| (row.get("id"), row.get("email")))
        .collect();
    assert_eq!(stored[1], (2, "a@example.com".to_string()));
    assert_eq!(stored[3], (4, "c@example.com".to_string()));

    assert!(adapter
        .insert_all(&InsertAll::into_table("users", &["email"]))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_upsert_ignore() {
    let adapter = common::open_with_users().await;
    let insert = Insert::into_table("users")
        .set("email", "same@example.com")
        .on_conflict(OnConflict::ignore(&["email"]));
    adapter.insert(&insert).await.unwrap();
    adapter.insert(&insert).await.unwrap();

    let rows = adapter.fetch_all(&Query::from("users")).await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn test_update_and_delete_counts() {
    let adapter = common::open_with_users().await;
    for email in ["a@example.com", "b@example.com", "c@example.com"] {
        adapter
            .insert(&Insert::into_table("users").set("email", email).set("age", 20))
            .await
            .unwrap();
    }

    let updated = adapter
        .update(
            &Update::table("users")
                .inc("age", 1)
                .filter(FilterQuery::ne("email", "c@example.com")),
        )
        .await
        .unwrap();
    assert_eq!(updated, 2);

    let rows = adapter
        .fetch_all(&Query::from("users").filter(FilterQuery::eq("age", 21)))
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(adapter.update(&Update::table("users")).await.unwrap(), 0);

    let deleted = adapter
        .delete(&Delete::from("users").filter(FilterQuery::in_list("age", vec![21])))
        .await
        .unwrap();
    assert_eq!(deleted, 2);
    assert_eq!(adapter.delete(&Delete::from("users")).await.unwrap(), 1);
}

#[tokio::test]
async fn test_alter_table_applies_supported_changes() {
    let adapter = common::open_with_users().await;
    adapter
        .apply_table(
            &Table::alter("users")
                .column(Column::new("verified", ColumnType::Bool).default_value(false))
                .column(Column::rename("age", "years"))
                .key(Key::unique(&["verified"])),
        )
        .await
        .unwrap();

    adapter
        .insert(&Insert::into_table("users").set("email", "new@example.com"))
        .await
        .unwrap();
    let rows = adapter
        .fetch_all(&Query::from("users").select(&["verified", "years"]))
        .await
        .unwrap();
    assert!(!rows[0].get::<bool, _>("verified"));
    assert_eq!(rows[0].get::<i64, _>("years"), 0);
}

#[tokio::test]
async fn test_partial_unique_index() {
    let adapter = common::open_with_users().await;
    adapter
        .apply_table(
            &Table::create("sessions")
                .column(Column::new("id", ColumnType::Id).primary())
                .column(Column::new("token", ColumnType::String).required())
                .column(Column::new("revoked", ColumnType::Bool).default_value(false)),
        )
        .await
        .unwrap();
    adapter
        .apply_index(
            &Index::create("sessions", "idx_live_token", &["token"])
                .unique()
                .filter(FilterQuery::eq("revoked", false)),
        )
        .await
        .unwrap();

    let revoked = Insert::into_table("sessions")
        .set("token", "t")
        .set("revoked", true);
    adapter.insert(&revoked).await.unwrap();
    adapter.insert(&revoked).await.unwrap();

    let live = Insert::into_table("sessions").set("token", "t");
    adapter.insert(&live).await.unwrap();
    let err = adapter.insert(&live).await.unwrap_err();
    assert_eq!(err.as_constraint().unwrap().kind, ConstraintKind::Unique);
    assert_eq!(err.as_constraint().unwrap().key, "sessions.token");
}

#[tokio::test]
async fn test_drop_table() {
    let adapter = common::open_with_users().await;
    adapter.apply_table(&Table::drop("users")).await.unwrap();
    adapter
        .apply_table(&Table::drop("users").optional())
        .await
        .unwrap();
    assert!(adapter.fetch_all(&Query::from("users")).await.is_err());
    adapter.close().await;
}

#[tokio::test]
async fn test_fragment_does_not_widen_delete() {
    let adapter = common::open_with_users().await;
    for (email, age) in [("a@x", 1), ("b@x", 2)] {
        adapter
            .insert(&Insert::into_table("users").set("email", email).set("age", age))
            .await
            .unwrap();
    }

    let deleted = adapter
        .delete(&Delete::from("users").filter(FilterQuery::eq("email", "a@x").and(
            FilterQuery::fragment("age = ? OR age = ?", vec![Value::Int(2), Value::Int(3)]),
        )))
        .await
        .unwrap();
    assert_eq!(deleted, 0);

    let rows = adapter.fetch_all(&Query::from("users")).await.unwrap();
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn test_insert_all_rejects_row_longer_than_fields() {
    let adapter = common::open_with_users().await;
    let result = adapter
        .insert_all(
            &InsertAll::into_table("users", &["email"])
                .row(vec!["a@x".into(), 5.into()]),
        )
        .await;
    assert!(matches!(result, Err(Error::Driver(_))));

    let rows = adapter.fetch_all(&Query::from("users")).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_column_with_space_round_trips() {
    let adapter = common::open_memory().await;
    adapter
        .apply_table(&Table::create("people").column(Column::new("first name", ColumnType::Text)))
        .await
        .unwrap();
    adapter
        .insert(&Insert::into_table("people").set("first name", "Ada"))
        .await
        .unwrap();

    let rows = adapter
        .fetch_all(&Query::from("people").filter(FilterQuery::eq("first name", "Ada")))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get::<String, _>("first name"), "Ada");
}
