#![allow(dead_code)]

use oxide_rel_core::schema::{Column, ColumnType, Table};
use oxide_rel_sqlite::{SqliteAdapter, SqliteConfig};
use tracing_subscriber::filter::LevelFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .with_test_writer()
        .try_init();
}

pub async fn open_memory() -> SqliteAdapter {
    init_tracing();
    SqliteAdapter::open(&SqliteConfig::default())
        .await
        .unwrap_or_else(|e| panic!("Failed to open in-memory SQLite: {e}"))
}

pub fn users_table() -> Table {
    Table::create("users")
        .column(Column::new("id", ColumnType::Id).primary())
        .column(Column::new("email", ColumnType::String).required().unique())
        .column(
            Column::new("age", ColumnType::Int)
                .default_value(0)
                .options("CONSTRAINT age_positive CHECK (age >= 0)"),
        )
        .column(Column::new("active", ColumnType::Bool).default_value(true))
}

pub async fn open_with_users() -> SqliteAdapter {
    let adapter = open_memory().await;
    adapter
        .apply_table(&users_table())
        .await
        .unwrap_or_else(|e| panic!("Failed to create users: {e}"));
    adapter
}
