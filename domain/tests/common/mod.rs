//! Shared helpers for repository integration tests.
#![allow(dead_code)]

use domain::{Address, Customer, Product};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;

/// Opens a fresh in-memory SQLite database with the storefront schema applied.
pub async fn setup_database() -> Arc<DatabaseConnection> {
    // A single pooled connection, otherwise each connection gets its own empty database
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("failed to open in-memory sqlite database");
    Migrator::up(&db, None)
        .await
        .expect("failed to apply migrations");

    Arc::new(db)
}

pub fn customer(id: &str) -> Customer {
    let mut customer = Customer::new(id, "John Doe").unwrap();
    customer.change_address(Address::new("street-1", 31, "zipCode-1", "state-1").unwrap());
    customer
}

pub fn product(id: &str, name: &str, price: f64) -> Product {
    Product::new(id, name, price).unwrap()
}
