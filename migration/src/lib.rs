pub use sea_orm_migration::prelude::*;

mod m20261016_000001_create_storefront_tables;
mod m20261016_000002_add_order_items_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_create_storefront_tables::Migration),
            Box::new(m20261016_000002_add_order_items_indexes::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::{ConnectOptions, Database, DatabaseConnection};

    async fn sqlite_connection() -> DatabaseConnection {
        // A single connection keeps the whole test on one in-memory database
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        Database::connect(opt).await.unwrap()
    }

    #[tokio::test]
    async fn up_creates_every_storefront_table() -> Result<(), DbErr> {
        let db = sqlite_connection().await;

        Migrator::up(&db, None).await?;

        let manager = SchemaManager::new(&db);
        for table in ["customers", "products", "orders", "order_items"] {
            assert!(manager.has_table(table).await?, "{table} should exist");
        }
        assert!(
            manager
                .has_index("order_items", "order_items_order_id_idx")
                .await?
        );
        assert!(manager.has_column("order_items", "position").await?);

        Ok(())
    }

    #[tokio::test]
    async fn down_drops_every_storefront_table() -> Result<(), DbErr> {
        let db = sqlite_connection().await;

        Migrator::up(&db, None).await?;
        Migrator::down(&db, None).await?;

        let manager = SchemaManager::new(&db);
        for table in ["customers", "products", "orders", "order_items"] {
            assert!(!manager.has_table(table).await?, "{table} should be gone");
        }

        Ok(())
    }
}
