use super::Repository;
use crate::error::Error;
use crate::product::Product;
use async_trait::async_trait;
use entity_api::{product, products};
use log::*;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub struct ProductRepository {
    db: Arc<DatabaseConnection>,
}

impl ProductRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<Product> for ProductRepository {
    /// Any storage failure (duplicate id, lost connection, ...) is reported as
    /// the same generic "Error creating product" error, without a source.
    async fn create(&self, entity: &Product) -> Result<(), Error> {
        product::create(&*self.db, to_row(entity))
            .await
            .map_err(|err| {
                warn!("Failed to create product {}: {err}", entity.id());
                Error::other("Error creating product")
            })?;
        Ok(())
    }

    async fn update(&self, entity: &Product) -> Result<(), Error> {
        product::update(&*self.db, to_row(entity)).await?;
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Product, Error> {
        from_row(product::find_by_id(&*self.db, id).await?)
    }

    async fn find_all(&self) -> Result<Vec<Product>, Error> {
        product::find_all(&*self.db)
            .await?
            .into_iter()
            .map(from_row)
            .collect()
    }
}

fn to_row(entity: &Product) -> products::Model {
    products::Model {
        id: entity.id().to_owned(),
        name: entity.name().to_owned(),
        price: entity.price(),
    }
}

fn from_row(row: products::Model) -> Result<Product, Error> {
    Product::new(row.id, row.name, row.price)
}
