use super::Repository;
use crate::error::Error;
use crate::order::Order;
use crate::order_item::OrderItem;
use async_trait::async_trait;
use entity_api::{order, order_item, order_items, orders};
use log::*;
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::sync::Arc;

/// Persists `Order` aggregates across the `orders` and `order_items` tables.
///
/// The repository, not the database, owns the item rows: they are written
/// with their order and replaced wholesale whenever the order is updated.
pub struct OrderRepository {
    db: Arc<DatabaseConnection>,
}

impl OrderRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<Order> for OrderRepository {
    async fn create(&self, entity: &Order) -> Result<(), Error> {
        debug!(
            "Creating order {} with {} item(s)",
            entity.id(),
            entity.items().len()
        );

        let txn = self.db.begin().await?;

        order::create(&txn, to_row(entity)).await?;
        for item in item_rows(entity) {
            order_item::create(&txn, item).await?;
        }

        txn.commit().await?;

        Ok(())
    }

    /// Replaces the stored items with the order's current items, then updates
    /// the order's customer and total. Item rows are not diffed.
    async fn update(&self, entity: &Order) -> Result<(), Error> {
        debug!(
            "Updating order {} with {} item(s)",
            entity.id(),
            entity.items().len()
        );

        let txn = self.db.begin().await?;

        order_item::set_items(&txn, entity.id(), item_rows(entity)).await?;
        order::update(&txn, to_row(entity)).await?;

        txn.commit().await?;

        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Order, Error> {
        let (row, items) = order::find_by_id_with_items(&*self.db, id).await?;
        from_rows(row, items)
    }

    async fn find_all(&self) -> Result<Vec<Order>, Error> {
        order::find_all_with_items(&*self.db)
            .await?
            .into_iter()
            .map(|(row, items)| from_rows(row, items))
            .collect()
    }
}

fn to_row(entity: &Order) -> orders::Model {
    orders::Model {
        id: entity.id().to_owned(),
        customer_id: entity.customer_id().to_owned(),
        total: entity.total(),
    }
}

fn item_rows(entity: &Order) -> Vec<order_items::Model> {
    entity
        .items()
        .iter()
        .zip(0..)
        .map(|(item, position)| order_items::Model {
            id: item.id().to_owned(),
            order_id: entity.id().to_owned(),
            product_id: item.product_id().to_owned(),
            name: item.name().to_owned(),
            price: item.price(),
            quantity: item.quantity(),
            position,
        })
        .collect()
}

fn from_rows(row: orders::Model, items: Vec<order_items::Model>) -> Result<Order, Error> {
    let items = items
        .into_iter()
        .map(|item| OrderItem::new(item.id, item.name, item.price, item.product_id, item.quantity))
        .collect::<Result<Vec<_>, _>>()?;

    Order::new(row.id, row.customer_id, items)
}
