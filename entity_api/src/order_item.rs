//! Entity API for the order_items table.
//!
//! Order items have no lifecycle of their own: they are written and removed
//! together with their parent order.

use entity::order_items::{ActiveModel, Column, Entity, Model};
use sea_orm::{entity::prelude::*, ActiveValue::Set, ConnectionTrait};

use log::*;

use super::error::Error;

pub async fn create(db: &impl ConnectionTrait, order_item_model: Model) -> Result<Model, Error> {
    debug!("New Order Item Model to be inserted: {order_item_model:?}");

    let active_model = ActiveModel {
        id: Set(order_item_model.id),
        order_id: Set(order_item_model.order_id),
        product_id: Set(order_item_model.product_id),
        name: Set(order_item_model.name),
        price: Set(order_item_model.price),
        quantity: Set(order_item_model.quantity),
        position: Set(order_item_model.position),
    };

    Ok(active_model.insert(db).await?)
}

/// Deletes all items belonging to the given order.
///
/// # Errors
///
/// Returns `Error` if the database delete fails.
pub async fn delete_all_for_order(db: &impl ConnectionTrait, order_id: &str) -> Result<u64, Error> {
    debug!("Deleting all items for order_id={order_id}");

    let result = Entity::delete_many()
        .filter(Column::OrderId.eq(order_id))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}

/// Sets the items for an order, replacing any existing ones.
///
/// Deletes every existing item row of the order and inserts one row per
/// provided item, keeping each item's `position`. Nothing is diffed: item rows that are
/// present both before and after are deleted and re-created.
///
/// # Arguments
///
/// * `db` - Database connection (should be a transaction for atomicity)
/// * `order_id` - The order whose items are replaced
/// * `items` - The complete new item set; each `order_id` is overwritten with `order_id`
///
/// # Errors
///
/// Returns `Error` if any database operation fails.
pub async fn set_items(
    db: &impl ConnectionTrait,
    order_id: &str,
    items: Vec<Model>,
) -> Result<Vec<Model>, Error> {
    debug!(
        "Setting {} item(s) for order_id={order_id}",
        items.len()
    );

    delete_all_for_order(db, order_id).await?;

    let mut created_items = Vec::with_capacity(items.len());

    for item in items {
        let model = create(
            db,
            Model {
                order_id: order_id.to_owned(),
                ..item
            },
        )
        .await?;
        created_items.push(model);
    }

    Ok(created_items)
}
