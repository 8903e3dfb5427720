use sea_orm::{entity::prelude::*, ActiveValue::Set, ConnectionTrait, QueryOrder};

use super::error::Error;
use entity::order_items;
use entity::orders::{ActiveModel, Column, Entity, Model};
use entity::Id;
use log::*;

pub async fn create(db: &impl ConnectionTrait, order_model: Model) -> Result<Model, Error> {
    debug!("New Order Model to be inserted: {order_model:?}");

    let active_model: ActiveModel = ActiveModel {
        id: Set(order_model.id),
        customer_id: Set(order_model.customer_id),
        total: Set(order_model.total),
    };

    Ok(active_model.insert(db).await?)
}

/// Overwrites `customer_id` and `total` of the order row matching `model.id`.
/// Items are not touched here, see `order_item::set_items`.
pub async fn update(db: &impl ConnectionTrait, model: Model) -> Result<u64, Error> {
    debug!("Order Model to be updated: {model:?}");

    let active_model = ActiveModel {
        customer_id: Set(model.customer_id),
        total: Set(model.total),
        ..Default::default()
    };

    let result = Entity::update_many()
        .set(active_model)
        .filter(Column::Id.eq(model.id.as_str()))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        warn!("No order with id {} to update", model.id);
    }

    Ok(result.rows_affected)
}

/// Loads an order together with its item rows, in item position order.
pub async fn find_by_id_with_items(
    db: &impl ConnectionTrait,
    id: &str,
) -> Result<(Model, Vec<order_items::Model>), Error> {
    let results = Entity::find_by_id(Id::from(id))
        .find_with_related(order_items::Entity)
        .order_by_asc(order_items::Column::Position)
        .all(db)
        .await?;

    results.into_iter().next().ok_or_else(Error::not_found)
}

/// Loads every order with its item rows in a single query.
pub async fn find_all_with_items(
    db: &impl ConnectionTrait,
) -> Result<Vec<(Model, Vec<order_items::Model>)>, Error> {
    Ok(Entity::find()
        .find_with_related(order_items::Entity)
        .order_by_asc(order_items::Column::Position)
        .all(db)
        .await?)
}
