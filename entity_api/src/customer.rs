use sea_orm::{entity::prelude::*, ActiveValue::Set, ConnectionTrait};

use super::error::Error;
use entity::customers::{ActiveModel, Column, Entity, Model};
use entity::Id;
use log::*;

pub async fn create(db: &impl ConnectionTrait, customer_model: Model) -> Result<Model, Error> {
    debug!("New Customer Model to be inserted: {customer_model:?}");

    let active_model: ActiveModel = ActiveModel {
        id: Set(customer_model.id),
        name: Set(customer_model.name),
        street: Set(customer_model.street),
        number: Set(customer_model.number),
        zipcode: Set(customer_model.zipcode),
        city: Set(customer_model.city),
        active: Set(customer_model.active),
        reward_points: Set(customer_model.reward_points),
    };

    Ok(active_model.insert(db).await?)
}

/// Overwrites every non-key column of the customer row matching `model.id`.
/// Returns the number of rows touched, which is zero when no such row exists.
pub async fn update(db: &impl ConnectionTrait, model: Model) -> Result<u64, Error> {
    debug!("Customer Model to be updated: {model:?}");

    let active_model = ActiveModel {
        name: Set(model.name),
        street: Set(model.street),
        number: Set(model.number),
        zipcode: Set(model.zipcode),
        city: Set(model.city),
        active: Set(model.active),
        reward_points: Set(model.reward_points),
        ..Default::default()
    };

    let result = Entity::update_many()
        .set(active_model)
        .filter(Column::Id.eq(model.id.as_str()))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        warn!("No customer with id {} to update", model.id);
    }

    Ok(result.rows_affected)
}

pub async fn find_by_id(db: &impl ConnectionTrait, id: &str) -> Result<Model, Error> {
    Entity::find_by_id(Id::from(id))
        .one(db)
        .await?
        .ok_or_else(Error::not_found)
}

pub async fn find_all(db: &impl ConnectionTrait) -> Result<Vec<Model>, Error> {
    Ok(Entity::find().all(db).await?)
}
