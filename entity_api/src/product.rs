use sea_orm::{entity::prelude::*, ActiveValue::Set, ConnectionTrait};

use super::error::Error;
use entity::products::{ActiveModel, Column, Entity, Model};
use entity::Id;
use log::*;

pub async fn create(db: &impl ConnectionTrait, product_model: Model) -> Result<Model, Error> {
    debug!("New Product Model to be inserted: {product_model:?}");

    let active_model: ActiveModel = ActiveModel {
        id: Set(product_model.id),
        name: Set(product_model.name),
        price: Set(product_model.price),
    };

    Ok(active_model.insert(db).await?)
}

/// Overwrites name and price of the product row matching `model.id`.
/// Returns the number of rows touched, which is zero when no such row exists.
pub async fn update(db: &impl ConnectionTrait, model: Model) -> Result<u64, Error> {
    debug!("Product Model to be updated: {model:?}");

    let active_model = ActiveModel {
        name: Set(model.name),
        price: Set(model.price),
        ..Default::default()
    };

    let result = Entity::update_many()
        .set(active_model)
        .filter(Column::Id.eq(model.id.as_str()))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        warn!("No product with id {} to update", model.id);
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

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use crate::error::EntityApiErrorKind;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[tokio::test]
    async fn create_returns_the_inserted_product_model() -> Result<(), Error> {
        let product_model = Model {
            id: "prod-123".to_owned(),
            name: "Chocolate".to_owned(),
            price: 5.0,
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![product_model.clone()]])
            .into_connection();

        let product = create(&db, product_model.clone()).await?;

        assert_eq!(product, product_model);

        Ok(())
    }

    #[tokio::test]
    async fn update_returns_rows_affected() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let rows_affected = update(
            &db,
            Model {
                id: "prod-123".to_owned(),
                name: "Dark Chocolate".to_owned(),
                price: 6.0,
            },
        )
        .await?;

        assert_eq!(rows_affected, 1);

        Ok(())
    }

    #[tokio::test]
    async fn find_all_returns_every_product() -> Result<(), Error> {
        let products = vec![
            Model {
                id: "prod-123".to_owned(),
                name: "Chocolate".to_owned(),
                price: 5.0,
            },
            Model {
                id: "prod-456".to_owned(),
                name: "Candy".to_owned(),
                price: 2.0,
            },
        ];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![products.clone()])
            .into_connection();

        assert_eq!(find_all(&db).await?, products);

        Ok(())
    }

    #[tokio::test]
    async fn find_by_id_returns_record_not_found_for_a_missing_product() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let result = find_by_id(&db, "prod-123").await;

        assert_eq!(
            result.unwrap_err().error_kind,
            EntityApiErrorKind::RecordNotFound
        );
    }
}
