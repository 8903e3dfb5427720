use super::Repository;
use crate::address::Address;
use crate::customer::Customer;
use crate::error::Error;
use async_trait::async_trait;
use entity_api::{customer, customers};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub struct CustomerRepository {
    db: Arc<DatabaseConnection>,
}

impl CustomerRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<Customer> for CustomerRepository {
    async fn create(&self, entity: &Customer) -> Result<(), Error> {
        customer::create(&*self.db, to_row(entity)).await?;
        Ok(())
    }

    /// Unconditional update by id: a customer that was never created is
    /// silently left absent.
    async fn update(&self, entity: &Customer) -> Result<(), Error> {
        customer::update(&*self.db, to_row(entity)).await?;
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Customer, Error> {
        from_row(customer::find_by_id(&*self.db, id).await?)
    }

    async fn find_all(&self) -> Result<Vec<Customer>, Error> {
        customer::find_all(&*self.db)
            .await?
            .into_iter()
            .map(from_row)
            .collect()
    }
}

fn to_row(entity: &Customer) -> customers::Model {
    let address = entity.address();

    customers::Model {
        id: entity.id().to_owned(),
        name: entity.name().to_owned(),
        street: address.map(|a| a.street().to_owned()),
        number: address.map(Address::number),
        zipcode: address.map(|a| a.zip().to_owned()),
        city: address.map(|a| a.city().to_owned()),
        active: entity.is_active(),
        reward_points: entity.reward_points(),
    }
}

/// Rebuilds a customer through its validating operations, so a row that
/// breaks an invariant (e.g. active without an address) surfaces as an error.
fn from_row(row: customers::Model) -> Result<Customer, Error> {
    let mut entity = Customer::new(row.id, row.name)?;

    match (row.street, row.number, row.zipcode, row.city) {
        (Some(street), Some(number), Some(zip), Some(city)) => {
            entity.change_address(Address::new(street, number, zip, city)?);
        }
        (None, None, None, None) => {}
        _ => {
            return Err(Error::validation(format!(
                "Customer {} has an incomplete address",
                entity.id()
            )));
        }
    }

    if row.active {
        entity.activate()?;
    }

    entity.add_reward_points(row.reward_points);

    Ok(entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainErrorKind;

    #[test]
    fn row_mapping_round_trips_a_customer_with_address() {
        let mut entity = Customer::new("customer-1", "Customer 1").unwrap();
        entity.change_address(Address::new("Street 1", 1, "Zip 1", "City 1").unwrap());
        entity.activate().unwrap();
        entity.add_reward_points(12.5);

        assert_eq!(from_row(to_row(&entity)).unwrap(), entity);
    }

    #[test]
    fn customer_without_address_maps_to_null_address_columns() {
        let entity = Customer::new("customer-1", "Customer 1").unwrap();

        let row = to_row(&entity);

        assert_eq!(row.street, None);
        assert_eq!(row.number, None);
        assert_eq!(row.zipcode, None);
        assert_eq!(row.city, None);
        assert_eq!(from_row(row).unwrap(), entity);
    }

    #[test]
    fn row_with_a_partial_address_is_rejected() {
        let row = customers::Model {
            id: "customer-1".to_owned(),
            name: "Customer 1".to_owned(),
            street: Some("Street 1".to_owned()),
            number: None,
            zipcode: Some("Zip 1".to_owned()),
            city: Some("City 1".to_owned()),
            active: false,
            reward_points: 0.0,
        };

        assert_eq!(
            from_row(row).unwrap_err().error_kind,
            DomainErrorKind::Validation("Customer customer-1 has an incomplete address".to_string())
        );
    }

    #[test]
    fn active_row_without_address_is_rejected() {
        let row = customers::Model {
            id: "customer-1".to_owned(),
            name: "Customer 1".to_owned(),
            street: None,
            number: None,
            zipcode: None,
            city: None,
            active: true,
            reward_points: 0.0,
        };

        assert!(from_row(row).is_err());
    }
}
