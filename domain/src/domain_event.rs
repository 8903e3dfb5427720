//! Builders for the domain events raised by the storefront entities.
//!
//! Entities never dispatch anything themselves. Code that changes an entity
//! builds the matching event here and hands it to an `EventDispatcher`.

use crate::customer::Customer;
use crate::error::Error;
use crate::product::Product;
use events::{DomainEvent, EventPayload};

pub fn customer_created(customer: &Customer) -> Result<DomainEvent, Error> {
    Ok(DomainEvent::new(EventPayload::CustomerCreated {
        customer: serde_json::to_value(customer)?,
    }))
}

/// Fails with a validation error if the customer has no address.
pub fn customer_address_changed(customer: &Customer) -> Result<DomainEvent, Error> {
    let address = customer
        .address()
        .ok_or_else(|| Error::validation("Customer has no address"))?;

    Ok(DomainEvent::new(EventPayload::CustomerChangeAddress {
        customer_id: customer.id().to_owned(),
        customer_name: customer.name().to_owned(),
        address: serde_json::to_value(address)?,
    }))
}

pub fn product_created(product: &Product) -> Result<DomainEvent, Error> {
    Ok(DomainEvent::new(EventPayload::ProductCreated {
        product: serde_json::to_value(product)?,
    }))
}
