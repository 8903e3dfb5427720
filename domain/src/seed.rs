//! Sample data for a fresh database.

use crate::address::Address;
use crate::customer::Customer;
use crate::domain_event;
use crate::error::Error;
use crate::order_item::OrderItem;
use crate::order_service;
use crate::product::Product;
use crate::repository::{CustomerRepository, OrderRepository, ProductRepository, Repository};
use events::EventDispatcher;
use log::*;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Creates a customer, two products and one order, dispatching the
/// matching events through `dispatcher` as each entity is stored.
pub async fn seed_database(
    db: &Arc<DatabaseConnection>,
    dispatcher: &EventDispatcher,
) -> Result<(), Error> {
    let customer_repository = CustomerRepository::new(Arc::clone(db));
    let product_repository = ProductRepository::new(Arc::clone(db));
    let order_repository = OrderRepository::new(Arc::clone(db));

    let mut customer = Customer::new("customer-1", "John Doe")?;
    customer_repository.create(&customer).await?;
    dispatcher.notify(&domain_event::customer_created(&customer)?)?;

    customer.change_address(Address::new("Street 1", 31, "Zip 1", "City 1")?);
    customer.activate()?;
    customer_repository.update(&customer).await?;
    dispatcher.notify(&domain_event::customer_address_changed(&customer)?)?;

    let chocolate = Product::new("prod-123", "Chocolate", 5.0)?;
    let candy = Product::new("prod-456", "Candy", 2.0)?;
    for product in [&chocolate, &candy] {
        product_repository.create(product).await?;
        dispatcher.notify(&domain_event::product_created(product)?)?;
    }

    let order = order_service::place_order(
        &mut customer,
        "ord-123",
        vec![
            OrderItem::new("item-123", chocolate.name(), chocolate.price(), chocolate.id(), 10)?,
            OrderItem::new("item-456", candy.name(), candy.price(), candy.id(), 5)?,
        ],
    )?;
    order_repository.create(&order).await?;
    customer_repository.update(&customer).await?;

    info!(
        "Seeded customer {} with order {} (total {})",
        customer.id(),
        order.id(),
        order.total()
    );

    Ok(())
}
