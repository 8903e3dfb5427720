use crate::error::Error;
use crate::order_item::OrderItem;
use crate::Id;
use serde::Serialize;

/// An order aggregate: the order and the items it owns.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Order {
    id: Id,
    customer_id: Id,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        id: impl Into<Id>,
        customer_id: impl Into<Id>,
        items: Vec<OrderItem>,
    ) -> Result<Self, Error> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate()?;
        Ok(order)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.id.is_empty() {
            return Err(Error::validation("Id is required"));
        }
        if self.customer_id.is_empty() {
            return Err(Error::validation("CustomerId is required"));
        }
        if self.items.is_empty() {
            return Err(Error::validation("Items are required"));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::subtotal).sum()
    }
}
