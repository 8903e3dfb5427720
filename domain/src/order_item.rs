use crate::error::Error;
use crate::Id;
use serde::Serialize;

/// One line of an order: a product at a captured unit price, times a quantity.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrderItem {
    id: Id,
    name: String,
    price: f64,
    product_id: Id,
    quantity: i32,
}

impl OrderItem {
    pub fn new(
        id: impl Into<Id>,
        name: impl Into<String>,
        price: f64,
        product_id: impl Into<Id>,
        quantity: i32,
    ) -> Result<Self, Error> {
        let item = Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        };
        item.validate()?;
        Ok(item)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.id.is_empty() {
            return Err(Error::validation("Id is required"));
        }
        if self.product_id.is_empty() {
            return Err(Error::validation("ProductId is required"));
        }
        if self.quantity <= 0 {
            return Err(Error::validation("Quantity must be greater than 0"));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainErrorKind;

    #[test]
    fn subtotal_is_price_times_quantity() {
        let item = OrderItem::new("i1", "Item 1", 100.0, "p1", 2).unwrap();
        assert_eq!(item.subtotal(), 200.0);
    }

    #[test]
    fn new_rejects_a_non_positive_quantity() {
        for quantity in [0, -1] {
            let err = OrderItem::new("i1", "Item 1", 100.0, "p1", quantity).unwrap_err();
            assert_eq!(
                err.error_kind,
                DomainErrorKind::Validation("Quantity must be greater than 0".to_string())
            );
        }
    }

    #[test]
    fn new_rejects_a_missing_product_id() {
        assert!(OrderItem::new("i1", "Item 1", 100.0, "", 1).is_err());
    }
}
