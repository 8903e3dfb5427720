use crate::error::Error;
use crate::Id;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Product {
    id: Id,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(id: impl Into<Id>, name: impl Into<String>, price: f64) -> Result<Self, Error> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.id.is_empty() {
            return Err(Error::validation("Id is required"));
        }
        if self.name.is_empty() {
            return Err(Error::validation("Name is required"));
        }
        Self::validate_price(self.price)
    }

    fn validate_price(price: f64) -> Result<(), Error> {
        if price.is_nan() || price < 0.0 {
            return Err(Error::validation("Price must be greater than or equal to zero"));
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

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), Error> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::validation("Name is required"));
        }
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> Result<(), Error> {
        Self::validate_price(price)?;
        self.price = price;
        Ok(())
    }
}
