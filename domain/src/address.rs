use crate::error::Error;
use serde::Serialize;
use std::fmt;

/// A postal address. Value object: two addresses with the same fields are the same address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Address {
    street: String,
    number: i32,
    zip: String,
    city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: i32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, Error> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.street.is_empty() {
            return Err(Error::validation("Street is required"));
        }
        if self.number == 0 {
            return Err(Error::validation("Number is required"));
        }
        if self.zip.is_empty() {
            return Err(Error::validation("Zip is required"));
        }
        if self.city.is_empty() {
            return Err(Error::validation("City is required"));
        }
        Ok(())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}
