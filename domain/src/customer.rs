use crate::address::Address;
use crate::error::Error;
use crate::Id;
use serde::Serialize;

/// A customer of the store.
///
/// Changing the address does not emit anything by itself; callers that want
/// to announce the change build a `CustomerChangeAddress` event with
/// [`crate::domain_event::customer_address_changed`] and dispatch it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Customer {
    id: Id,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: f64,
}

impl Customer {
    pub fn new(id: impl Into<Id>, name: impl Into<String>) -> Result<Self, Error> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0.0,
        };
        customer.validate()?;
        Ok(customer)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.id.is_empty() {
            return Err(Error::validation("Id is required"));
        }
        if self.name.is_empty() {
            return Err(Error::validation("Name is required"));
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> f64 {
        self.reward_points
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), Error> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::validation("Name is required"));
        }
        self.name = name;
        Ok(())
    }

    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Only customers with an address on file can be activated.
    pub fn activate(&mut self) -> Result<(), Error> {
        if self.address.is_none() {
            return Err(Error::validation(
                "Address is mandatory to activate a customer",
            ));
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: f64) {
        self.reward_points += points;
    }
}
