//! Event handlers shipped with the storefront.
//!
//! All of them are side-effect only: they log (or pretend to send mail) and
//! never fail.

use events::{DomainEvent, Error, EventHandler, EventPayload};
use log::*;

/// Logs every event it receives, whatever its kind.
pub struct ConsoleLogHandler;

impl EventHandler for ConsoleLogHandler {
    fn handle(&self, event: &DomainEvent) -> Result<(), Error> {
        info!(
            "{} occurred at {}: {:?}",
            event.kind(),
            event.occurred_at(),
            event.payload()
        );
        Ok(())
    }
}

/// Logs a customer's new address. Register under `EventKind::CustomerChangeAddress`.
pub struct CustomerAddressChangedLogHandler;

impl EventHandler for CustomerAddressChangedLogHandler {
    fn handle(&self, event: &DomainEvent) -> Result<(), Error> {
        if let EventPayload::CustomerChangeAddress {
            customer_id,
            customer_name,
            address,
        } = event.payload()
        {
            info!("Address of customer {customer_id}, {customer_name} changed to: {address}");
        } else {
            warn!("Ignoring {} event, expected a customer address change", event.kind());
        }
        Ok(())
    }
}

/// Simulates notifying the catalog team by email. Register under `EventKind::ProductCreated`.
pub struct SendEmailWhenProductIsCreatedHandler {
    recipient: String,
}

impl SendEmailWhenProductIsCreatedHandler {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

impl EventHandler for SendEmailWhenProductIsCreatedHandler {
    fn handle(&self, event: &DomainEvent) -> Result<(), Error> {
        if let EventPayload::ProductCreated { product } = event.payload() {
            info!(
                "Sending email to {} about new product {}",
                self.recipient,
                product["name"]
            );
        } else {
            warn!("Ignoring {} event, expected a product creation", event.kind());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::Address;
    use crate::customer::Customer;
    use crate::domain_event;
    use crate::product::Product;

    fn address_changed() -> DomainEvent {
        let mut customer = Customer::new("customer-1", "Customer 1").unwrap();
        customer.change_address(Address::new("Street 1", 21, "Zip 1", "City 1").unwrap());
        domain_event::customer_address_changed(&customer).unwrap()
    }

    fn product_created() -> DomainEvent {
        domain_event::product_created(&Product::new("prod-123", "Chocolate", 5.0).unwrap())
            .unwrap()
    }

    #[test]
    fn console_log_handler_accepts_any_event() {
        assert!(ConsoleLogHandler.handle(&address_changed()).is_ok());
        assert!(ConsoleLogHandler.handle(&product_created()).is_ok());
    }

    #[test]
    fn address_log_handler_ignores_other_kinds() {
        assert!(CustomerAddressChangedLogHandler
            .handle(&address_changed())
            .is_ok());
        assert!(CustomerAddressChangedLogHandler
            .handle(&product_created())
            .is_ok());
    }

    #[test]
    fn email_handler_keeps_its_recipient() {
        let handler = SendEmailWhenProductIsCreatedHandler::new("catalog@example.com");

        assert_eq!(handler.recipient(), "catalog@example.com");
        assert!(handler.handle(&product_created()).is_ok());
        assert!(handler.handle(&address_changed()).is_ok());
    }
}
