//! Event system infrastructure for the storefront.
//!
//! This crate provides the event system that decouples domain state changes
//! from their side effects (logging, notifications).
//!
//! # Architecture
//!
//! - **DomainEvent**: An immutable record of something that happened, with a timestamp and payload
//! - **EventKind**: The closed set of event kinds, used as the dispatch key
//! - **EventHandler**: Trait for implementing event handlers
//! - **EventDispatcher**: Registry mapping each kind to an ordered list of handlers
//!
//! This crate has no dependencies on internal crates (entity, domain, etc.),
//! avoiding circular dependencies. Entity data is carried as serialized JSON values.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

pub mod dispatcher;
pub mod error;

pub use dispatcher::EventDispatcher;
pub use error::{Error, EventErrorKind};

/// A type alias that represents any Entity's id field data type.
/// This matches the definition in the entity crate to maintain compatibility.
pub type Id = String;

/// The kinds of events the dispatcher can route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    CustomerCreated,
    CustomerChangeAddress,
    ProductCreated,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventKind::CustomerCreated => write!(f, "CustomerCreatedEvent"),
            EventKind::CustomerChangeAddress => write!(f, "CustomerChangeAddressEvent"),
            EventKind::ProductCreated => write!(f, "ProductCreatedEvent"),
        }
    }
}

/// Data carried by a domain event. The variant determines the event's kind.
///
/// Entity data is carried as `serde_json::Value` to avoid dependencies on
/// the domain crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum EventPayload {
    /// Emitted after a new customer has been registered.
    CustomerCreated {
        /// Complete serialized customer entity.
        customer: Value,
    },
    /// Emitted after a customer's address has been changed.
    CustomerChangeAddress {
        customer_id: Id,
        customer_name: String,
        /// The customer's new address.
        address: Value,
    },
    /// Emitted after a new product has been added to the catalog.
    ProductCreated {
        /// Complete serialized product entity.
        product: Value,
    },
}

impl EventPayload {
    pub fn kind(&self) -> EventKind {
        match self {
            EventPayload::CustomerCreated { .. } => EventKind::CustomerCreated,
            EventPayload::CustomerChangeAddress { .. } => EventKind::CustomerChangeAddress,
            EventPayload::ProductCreated { .. } => EventKind::ProductCreated,
        }
    }
}

/// A domain event: a payload stamped with the moment it occurred.
/// Fields are private so an event cannot change after construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainEvent {
    occurred_at: DateTime<Utc>,
    payload: EventPayload,
}

impl DomainEvent {
    /// Creates an event that occurred now.
    pub fn new(payload: EventPayload) -> Self {
        Self::with_timestamp(Utc::now(), payload)
    }

    /// Creates an event with an explicit timestamp.
    pub fn with_timestamp(occurred_at: DateTime<Utc>, payload: EventPayload) -> Self {
        Self {
            occurred_at,
            payload,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.payload.kind()
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn payload(&self) -> &EventPayload {
        &self.payload
    }
}

/// Trait for handling domain events.
/// Implementations perform side effects like logging or sending notifications.
/// Handlers run synchronously on the thread that called
/// [`EventDispatcher::notify`]; an `Err` stops the remaining handlers.
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &DomainEvent) -> Result<(), Error>;
}
