//! The storefront domain layer.
//!
//! Entities (`Customer`, `Address`, `Product`, `Order`, `OrderItem`) enforce
//! their invariants at construction. Repositories in [`repository`] persist
//! them through `entity_api`; the event types and dispatcher come from the
//! `events` crate and are re-exported here so callers need only this crate.

pub use events::{DomainEvent, EventDispatcher, EventHandler, EventKind, EventPayload};

/// Ids are caller-assigned strings, shared with the persistence layer.
pub use entity_api::Id;

pub mod address;
pub mod customer;
pub mod domain_event;
pub mod error;
pub mod event_handler;
pub mod order;
pub mod order_item;
pub mod order_service;
pub mod product;
pub mod product_service;
pub mod repository;
pub mod seed;

pub use address::Address;
pub use customer::Customer;
pub use order::Order;
pub use order_item::OrderItem;
pub use product::Product;
