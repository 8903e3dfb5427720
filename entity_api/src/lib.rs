//! Row-level persistence operations for the storefront tables.
//!
//! Every function here takes and returns `entity` row models; mapping to and
//! from domain aggregates happens one layer up, in `domain::repository`.

pub use entity::{customers, order_items, orders, products, Id};

pub mod customer;
pub mod error;
pub mod order;
pub mod order_item;
pub mod product;
