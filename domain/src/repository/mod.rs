//! Repositories: the mapping layer between domain aggregates and persisted rows.
//!
//! Only this module touches `entity` row models. Everything above it works
//! with `Customer`, `Product` and `Order`.

use crate::error::Error;
use async_trait::async_trait;

pub mod customer;
pub mod order;
pub mod product;

pub use customer::CustomerRepository;
pub use order::OrderRepository;
pub use product::ProductRepository;

/// Persistence operations shared by every aggregate repository.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// Inserts a new aggregate.
    async fn create(&self, entity: &T) -> Result<(), Error>;

    /// Overwrites the stored aggregate with the same id.
    async fn update(&self, entity: &T) -> Result<(), Error>;

    /// Loads an aggregate by id.
    ///
    /// Returns an `Entity(NotFound)` error when no aggregate has that id.
    async fn find(&self, id: &str) -> Result<T, Error>;

    /// Loads every stored aggregate, in the store's default order.
    async fn find_all(&self) -> Result<Vec<T>, Error>;
}
