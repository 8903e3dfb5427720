
pub mod customers;
pub mod order_items;
pub mod orders;
pub mod products;

/// A type alias that represents any Entity's internal id field data type.
/// Ids are caller-assigned strings (e.g. "ord-123"), never generated by the database.
pub type Id = String;
