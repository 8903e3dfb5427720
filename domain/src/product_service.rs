//! Bulk operations over products.

use crate::error::Error;
use crate::product::Product;

/// Raises the price of every product by `percentage` percent.
///
/// Prices are validated one product at a time, so on error the products
/// before the failing one have already been changed.
pub fn increase_price(products: &mut [Product], percentage: f64) -> Result<(), Error> {
    for product in products.iter_mut() {
        let price = product.price() * percentage / 100.0 + product.price();
        product.change_price(price)?;
    }
    Ok(())
}
