//! Operations that span orders and customers.

use crate::customer::Customer;
use crate::error::Error;
use crate::order::Order;
use crate::order_item::OrderItem;
use log::*;

/// Places a new order for `customer` and credits them half of the order
/// total in reward points.
pub fn place_order(
    customer: &mut Customer,
    order_id: &str,
    items: Vec<OrderItem>,
) -> Result<Order, Error> {
    let order = Order::new(order_id, customer.id(), items)?;
    customer.add_reward_points(order.total() / 2.0);

    debug!(
        "Placed order {} for customer {}, total={}",
        order.id(),
        customer.id(),
        order.total()
    );

    Ok(order)
}

/// Sum of the totals of `orders`.
pub fn total(orders: &[Order]) -> f64 {
    orders.iter().map(Order::total).sum()
}
